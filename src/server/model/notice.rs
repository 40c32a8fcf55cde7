//! Domain models for fee notices.
//!
//! Defines the persisted notice produced by the dispatcher and the parameter
//! type describing a notice to send.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use entity::fee_record::FeeMonth;

/// Dispatched fee notice as persisted for audit.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeNotice {
    /// Unique identifier for the notice.
    pub id: i32,
    /// Fee record the notice refers to, when one exists.
    pub fee_record_id: Option<i32>,
    /// Message body that was delivered.
    pub message: String,
    /// Free-form remark stored with the notice.
    pub remark: Option<String>,
    /// Outstanding amount the notice reported.
    pub due_amount: Decimal,
    /// Names of the months the notice covered.
    pub months: Vec<String>,
    /// Timestamp when the notice was dispatched.
    pub created_at: DateTime<Utc>,
}

impl FeeNotice {
    /// Converts an entity model to a notice domain model at the repository
    /// boundary, decoding the JSON-encoded month list stored in the row.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(FeeNotice)` - The converted notice domain model
    /// - `Err(serde_json::Error)` - The stored month list was not valid JSON
    pub fn from_entity(entity: entity::fee_notice::Model) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: entity.id,
            fee_record_id: entity.fee_record_id,
            message: entity.message,
            remark: entity.remark,
            due_amount: entity.due_amount,
            months: serde_json::from_str(&entity.months)?,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for dispatching a fee notice to a student's guardian.
#[derive(Debug, Clone)]
pub struct SendNoticeParams {
    /// ID of the student whose guardian receives the notice.
    pub student_id: i32,
    /// Fee record the notice refers to, when one exists. Must belong to the
    /// student when set.
    pub fee_record_id: Option<i32>,
    /// Message body to deliver.
    pub message: String,
    /// Free-form remark to store with the notice.
    pub remark: Option<String>,
    /// Outstanding amount to report.
    pub due_amount: Decimal,
    /// Months the notice covers.
    pub months: Vec<FeeMonth>,
}
