//! Fee notice dispatch service.
//!
//! This module provides the `FeeNoticeService` for composing due-reminder
//! notices and handing them to a delivery channel. Actual email/SMS delivery
//! is an external collaborator hidden behind the `NoticeTransport` trait; the
//! service resolves the guardian's contact details, sends through whichever
//! channels are on file, and persists an audit row for every dispatched
//! notice.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        fee_notice::FeeNoticeRepository, fee_record::FeeRecordRepository,
        student::StudentRepository,
    },
    error::{transport::TransportError, AppError},
    model::notice::{FeeNotice, SendNoticeParams},
};

/// Delivery channel for fee notices.
///
/// Implementations wrap whatever email and SMS providers the deployment
/// uses. The service only supplies the composed text and the resolved
/// address; providers report failures as `TransportError`.
#[async_trait::async_trait]
pub trait NoticeTransport: Send + Sync {
    /// Delivers a notice to a guardian email address.
    async fn send_email(&self, to: &str, message: &str) -> Result<(), TransportError>;

    /// Delivers a notice to a guardian phone number.
    async fn send_sms(&self, to: &str, message: &str) -> Result<(), TransportError>;
}

/// Transport that only logs, for deployments without a delivery provider.
pub struct LogTransport;

#[async_trait::async_trait]
impl NoticeTransport for LogTransport {
    async fn send_email(&self, to: &str, message: &str) -> Result<(), TransportError> {
        tracing::info!("Fee notice email to {}: {}", to, message);
        Ok(())
    }

    async fn send_sms(&self, to: &str, message: &str) -> Result<(), TransportError> {
        tracing::info!("Fee notice SMS to {}: {}", to, message);
        Ok(())
    }
}

/// Service providing fee notice dispatch operations.
///
/// Holds the database connection for resolving students and persisting the
/// notice audit trail, plus the transport the notice goes out through.
pub struct FeeNoticeService<'a> {
    /// Database connection for resolving students and storing notices
    db: &'a DatabaseConnection,
    /// Delivery channel for the composed notice text
    transport: Arc<dyn NoticeTransport>,
}

impl<'a> FeeNoticeService<'a> {
    /// Creates a new FeeNoticeService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `transport` - Delivery channel for notices
    ///
    /// # Returns
    /// - `FeeNoticeService` - New service instance
    pub fn new(db: &'a DatabaseConnection, transport: Arc<dyn NoticeTransport>) -> Self {
        Self { db, transport }
    }

    /// Dispatches a fee notice to a student's guardian
    ///
    /// Resolves the student's contact details, delivers the message through
    /// every channel on file, and records the notice. A referenced fee
    /// record must exist and belong to the student. Delivery failures
    /// propagate to the caller; the daily reminder scan catches them per
    /// student so one bad contact never stops the batch.
    ///
    /// # Arguments
    /// - `params`: Notice content and the student and record it concerns
    ///
    /// # Returns
    /// - `Ok(FeeNotice)`: The persisted notice
    /// - `Err(AppError)`: Validation, not-found, transport, or database error
    pub async fn send(&self, params: SendNoticeParams) -> Result<FeeNotice, AppError> {
        let student = StudentRepository::new(self.db)
            .get_by_id(params.student_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Student {} not found", params.student_id))
            })?;

        if let Some(record_id) = params.fee_record_id {
            let record = FeeRecordRepository::new(self.db)
                .get_by_id(record_id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Fee record {} not found", record_id)))?;

            if record.student_id != student.id {
                return Err(AppError::Validation(format!(
                    "Fee record {} does not belong to student {}",
                    record_id, student.id
                )));
            }
        }

        if student.guardian_email.is_none() && student.guardian_phone.is_none() {
            return Err(TransportError::NoContact(student.id).into());
        }

        if let Some(email) = &student.guardian_email {
            self.transport.send_email(email, &params.message).await?;
        }

        if let Some(phone) = &student.guardian_phone {
            self.transport.send_sms(phone, &params.message).await?;
        }

        let months = params
            .months
            .iter()
            .map(|month| month.name().to_string())
            .collect();

        let notice = FeeNoticeRepository::new(self.db)
            .create(
                params.fee_record_id,
                params.message,
                params.remark,
                params.due_amount,
                months,
            )
            .await?;

        Self::from_entity(notice)
    }

    /// Gets the notices sent against a fee record, oldest first
    ///
    /// # Arguments
    /// - `fee_record_id`: Fee record ID
    ///
    /// # Returns
    /// - `Ok(notices)`: Vector of notices for the record
    /// - `Err(AppError)`: Not-found or database error
    pub async fn history_for_record(&self, fee_record_id: i32) -> Result<Vec<FeeNotice>, AppError> {
        FeeRecordRepository::new(self.db)
            .get_by_id(fee_record_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Fee record {} not found", fee_record_id)))?;

        let notices = FeeNoticeRepository::new(self.db)
            .get_by_record(fee_record_id)
            .await?;

        notices.into_iter().map(Self::from_entity).collect()
    }

    /// Gets the most recently dispatched notices
    ///
    /// # Arguments
    /// - `limit`: Maximum number of notices to return
    ///
    /// # Returns
    /// - `Ok(notices)`: Vector of notices, newest first
    /// - `Err(AppError)`: Database error
    pub async fn recent(&self, limit: u64) -> Result<Vec<FeeNotice>, AppError> {
        let notices = FeeNoticeRepository::new(self.db).list_recent(limit).await?;

        notices.into_iter().map(Self::from_entity).collect()
    }

    fn from_entity(entity: entity::fee_notice::Model) -> Result<FeeNotice, AppError> {
        FeeNotice::from_entity(entity)
            .map_err(|err| {
                sea_orm::DbErr::Custom(format!("Failed to decode notice months: {}", err))
            })
            .map_err(AppError::from)
    }
}
