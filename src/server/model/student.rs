//! Domain models for student data operations.
//!
//! Defines student-related domain models and parameter types for enrollment
//! and fee plan management.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Enrolled student with class assignment, guardian contacts, and fee plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// Unique identifier for the student.
    pub id: i32,
    /// ID of the class the student is enrolled in.
    pub class_id: i32,
    /// Full name of the student.
    pub name: String,
    /// Guardian phone number for SMS notices.
    pub guardian_phone: Option<String>,
    /// Guardian email address for email notices.
    pub guardian_email: Option<String>,
    /// Total fee owed for the academic year.
    pub total_fee: Decimal,
    /// Fee owed for a single month, derived from the total at registration.
    pub monthly_fee: Decimal,
    /// Timestamp when the student was registered.
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// Converts an entity model to a student domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Student` - The converted student domain model
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            class_id: entity.class_id,
            name: entity.name,
            guardian_phone: entity.guardian_phone,
            guardian_email: entity.guardian_email,
            total_fee: entity.total_fee,
            monthly_fee: entity.monthly_fee,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for registering a new student.
///
/// The monthly fee is not part of the request; it is derived from the total
/// fee when the registration is processed.
#[derive(Debug, Clone)]
pub struct RegisterStudentParams {
    /// ID of the class the student enrolls in.
    pub class_id: i32,
    /// Full name of the student.
    pub name: String,
    /// Guardian phone number for SMS notices.
    pub guardian_phone: Option<String>,
    /// Guardian email address for email notices.
    pub guardian_email: Option<String>,
    /// Total fee owed for the academic year.
    pub total_fee: Decimal,
}

/// Parameters for inserting a student row.
///
/// Carries the derived monthly fee alongside the registration fields, so the
/// repository stores exactly what the service computed.
#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    /// ID of the class the student enrolls in.
    pub class_id: i32,
    /// Full name of the student.
    pub name: String,
    /// Guardian phone number for SMS notices.
    pub guardian_phone: Option<String>,
    /// Guardian email address for email notices.
    pub guardian_email: Option<String>,
    /// Total fee owed for the academic year.
    pub total_fee: Decimal,
    /// Fee owed for a single month.
    pub monthly_fee: Decimal,
}
