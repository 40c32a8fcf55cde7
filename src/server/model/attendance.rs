//! Domain models for attendance tracking.
//!
//! Defines the per-student attendance ledger, its day-level entries, and the
//! per-class monthly report.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

/// Per-student attendance ledger with its day-level entries.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceLedger {
    /// Unique identifier for the ledger.
    pub id: i32,
    /// ID of the student the ledger belongs to.
    pub student_id: i32,
    /// Most recent mark, denormalized onto the ledger head.
    pub present: bool,
    /// Instant of the most recent mark.
    pub marked_at: DateTime<Utc>,
    /// One entry per marked school day, ordered by day ascending.
    pub days: Vec<AttendanceDay>,
}

impl AttendanceLedger {
    /// Converts a ledger head and its entry rows to a domain model at the
    /// repository boundary.
    ///
    /// # Arguments
    /// - `head` - The ledger head entity
    /// - `entries` - The day-level entry entities belonging to the head
    ///
    /// # Returns
    /// - `AttendanceLedger` - The converted ledger domain model
    pub fn from_entity(
        head: entity::attendance::Model,
        entries: Vec<entity::attendance_entry::Model>,
    ) -> Self {
        Self {
            id: head.id,
            student_id: head.student_id,
            present: head.present,
            marked_at: head.marked_at,
            days: entries.into_iter().map(AttendanceDay::from_entity).collect(),
        }
    }
}

/// Single day-level attendance entry.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceDay {
    /// Calendar day in the reference timezone.
    pub day: NaiveDate,
    /// Whether the student was present on the day.
    pub present: bool,
    /// Exact instant of the latest mark for the day.
    pub marked_at: DateTime<Utc>,
}

impl AttendanceDay {
    pub fn from_entity(entity: entity::attendance_entry::Model) -> Self {
        Self {
            day: entity.day,
            present: entity.present,
            marked_at: entity.marked_at,
        }
    }
}

/// Aggregated attendance for one class over one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassMonthlyReport {
    /// ID of the class the report covers.
    pub class_id: i32,
    /// Calendar year of the report.
    pub year: i32,
    /// Calendar month of the report, 1 through 12.
    pub month: u32,
    /// Marked student-days in the month across the class.
    pub total_days: u64,
    /// Marked student-days where the student was present.
    pub present_days: u64,
    /// Share of present marks as a percentage, settled to two decimal
    /// places. Zero when the class has no marks in the month.
    pub attendance_percentage: Decimal,
}
