//! Attendance factory for creating test ledgers and day entries.
//!
//! Provides factory methods for the attendance ledger head row and its
//! per-day entries. Entries timestamp their mark at 08:00 UTC on the
//! given day so rollover cutoffs behave predictably in tests.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating attendance ledger heads with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::attendance::AttendanceFactory;
///
/// let ledger = AttendanceFactory::new(&db, student.id)
///     .present(true)
///     .build()
///     .await?;
/// ```
pub struct AttendanceFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    present: bool,
    marked_at: DateTime<Utc>,
}

impl<'a> AttendanceFactory<'a> {
    /// Creates a new AttendanceFactory with default values.
    ///
    /// Defaults:
    /// - present: `false`
    /// - marked_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `student_id` - Student the ledger belongs to
    ///
    /// # Returns
    /// - `AttendanceFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, student_id: i32) -> Self {
        Self {
            db,
            student_id,
            present: false,
            marked_at: Utc::now(),
        }
    }

    /// Sets the denormalized latest-mark flag.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn present(mut self, present: bool) -> Self {
        self.present = present;
        self
    }

    /// Sets the denormalized latest-mark timestamp.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn marked_at(mut self, marked_at: DateTime<Utc>) -> Self {
        self.marked_at = marked_at;
        self
    }

    /// Builds and inserts the attendance ledger head into the database.
    ///
    /// # Returns
    /// - `Ok(entity::attendance::Model)` - Created ledger entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::attendance::Model, DbErr> {
        entity::attendance::ActiveModel {
            id: ActiveValue::NotSet,
            student_id: ActiveValue::Set(self.student_id),
            present: ActiveValue::Set(self.present),
            marked_at: ActiveValue::Set(self.marked_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an attendance ledger head with default values for the student.
///
/// Shorthand for `AttendanceFactory::new(db, student_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `student_id` - Student the ledger belongs to
///
/// # Returns
/// - `Ok(entity::attendance::Model)` - Created ledger entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_ledger(
    db: &DatabaseConnection,
    student_id: i32,
) -> Result<entity::attendance::Model, DbErr> {
    AttendanceFactory::new(db, student_id).build().await
}

/// Creates a day entry on an attendance ledger.
///
/// The mark timestamp is fixed at 08:00 UTC on `day`, so entries created
/// for past days always fall before the current day's rollover cutoff.
///
/// # Arguments
/// - `db` - Database connection
/// - `attendance_id` - Ledger the entry belongs to
/// - `day` - Calendar day of the mark
/// - `present` - Whether the student was marked present
///
/// # Returns
/// - `Ok(entity::attendance_entry::Model)` - Created entry entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_entry(
    db: &DatabaseConnection,
    attendance_id: i32,
    day: NaiveDate,
    present: bool,
) -> Result<entity::attendance_entry::Model, DbErr> {
    let eight_am = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    let marked_at = day.and_time(eight_am).and_utc();

    entity::attendance_entry::ActiveModel {
        attendance_id: ActiveValue::Set(attendance_id),
        day: ActiveValue::Set(day),
        marked_at: ActiveValue::Set(marked_at),
        present: ActiveValue::Set(present),
    }
    .insert(db)
    .await
}
