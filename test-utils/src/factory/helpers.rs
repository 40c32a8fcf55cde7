//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a student together with the class it belongs to.
///
/// Both entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((class, student))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_with_class(
    db: &DatabaseConnection,
) -> Result<(entity::school_class::Model, entity::student::Model), DbErr> {
    let class = crate::factory::school_class::create_class(db).await?;
    let student = crate::factory::student::create_student(db, class.id).await?;

    Ok((class, student))
}

/// Creates a student with its class and an empty attendance ledger.
///
/// This is the full dependency chain needed by attendance tests:
/// class, student, and the student's ledger head row.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((class, student, attendance))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_with_ledger(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::school_class::Model,
        entity::student::Model,
        entity::attendance::Model,
    ),
    DbErr,
> {
    let (class, student) = create_student_with_class(db).await?;
    let attendance = crate::factory::attendance::create_ledger(db, student.id).await?;

    Ok((class, student, attendance))
}
