//! Student factory for creating test student entities.
//!
//! Provides factory methods for creating student entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// The default annual fee of 1200 divides into a clean monthly fee of 100,
/// which keeps fee-computation assertions readable.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db, class.id)
///     .name("Asha Verma")
///     .total_fee(Decimal::from(2400))
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    class_id: i32,
    name: String,
    guardian_phone: Option<String>,
    guardian_email: Option<String>,
    total_fee: Decimal,
    monthly_fee: Option<Decimal>,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Student {id}"` where id is auto-incremented
    /// - guardian_phone: `Some("+1555{id}")`
    /// - guardian_email: `Some("guardian{id}@example.com")`
    /// - total_fee: `1200`
    /// - monthly_fee: derived as total_fee / 12, rounded to 2 decimal places
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `class_id` - School class ID this student belongs to
    ///
    /// # Returns
    /// - `StudentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, class_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            class_id,
            name: format!("Student {}", id),
            guardian_phone: Some(format!("+1555{:07}", id)),
            guardian_email: Some(format!("guardian{}@example.com", id)),
            total_fee: Decimal::from(1200),
            monthly_fee: None,
        }
    }

    /// Sets the student name.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the guardian phone number.
    ///
    /// Pass `None` to create a student without an SMS contact.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn guardian_phone(mut self, guardian_phone: Option<String>) -> Self {
        self.guardian_phone = guardian_phone;
        self
    }

    /// Sets the guardian email address.
    ///
    /// Pass `None` to create a student without an email contact.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn guardian_email(mut self, guardian_email: Option<String>) -> Self {
        self.guardian_email = guardian_email;
        self
    }

    /// Sets the annual fee; the monthly fee is re-derived unless
    /// `monthly_fee()` is also called.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn total_fee(mut self, total_fee: Decimal) -> Self {
        self.total_fee = total_fee;
        self
    }

    /// Overrides the derived monthly fee.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn monthly_fee(mut self, monthly_fee: Decimal) -> Self {
        self.monthly_fee = Some(monthly_fee);
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        let monthly_fee = self.monthly_fee.unwrap_or_else(|| {
            (self.total_fee / Decimal::from(12))
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        });

        entity::student::ActiveModel {
            id: ActiveValue::NotSet,
            class_id: ActiveValue::Set(self.class_id),
            name: ActiveValue::Set(self.name),
            guardian_phone: ActiveValue::Set(self.guardian_phone),
            guardian_email: ActiveValue::Set(self.guardian_email),
            total_fee: ActiveValue::Set(self.total_fee),
            monthly_fee: ActiveValue::Set(monthly_fee),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values in the specified class.
///
/// Shorthand for `StudentFactory::new(db, class_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `class_id` - School class ID
///
/// # Returns
/// - `Ok(entity::student::Model)` - Created student entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_student(
    db: &DatabaseConnection,
    class_id: i32,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db, class_id).build().await
}
