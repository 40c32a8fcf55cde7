//! School class factory for creating test class entities.
//!
//! Provides factory methods for creating school class entities with
//! sensible defaults, reducing boilerplate in tests.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test school classes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::school_class::SchoolClassFactory;
///
/// let class = SchoolClassFactory::new(&db)
///     .name("Grade 8B")
///     .build()
///     .await?;
/// ```
pub struct SchoolClassFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> SchoolClassFactory<'a> {
    /// Creates a new SchoolClassFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Class {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `SchoolClassFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Class {}", id),
        }
    }

    /// Sets the class name.
    ///
    /// # Arguments
    /// - `name` - Display name for the class
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the school class entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::school_class::Model)` - Created class entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::school_class::Model, DbErr> {
        entity::school_class::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a school class with default values.
///
/// Shorthand for `SchoolClassFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::school_class::Model)` - Created class entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_class(db: &DatabaseConnection) -> Result<entity::school_class::Model, DbErr> {
    SchoolClassFactory::new(db).build().await
}
