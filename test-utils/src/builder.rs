use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{SchoolClass, Student};
///
/// let test = TestBuilder::new()
///     .with_table(SchoolClass)
///     .with_table(Student)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// Initializes an empty builder ready to have entity tables added via `with_table()`.
    /// Chain method calls to configure the test environment before calling `build()`.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Chain multiple
    /// calls to add multiple tables. Tables should be added in dependency order (tables
    /// with foreign keys should be added after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for fee operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - SchoolClass
    /// - Student
    /// - FeeRecord
    /// - MonthDue
    /// - Sequence
    /// - FeeNotice
    ///
    /// Use this when testing fee computation, receipt numbering, or notice
    /// dispatch. For tests that also touch attendance, use `with_all_tables()`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_fee_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_fee_tables(self) -> Self {
        self.with_table(SchoolClass)
            .with_table(Student)
            .with_table(FeeRecord)
            .with_table(MonthDue)
            .with_table(Sequence)
            .with_table(FeeNotice)
    }

    /// Adds all tables required for attendance operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - SchoolClass
    /// - Student
    /// - Attendance
    /// - AttendanceEntry
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_attendance_tables(self) -> Self {
        self.with_table(SchoolClass)
            .with_table(Student)
            .with_table(Attendance)
            .with_table(AttendanceEntry)
    }

    /// Adds every table in the schema.
    ///
    /// Equivalent to `with_fee_tables()` followed by the attendance tables.
    /// Use this for scheduler-level tests that cross both subsystems.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_all_tables(self) -> Self {
        self.with_fee_tables()
            .with_table(Attendance)
            .with_table(AttendanceEntry)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`. Tables are created in the order
    /// they were added to the builder.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
