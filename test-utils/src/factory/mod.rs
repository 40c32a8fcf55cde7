//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let class = factory::school_class::create_class(&db).await?;
//!     let student = factory::student::create_student(&db, class.id).await?;
//!
//!     // Create with all dependencies
//!     let (class, student) = factory::helpers::create_student_with_class(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Using builder pattern for customization
//! let student = factory::student::StudentFactory::new(&db, class.id)
//!     .name("Asha Verma")
//!     .total_fee(rust_decimal::Decimal::from(2400))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `school_class` - Create school class entities
//! - `student` - Create student entities
//! - `fee_record` - Create settled or due fee record entities
//! - `attendance` - Create attendance ledgers and day entries
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod attendance;
pub mod fee_record;
pub mod helpers;
pub mod school_class;
pub mod student;

// Re-export commonly used factory functions for concise usage
pub use attendance::{create_entry, create_ledger};
pub use fee_record::create_fee_record;
pub use school_class::create_class;
pub use student::create_student;
