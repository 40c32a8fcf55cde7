//! Error types for the application.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors such as
//! transport failures alongside infrastructure errors from the database and
//! scheduler, plus the message variants used by the fee and attendance services.

pub mod config;
pub mod transport;

use thiserror::Error;

use crate::server::error::{config::ConfigError, transport::TransportError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic error conversion. The message variants
/// carry human-readable context assembled at the call site.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Notice transport error.
    ///
    /// Raised when an email or SMS dispatch fails or a student has no
    /// usable contact details. Inside batch jobs these are logged and
    /// skipped rather than propagated.
    #[error(transparent)]
    TransportErr(#[from] TransportError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Resource not found error.
    ///
    /// Raised when a student, fee record, or attendance ledger id does
    /// not resolve.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid input error.
    ///
    /// Raised for malformed input such as a negative fee amount or a fee
    /// record that belongs to a different student.
    ///
    /// # Fields
    /// - Message describing what was invalid about the input
    #[error("{0}")]
    Validation(String),

    /// Concurrent sequence-assignment collision.
    ///
    /// Raised only after the bounded internal retry loop for receipt and
    /// serial numbering has been exhausted.
    ///
    /// # Fields
    /// - Message describing the exhausted operation
    #[error("{0}")]
    Conflict(String),
}
