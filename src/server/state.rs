//! Application state shared across services and scheduled jobs.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned into each scheduled job closure.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Notice transport for delivering fee notices to guardians
//! - Reference timezone for calendar-day and fee-month decisions

use chrono::FixedOffset;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::service::notice::NoticeTransport;

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// services and scheduled jobs. It is initialized once during startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) into
/// each job that runs against it.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn NoticeTransport>` is a reference-counted pointer
/// - `FixedOffset` is `Copy`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all jobs and manages a pool of
    /// connections to the SQLite database.
    pub db: DatabaseConnection,

    /// Transport used to deliver fee notices to guardians.
    ///
    /// Abstracting the delivery channel behind a trait object lets the
    /// scheduled reminder scan and the notice service send through whatever
    /// backend was wired up at startup.
    pub transport: Arc<dyn NoticeTransport>,

    /// Offset of the school's local clock from UTC.
    ///
    /// Attendance days and fee months are decided in this timezone, not in
    /// UTC, so jobs that ask "what day is it" must go through this offset.
    pub timezone: FixedOffset,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during startup after all dependencies
    /// have been initialized. The resulting state is then handed to the
    /// scheduler when its jobs are registered.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `transport` - Transport for delivering fee notices
    /// - `timezone` - Reference timezone for day and month boundaries
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        transport: Arc<dyn NoticeTransport>,
        timezone: FixedOffset,
    ) -> Self {
        Self {
            db,
            transport,
            timezone,
        }
    }
}
