//! Backend business logic for the registrar application.
//!
//! This module contains the complete backend implementation: the fee
//! computation engine, the attendance ledger and its reporting queries,
//! the fee notice dispatcher, and the scheduled jobs that drive them.
//! The backend uses SeaORM for database operations and tokio-cron-scheduler
//! for timed work; whatever transport the deployment chooses (REST, RPC,
//! CLI) sits on top of the service layer and is not part of this crate.
//!
//! # Architecture
//!
//! The backend follows a layered architecture with clear separation of concerns:
//!
//! - **Service Layer** (`service/`) - Business logic orchestration between callers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, notice transport, timezone)
//! - **Startup** (`startup`) - Initialization of database and migrations
//! - **Scheduler** (`scheduler/`) - Cron jobs for automated tasks (attendance rollover, fee reminders)
//!
//! # Call Flow
//!
//! A typical operation flows through these layers:
//!
//! 1. **Caller** (scheduler job or embedding application) invokes a service method
//! 2. **Service** validates input, executes business logic, orchestrates data operations
//! 3. **Data** queries the database, converts entities to domain models
//! 4. **Service** returns the domain model to the caller

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
