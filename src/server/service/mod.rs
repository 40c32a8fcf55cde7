//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between
//! callers (scheduled jobs or an embedding application) and the data (repository)
//! layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than entity models
//! - **Transaction Management**: Handling multi-step operations that must commit atomically

pub mod attendance;
pub mod attendance_report;
pub mod fee;
pub mod notice;
pub mod student;
