//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary. They provide type-safe representations with
//! business logic separated from database concerns.

pub mod attendance;
pub mod fee;
pub mod notice;
pub mod student;
