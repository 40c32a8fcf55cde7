//! Registrar — fee reconciliation and attendance backend for a school
//! management system.
//!
//! The crate is a library-level service layer: the embedding application
//! (REST, RPC, CLI) calls into `server::service`, while the `registrar`
//! binary hosts the scheduled jobs that run without a request.

pub mod server;
