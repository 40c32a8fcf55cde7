//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! entity models to the service layer, which converts them to domain models. Repositories
//! are generic over the connection so the same queries run on a plain connection or inside
//! a transaction.

pub mod attendance;
pub mod fee_notice;
pub mod fee_record;
pub mod month_due;
pub mod sequence;
pub mod student;

#[cfg(test)]
mod test;
