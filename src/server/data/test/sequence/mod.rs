use crate::server::data::sequence::{SequenceName, SequenceRepository};
use sea_orm::{DbErr, TransactionTrait};
use test_utils::builder::TestBuilder;

mod next_value;
mod raise_to;
