use crate::fee_record::FeeMonth;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Outstanding balance for one student and one fee month.
///
/// Keyed by `(student_id, fee_month)`; a row is written whenever a payment
/// leaves the month short and zeroed once the month is covered.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "month_due")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub fee_month: FeeMonth,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub due_amount: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
