use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Dispatched due-reminder, kept as read-only history.
///
/// `fee_record_id` is nullable: the daily dues scan also reminds students
/// who have never paid and therefore have no record to reference.
/// `months` holds the affected month names as a JSON-encoded array.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fee_notice")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fee_record_id: Option<i32>,
    pub message: String,
    pub remark: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub due_amount: Decimal,
    pub months: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fee_record::Entity",
        from = "Column::FeeRecordId",
        to = "super::fee_record::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    FeeRecord,
}

impl Related<super::fee_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeeRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
