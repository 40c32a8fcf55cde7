use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub class_id: i32,
    pub name: String,
    pub guardian_phone: Option<String>,
    pub guardian_email: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub total_fee: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub monthly_fee: Decimal,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::school_class::Entity",
        from = "Column::ClassId",
        to = "super::school_class::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    SchoolClass,
    #[sea_orm(has_many = "super::fee_record::Entity")]
    FeeRecord,
    #[sea_orm(has_many = "super::month_due::Entity")]
    MonthDue,
    #[sea_orm(has_one = "super::attendance::Entity")]
    Attendance,
}

impl Related<super::school_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SchoolClass.def()
    }
}

impl Related<super::fee_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeeRecord.def()
    }
}

impl Related<super::month_due::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MonthDue.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
