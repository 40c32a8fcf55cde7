use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-student attendance ledger head.
///
/// One row per student; `present` and `marked_at` denormalize the most
/// recent mark so list views never touch the entry table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub student_id: i32,
    pub present: bool,
    pub marked_at: DateTimeUtc,
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
    #[sea_orm(has_many = "super::attendance_entry::Entity")]
    AttendanceEntry,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::attendance_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
