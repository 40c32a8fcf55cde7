use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One attendance mark per ledger and calendar day.
///
/// The `(attendance_id, day)` key makes re-marking a day an update rather
/// than a second row; `day` is the calendar date in the school's reference
/// timezone while `marked_at` keeps the exact instant.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendance_entry")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub attendance_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub day: Date,
    pub marked_at: DateTimeUtc,
    pub present: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::attendance::Entity",
        from = "Column::AttendanceId",
        to = "super::attendance::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Attendance,
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
