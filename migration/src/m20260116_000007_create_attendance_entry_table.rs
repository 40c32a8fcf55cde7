use sea_orm_migration::{prelude::*, schema::*};

use super::m20260116_000006_create_attendance_table::Attendance;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AttendanceEntry::Table)
                    .if_not_exists()
                    .col(integer(AttendanceEntry::AttendanceId))
                    .col(date(AttendanceEntry::Day))
                    .col(timestamp(AttendanceEntry::MarkedAt))
                    .col(boolean(AttendanceEntry::Present))
                    // One entry per ledger and day; re-marking updates in place
                    .primary_key(
                        Index::create()
                            .col(AttendanceEntry::AttendanceId)
                            .col(AttendanceEntry::Day),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_entry_attendance_id")
                            .from(AttendanceEntry::Table, AttendanceEntry::AttendanceId)
                            .to(Attendance::Table, Attendance::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AttendanceEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AttendanceEntry {
    Table,
    AttendanceId,
    Day,
    MarkedAt,
    Present,
}
