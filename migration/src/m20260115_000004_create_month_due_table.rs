use sea_orm_migration::{prelude::*, schema::*};

use super::m20260114_000002_create_student_table::Student;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MonthDue::Table)
                    .if_not_exists()
                    .col(integer(MonthDue::StudentId))
                    .col(string_len(MonthDue::FeeMonth, 16))
                    .col(decimal_len(MonthDue::DueAmount, 12, 2))
                    .primary_key(
                        Index::create()
                            .col(MonthDue::StudentId)
                            .col(MonthDue::FeeMonth),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_month_due_student_id")
                            .from(MonthDue::Table, MonthDue::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MonthDue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MonthDue {
    Table,
    StudentId,
    FeeMonth,
    DueAmount,
}
