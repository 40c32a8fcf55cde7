use sea_orm_migration::{prelude::*, schema::*};

use super::m20260114_000001_create_school_class_table::SchoolClass;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(integer(Student::ClassId))
                    .col(string(Student::Name))
                    .col(string_null(Student::GuardianPhone))
                    .col(string_null(Student::GuardianEmail))
                    .col(decimal_len(Student::TotalFee, 12, 2))
                    .col(decimal_len(Student::MonthlyFee, 12, 2))
                    .col(
                        timestamp(Student::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_class_id")
                            .from(Student::Table, Student::ClassId)
                            .to(SchoolClass::Table, SchoolClass::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    ClassId,
    Name,
    GuardianPhone,
    GuardianEmail,
    TotalFee,
    MonthlyFee,
    CreatedAt,
}
