use sea_orm_migration::{prelude::*, schema::*};

use super::m20260115_000003_create_fee_record_table::FeeRecord;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FeeNotice::Table)
                    .if_not_exists()
                    .col(pk_auto(FeeNotice::Id))
                    .col(integer_null(FeeNotice::FeeRecordId))
                    .col(text(FeeNotice::Message))
                    .col(text_null(FeeNotice::Remark))
                    .col(decimal_len(FeeNotice::DueAmount, 12, 2))
                    .col(string(FeeNotice::Months))
                    .col(
                        timestamp(FeeNotice::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fee_notice_fee_record_id")
                            .from(FeeNotice::Table, FeeNotice::FeeRecordId)
                            .to(FeeRecord::Table, FeeRecord::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FeeNotice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FeeNotice {
    Table,
    Id,
    FeeRecordId,
    Message,
    Remark,
    DueAmount,
    Months,
    CreatedAt,
}
