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
                    .table(FeeRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(FeeRecord::Id))
                    .col(integer(FeeRecord::StudentId))
                    .col(string_len(FeeRecord::FeeMonth, 16))
                    .col(decimal_len(FeeRecord::FeePaid, 12, 2))
                    .col(decimal_len(FeeRecord::OtherFee, 12, 2))
                    .col(decimal_len(FeeRecord::PaidAmount, 12, 2))
                    .col(decimal_len(FeeRecord::Total, 12, 2))
                    .col(decimal_len(FeeRecord::ExtraFee, 12, 2))
                    .col(decimal_len(FeeRecord::DueAmount, 12, 2))
                    .col(decimal_len(FeeRecord::TotalDues, 12, 2))
                    .col(string_len(FeeRecord::Status, 8))
                    .col(big_integer(FeeRecord::ReceiptNo))
                    .col(big_integer(FeeRecord::SrNo))
                    .col(string(FeeRecord::AmountInWords))
                    .col(string_null(FeeRecord::PaymentMode))
                    .col(string_null(FeeRecord::PaymentReference))
                    .col(string_null(FeeRecord::BankName))
                    .col(text_null(FeeRecord::Remark))
                    .col(string_null(FeeRecord::ReceivedBy))
                    .col(
                        timestamp(FeeRecord::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fee_record_student_id")
                            .from(FeeRecord::Table, FeeRecord::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Receipt and serial numbers each come from their own global
        // sequence and must never repeat.
        manager
            .create_index(
                Index::create()
                    .name("idx_fee_record_receipt_no")
                    .table(FeeRecord::Table)
                    .col(FeeRecord::ReceiptNo)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_fee_record_sr_no")
                    .table(FeeRecord::Table)
                    .col(FeeRecord::SrNo)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_fee_record_receipt_no")
                    .table(FeeRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_fee_record_sr_no")
                    .table(FeeRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FeeRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FeeRecord {
    Table,
    Id,
    StudentId,
    FeeMonth,
    FeePaid,
    OtherFee,
    PaidAmount,
    Total,
    ExtraFee,
    DueAmount,
    TotalDues,
    Status,
    ReceiptNo,
    SrNo,
    AmountInWords,
    PaymentMode,
    PaymentReference,
    BankName,
    Remark,
    ReceivedBy,
    CreatedAt,
}
