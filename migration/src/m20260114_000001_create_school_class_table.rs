use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SchoolClass::Table)
                    .if_not_exists()
                    .col(pk_auto(SchoolClass::Id))
                    .col(string(SchoolClass::Name))
                    .to_owned(),
            )
            .await?;

        // Create unique index on name
        manager
            .create_index(
                Index::create()
                    .name("idx_school_class_name")
                    .table(SchoolClass::Table)
                    .col(SchoolClass::Name)
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
                    .name("idx_school_class_name")
                    .table(SchoolClass::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SchoolClass::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SchoolClass {
    Table,
    Id,
    Name,
}
