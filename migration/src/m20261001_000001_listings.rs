//! 列表表迁移
//!
//! 创建 listings 表：展示字段 + 截止日期（deadline）。

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Listings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Listings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Listings::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Listings::Publisher).string_len(255).null())
                    .col(ColumnDef::new(Listings::Author).string_len(255).null())
                    .col(ColumnDef::new(Listings::DestinationUrl).text().not_null())
                    .col(ColumnDef::new(Listings::Category).string_len(100).null())
                    .col(ColumnDef::new(Listings::Deadline).date().not_null())
                    .col(
                        ColumnDef::new(Listings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 有效列表查询：deadline >= today
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_listings_deadline")
                    .table(Listings::Table)
                    .col(Listings::Deadline)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_listings_deadline").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Listings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Listings {
    #[sea_orm(iden = "listings")]
    Table,
    Id,
    Title,
    Publisher,
    Author,
    DestinationUrl,
    Category,
    Deadline,
    CreatedAt,
}
