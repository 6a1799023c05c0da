//! 点击日志表迁移
//!
//! 创建 click_logs 表（只追加），每行代表一次跳转到外部地址的点击。

use sea_orm_migration::prelude::*;

use crate::m20261001_000001_listings::Listings;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClickLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClickLogs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ClickLogs::ListingId).big_integer().not_null())
                    .col(
                        ColumnDef::new(ClickLogs::OccurredAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_click_logs_listing")
                            .from(ClickLogs::Table, ClickLogs::ListingId)
                            .to(Listings::Table, Listings::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 按列表 join
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_click_logs_listing_id")
                    .table(ClickLogs::Table)
                    .col(ClickLogs::ListingId)
                    .to_owned(),
            )
            .await?;

        // 近期窗口的时间范围查询
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_click_logs_occurred_at")
                    .table(ClickLogs::Table)
                    .col(ClickLogs::OccurredAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_click_logs_occurred_at").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_click_logs_listing_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ClickLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ClickLogs {
    #[sea_orm(iden = "click_logs")]
    Table,
    Id,
    ListingId,
    OccurredAt,
}
