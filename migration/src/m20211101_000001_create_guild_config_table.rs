use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildConfig::Id))
                    .col(string_uniq(GuildConfig::GuildId))
                    .col(json(GuildConfig::AdminRoleIds))
                    .col(json(GuildConfig::ForbiddenRoleIds))
                    .col(timestamp_with_time_zone(GuildConfig::CreatedAt))
                    .col(timestamp_with_time_zone(GuildConfig::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum GuildConfig {
    Table,
    Id,
    GuildId,
    AdminRoleIds,
    ForbiddenRoleIds,
    CreatedAt,
    UpdatedAt,
}
