use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Subscription {
    Table,
    Id,
    WorkspaceId,
    Status,
    CurrentPeriodStart,
    CurrentPeriodEnd,
    CancelAtPeriodEnd,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Workspace {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Subscription::Table)
                .col(ColumnDef::new(Subscription::Id).string().not_null().primary_key())
                .col(ColumnDef::new(Subscription::WorkspaceId).uuid().not_null())
                .col(ColumnDef::new(Subscription::Status).string().not_null())
                .col(ColumnDef::new(Subscription::CurrentPeriodStart).timestamp_with_time_zone().null())
                .col(ColumnDef::new(Subscription::CurrentPeriodEnd).timestamp_with_time_zone().null())
                .col(ColumnDef::new(Subscription::CancelAtPeriodEnd).boolean().not_null())
                .col(ColumnDef::new(Subscription::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Subscription::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_subscription_workspace")
                        .from_tbl(Subscription::Table)
                        .from_col(Subscription::WorkspaceId)
                        .to_tbl(Workspace::Table)
                        .to_col(Workspace::Id)
                        .on_update(ForeignKeyAction::Cascade)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("ix_subscription_workspace")
                .table(Subscription::Table)
                .col(Subscription::WorkspaceId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Subscription::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
