use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Workspace {
    Table,
    Id,
    Name,
    Slug,
    Plan,
    DatabaseProjectId,
    DatabaseUrl,
    DatabasePoolerUrl,
    BillingCustomerId,
    Settings,
    Suspended,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum WorkspaceMember {
    Table,
    WorkspaceId,
    UserId,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Workspace::Table)
                .col(ColumnDef::new(Workspace::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Workspace::Name).string().not_null())
                .col(ColumnDef::new(Workspace::Slug).string().not_null())
                .col(ColumnDef::new(Workspace::Plan).string().not_null())
                .col(ColumnDef::new(Workspace::DatabaseProjectId).string().null())
                .col(ColumnDef::new(Workspace::DatabaseUrl).string().null())
                .col(ColumnDef::new(Workspace::DatabasePoolerUrl).string().null())
                .col(ColumnDef::new(Workspace::BillingCustomerId).string().null())
                .col(ColumnDef::new(Workspace::Settings).json_binary().not_null())
                .col(ColumnDef::new(Workspace::Suspended).boolean().not_null())
                .col(ColumnDef::new(Workspace::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Workspace::UpdatedAt).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        // slugs are globally unique and never reused
        m.create_index(
            Index::create()
                .name("uk_workspace_slug")
                .table(Workspace::Table)
                .col(Workspace::Slug)
                .unique()
                .to_owned(),
        ).await?;

        m.create_table(
            Table::create()
                .table(WorkspaceMember::Table)
                .col(ColumnDef::new(WorkspaceMember::WorkspaceId).uuid().not_null())
                .col(ColumnDef::new(WorkspaceMember::UserId).uuid().not_null())
                .col(ColumnDef::new(WorkspaceMember::Role).string_len(16).not_null())
                .col(ColumnDef::new(WorkspaceMember::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(WorkspaceMember::UpdatedAt).timestamp_with_time_zone().not_null())
                .primary_key(
                    Index::create()
                        .col(WorkspaceMember::WorkspaceId)
                        .col(WorkspaceMember::UserId),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_member_workspace")
                        .from_tbl(WorkspaceMember::Table)
                        .from_col(WorkspaceMember::WorkspaceId)
                        .to_tbl(Workspace::Table)
                        .to_col(Workspace::Id)
                        .on_update(ForeignKeyAction::Cascade)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_member_user")
                        .from_tbl(WorkspaceMember::Table)
                        .from_col(WorkspaceMember::UserId)
                        .to_tbl(User::Table)
                        .to_col(User::Id)
                        .on_update(ForeignKeyAction::Cascade)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(WorkspaceMember::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(Workspace::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
