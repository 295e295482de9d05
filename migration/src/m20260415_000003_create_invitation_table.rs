use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum WorkspaceInvitation {
    Table,
    Id,
    WorkspaceId,
    Email,
    Role,
    Token,
    InvitedBy,
    ExpiresAt,
    AcceptedAt,
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
                .table(WorkspaceInvitation::Table)
                .col(ColumnDef::new(WorkspaceInvitation::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(WorkspaceInvitation::WorkspaceId).uuid().not_null())
                .col(ColumnDef::new(WorkspaceInvitation::Email).string().not_null())
                .col(ColumnDef::new(WorkspaceInvitation::Role).string_len(16).not_null())
                .col(ColumnDef::new(WorkspaceInvitation::Token).string().not_null())
                .col(ColumnDef::new(WorkspaceInvitation::InvitedBy).uuid().not_null())
                .col(ColumnDef::new(WorkspaceInvitation::ExpiresAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(WorkspaceInvitation::AcceptedAt).timestamp_with_time_zone().null())
                .col(ColumnDef::new(WorkspaceInvitation::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(WorkspaceInvitation::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_invitation_workspace")
                        .from_tbl(WorkspaceInvitation::Table)
                        .from_col(WorkspaceInvitation::WorkspaceId)
                        .to_tbl(Workspace::Table)
                        .to_col(Workspace::Id)
                        .on_update(ForeignKeyAction::Cascade)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("uk_invitation_token")
                .table(WorkspaceInvitation::Table)
                .col(WorkspaceInvitation::Token)
                .unique()
                .to_owned(),
        ).await?;

        // pending-uniqueness per (workspace, email) is a business rule checked
        // before insert; this index keeps the probe cheap
        m.create_index(
            Index::create()
                .name("ix_invitation_workspace_email")
                .table(WorkspaceInvitation::Table)
                .col(WorkspaceInvitation::WorkspaceId)
                .col(WorkspaceInvitation::Email)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(WorkspaceInvitation::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
