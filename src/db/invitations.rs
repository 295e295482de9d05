use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token;
use chrono::Utc;
use entity::user::Model as UserModel;
use entity::workspace_invitation::{
    ActiveModel as InvitationActive, Entity as Invitation, Model as InvitationModel,
};
use entity::workspace_member::{Entity as Member, Model as MemberModel, Role};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set, SqlErr,
    TransactionTrait,
};
use uuid::Uuid;

pub const INVITE_TTL_DAYS: i64 = 7;

impl PostgresService {
    pub async fn has_pending_invitation(
        &self,
        workspace_id: Uuid,
        email: &str,
    ) -> Result<bool, AppError> {
        Ok(Invitation::find()
            .filter(entity::workspace_invitation::Column::WorkspaceId.eq(workspace_id))
            .filter(entity::workspace_invitation::Column::Email.eq(email.to_lowercase()))
            .filter(entity::workspace_invitation::Column::AcceptedAt.is_null())
            .filter(entity::workspace_invitation::Column::ExpiresAt.gt(Utc::now()))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    /// Create a pending invitation. Current members and emails with a live
    /// pending invitation are rejected here so callers get domain errors
    /// instead of 500s.
    pub async fn create_invitation(
        &self,
        workspace_id: Uuid,
        email: &str,
        role: Role,
        invited_by: Uuid,
        expires_at: chrono::DateTime<Utc>,
    ) -> Result<InvitationModel, AppError> {
        let email = email.to_lowercase();

        self.get_workspace_by_id(workspace_id).await?;
        self.get_user_by_id(&invited_by).await?;

        if let Ok(user) = self.get_user_by_email(&email).await {
            if self.get_member(workspace_id, user.id).await?.is_some() {
                return Err(AppError::Conflict(
                    "This email already belongs to a workspace member.".to_string(),
                ));
            }
        }
        if self.has_pending_invitation(workspace_id, &email).await? {
            return Err(AppError::Conflict(
                "An invitation for this email is already pending.".to_string(),
            ));
        }

        let id = token::new_id();
        let invite_token = token::new_invite_token();
        let now = Utc::now();
        let insert = Invitation::insert(InvitationActive {
            id: Set(id),
            workspace_id: Set(workspace_id),
            email: Set(email),
            role: Set(role),
            token: Set(invite_token),
            invited_by: Set(invited_by),
            expires_at: Set(expires_at),
            accepted_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&self.database_connection)
        .await;

        match insert {
            Ok(_) => self.get_invitation_by_id(id).await,
            Err(err) => {
                if let Some(sql_err) = err.sql_err() {
                    return match sql_err {
                        SqlErr::UniqueConstraintViolation(_) => Err(AppError::AlreadyExists),
                        SqlErr::ForeignKeyConstraintViolation(_) => {
                            Err(AppError::BadRequest("Related record missing".to_string()))
                        }
                        _ => Err(err.into()),
                    };
                }
                Err(err.into())
            }
        }
    }

    pub async fn get_invitation_by_id(&self, id: Uuid) -> Result<InvitationModel, AppError> {
        Ok(Invitation::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Invitation not found".into()))?)
    }

    pub async fn get_invitation_by_token(&self, token: &str) -> Result<InvitationModel, AppError> {
        Ok(Invitation::find()
            .filter(entity::workspace_invitation::Column::Token.eq(token))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Invitation not found".into()))?)
    }

    pub async fn list_pending_invitations_for_workspace(
        &self,
        workspace_id: Uuid,
    ) -> Result<Vec<InvitationModel>, AppError> {
        Ok(Invitation::find()
            .filter(entity::workspace_invitation::Column::WorkspaceId.eq(workspace_id))
            .filter(entity::workspace_invitation::Column::AcceptedAt.is_null())
            .filter(entity::workspace_invitation::Column::ExpiresAt.gt(Utc::now()))
            .all(&self.database_connection)
            .await?)
    }

    /// Accept an invitation: mark it accepted and create the membership, both
    /// stamped with the same timestamp, in one transaction. Expiry is checked
    /// here, at acceptance time.
    pub async fn accept_invitation(
        &self,
        invite_token: &str,
        acceptor: &UserModel,
    ) -> Result<MemberModel, AppError> {
        let txn = self.database_connection.begin().await?;

        let invitation = Invitation::find()
            .filter(entity::workspace_invitation::Column::Token.eq(invite_token))
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Invitation not found".into()))?;

        if invitation.email != acceptor.email.to_lowercase() {
            txn.rollback().await?;
            return Err(AppError::Forbidden(
                "This invitation was issued to a different email address.".to_string(),
            ));
        }
        if invitation.accepted_at.is_some() {
            txn.rollback().await?;
            return Err(AppError::Conflict(
                "This invitation has already been accepted.".to_string(),
            ));
        }
        let now = Utc::now();
        if invitation.is_expired(now) {
            txn.rollback().await?;
            return Err(AppError::BadRequest(
                "This invitation has expired.".to_string(),
            ));
        }
        if Member::find_by_id((invitation.workspace_id, acceptor.id))
            .one(&txn)
            .await?
            .is_some()
        {
            txn.rollback().await?;
            return Err(AppError::Conflict(
                "You are already a member of this workspace.".to_string(),
            ));
        }

        let workspace_id = invitation.workspace_id;
        let role = invitation.role;

        let mut am: InvitationActive = invitation.into();
        am.accepted_at = Set(Some(now));
        am.updated_at = Set(now);
        am.update(&txn).await?;

        Member::insert(entity::workspace_member::ActiveModel {
            workspace_id: Set(workspace_id),
            user_id: Set(acceptor.id),
            role: Set(role),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;

        self.get_member(workspace_id, acceptor.id)
            .await?
            .ok_or_else(|| AppError::Db(DbErr::RecordNotFound("Member not found".into())))
    }

    /// Hard-delete a specific invitation (revoke). No tombstone.
    pub async fn delete_invitation(&self, workspace_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let res = Invitation::delete_many()
            .filter(entity::workspace_invitation::Column::Id.eq(id))
            .filter(entity::workspace_invitation::Column::WorkspaceId.eq(workspace_id))
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    /// Hard-delete all expired *pending* invitations.
    pub async fn expire_invitations(&self) -> Result<u64, AppError> {
        let res = Invitation::delete_many()
            .filter(entity::workspace_invitation::Column::AcceptedAt.is_null())
            .filter(entity::workspace_invitation::Column::ExpiresAt.lte(Utc::now()))
            .exec(&self.database_connection)
            .await?;
        Ok(res.rows_affected)
    }
}
