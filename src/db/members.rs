use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::user::{Entity as User, Model as UserModel};
use entity::workspace_member::{
    ActiveModel as MemberActive, Entity as Member, Model as MemberModel, Role,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

impl PostgresService {
    pub async fn get_member(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<MemberModel>, AppError> {
        Ok(Member::find_by_id((workspace_id, user_id))
            .one(&self.database_connection)
            .await?)
    }

    /// Membership gate for workspace-scoped routes.
    pub async fn require_member(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
    ) -> Result<MemberModel, AppError> {
        self.get_member(workspace_id, user_id).await?.ok_or_else(|| {
            AppError::Forbidden("You are not a member of this workspace.".to_string())
        })
    }

    pub async fn list_members(
        &self,
        workspace_id: Uuid,
    ) -> Result<Vec<(MemberModel, UserModel)>, AppError> {
        let rows = Member::find()
            .filter(entity::workspace_member::Column::WorkspaceId.eq(workspace_id))
            .find_also_related(User)
            .all(&self.database_connection)
            .await?;
        Ok(rows
            .into_iter()
            .filter_map(|(member, user)| user.map(|u| (member, u)))
            .collect())
    }

    pub async fn add_member(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
        role: Role,
    ) -> Result<MemberModel, AppError> {
        let now = Utc::now();
        Member::insert(MemberActive {
            workspace_id: Set(workspace_id),
            user_id: Set(user_id),
            role: Set(role),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&self.database_connection)
        .await?;
        self.get_member(workspace_id, user_id)
            .await?
            .ok_or_else(|| AppError::Db(DbErr::RecordNotFound("Member not found".into())))
    }

    pub async fn update_member_role(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
        role: Role,
    ) -> Result<MemberModel, AppError> {
        let member = self
            .get_member(workspace_id, user_id)
            .await?
            .ok_or(AppError::NotFound)?;
        let mut am: MemberActive = member.into();
        am.role = Set(role);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn remove_member(&self, workspace_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        let res = Member::delete_by_id((workspace_id, user_id))
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
