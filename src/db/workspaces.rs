use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, workspace::DBWorkspaceCreate};
use crate::utils::slug::{random_suffix, slugify, validate_slug};
use crate::utils::token;
use chrono::Utc;
use entity::workspace::{ActiveModel as WorkspaceActive, Entity as Workspace, Model as WorkspaceModel};
use entity::workspace_invitation::Entity as Invitation;
use entity::workspace_member::{
    ActiveModel as MemberActive, Entity as Member, Model as MemberModel, Role,
};
use entity::subscription::Entity as Subscription;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set, SqlErr,
    TransactionTrait,
};
use uuid::Uuid;

const MAX_SLUG_ATTEMPTS: usize = 10;
const DEFAULT_PLAN: &str = "free";

impl PostgresService {
    pub async fn slug_exists(&self, slug: &str) -> Result<bool, AppError> {
        Ok(Workspace::find()
            .filter(entity::workspace::Column::Slug.eq(slug))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    /// Derive a slug from the display name and probe until free. Collisions
    /// get a random 4-char suffix; after 10 attempts we give up rather than
    /// loop forever.
    pub async fn generate_unique_slug(&self, name: &str) -> Result<String, AppError> {
        let derived = slugify(name);
        // names like "絵" or "-" slugify to something unusable
        let stem = if derived.len() < 3 || !derived.starts_with(|c: char| c.is_ascii_lowercase()) {
            "workspace".to_string()
        } else {
            let mut s = derived;
            s.truncate(45);
            s.trim_end_matches('-').to_string()
        };

        for attempt in 0..MAX_SLUG_ATTEMPTS {
            let candidate = if attempt == 0 {
                stem.clone()
            } else {
                format!("{stem}-{}", random_suffix(4))
            };
            if validate_slug(&candidate).is_err() {
                continue;
            }
            if !self.slug_exists(&candidate).await? {
                return Ok(candidate);
            }
        }
        Err(AppError::Internal(format!(
            "could not find a free slug for {name:?} after {MAX_SLUG_ATTEMPTS} attempts"
        )))
    }

    /// Insert the workspace and its owner membership in one transaction,
    /// sharing a single creation timestamp. The unique index on slug is the
    /// backstop for creation races that pass the pre-check.
    pub async fn create_workspace(
        &self,
        payload: DBWorkspaceCreate,
    ) -> Result<(WorkspaceModel, MemberModel), AppError> {
        if self.slug_exists(&payload.slug).await? {
            return Err(AppError::Conflict(
                "A workspace with this slug already exists.".to_string(),
            ));
        }

        let wid = token::new_id();
        let now = Utc::now();
        let (database_project_id, database_url, database_pooler_url) = match payload.database {
            Some(db) => (Some(db.project_id), Some(db.connection_uri), Some(db.pooler_uri)),
            None => (None, None, None),
        };

        let txn = self.database_connection.begin().await?;

        let insert = Workspace::insert(WorkspaceActive {
            id: Set(wid),
            name: Set(payload.name),
            slug: Set(payload.slug),
            plan: Set(DEFAULT_PLAN.to_string()),
            database_project_id: Set(database_project_id),
            database_url: Set(database_url),
            database_pooler_url: Set(database_pooler_url),
            billing_customer_id: Set(payload.billing_customer_id),
            settings: Set(serde_json::json!({})),
            suspended: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&txn)
        .await;

        if let Err(err) = insert {
            txn.rollback().await?;
            if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
                return Err(AppError::Conflict(
                    "A workspace with this slug already exists.".to_string(),
                ));
            }
            return Err(err.into());
        }

        Member::insert(MemberActive {
            workspace_id: Set(wid),
            user_id: Set(payload.owner),
            role: Set(Role::Owner),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;

        let workspace = self.get_workspace_by_id(wid).await?;
        let member = self
            .get_member(wid, payload.owner)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Member not found".into()))?;
        Ok((workspace, member))
    }

    pub async fn get_workspace_by_id(&self, id: Uuid) -> Result<WorkspaceModel, AppError> {
        Ok(Workspace::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Workspace not found".into()))?)
    }

    pub async fn get_workspace_by_slug(&self, slug: &str) -> Result<WorkspaceModel, AppError> {
        Ok(Workspace::find()
            .filter(entity::workspace::Column::Slug.eq(slug))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Workspace not found".into()))?)
    }

    pub async fn list_workspaces_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<(WorkspaceModel, Role)>, AppError> {
        let rows = Member::find()
            .filter(entity::workspace_member::Column::UserId.eq(user_id))
            .find_also_related(Workspace)
            .all(&self.database_connection)
            .await?;
        Ok(rows
            .into_iter()
            .filter_map(|(member, workspace)| workspace.map(|w| (w, member.role)))
            .collect())
    }

    /// Name and settings only; the slug is immutable after creation.
    pub async fn update_workspace(
        &self,
        workspace_id: Uuid,
        name: Option<String>,
        settings: Option<serde_json::Value>,
    ) -> Result<WorkspaceModel, AppError> {
        let workspace = self.get_workspace_by_id(workspace_id).await?;
        let mut am: WorkspaceActive = workspace.into();
        if let Some(name) = name {
            am.name = Set(name);
        }
        if let Some(settings) = settings {
            am.settings = Set(settings);
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn set_workspace_billing_customer(
        &self,
        workspace_id: Uuid,
        customer_id: String,
    ) -> Result<(), AppError> {
        let mut am: WorkspaceActive = self.get_workspace_by_id(workspace_id).await?.into();
        am.billing_customer_id = Set(Some(customer_id));
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await.map(|_| ())?)
    }

    pub async fn find_workspace_by_billing_customer(
        &self,
        customer_id: &str,
    ) -> Result<Option<WorkspaceModel>, AppError> {
        Ok(Workspace::find()
            .filter(entity::workspace::Column::BillingCustomerId.eq(customer_id))
            .one(&self.database_connection)
            .await?)
    }

    /// Delete a workspace with its members, invitations and subscriptions in
    /// one transaction. External deprovisioning is the caller's problem.
    pub async fn delete_workspace(&self, workspace_id: Uuid) -> Result<(), AppError> {
        let txn = self.database_connection.begin().await?;

        if Workspace::find_by_id(workspace_id).one(&txn).await?.is_none() {
            txn.rollback().await?;
            return Err(AppError::NotFound);
        }

        Invitation::delete_many()
            .filter(entity::workspace_invitation::Column::WorkspaceId.eq(workspace_id))
            .exec(&txn)
            .await?;
        Subscription::delete_many()
            .filter(entity::subscription::Column::WorkspaceId.eq(workspace_id))
            .exec(&txn)
            .await?;
        Member::delete_many()
            .filter(entity::workspace_member::Column::WorkspaceId.eq(workspace_id))
            .exec(&txn)
            .await?;
        Workspace::delete_by_id(workspace_id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}
