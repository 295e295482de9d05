use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use chrono::{DateTime, Utc};
use entity::subscription::{
    ActiveModel as SubscriptionActive, Entity as Subscription, Model as SubscriptionModel,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

pub struct SubscriptionUpsert {
    pub id: String,
    pub workspace_id: Uuid,
    pub status: String,
    pub current_period_start: Option<DateTime<Utc>>,
    pub current_period_end: Option<DateTime<Utc>>,
    pub cancel_at_period_end: bool,
}

impl PostgresService {
    /// Insert-or-update keyed by the processor's subscription id. Only the
    /// webhook path calls this.
    pub async fn upsert_subscription(
        &self,
        payload: SubscriptionUpsert,
    ) -> Result<SubscriptionModel, AppError> {
        let now = Utc::now();
        match Subscription::find_by_id(payload.id.clone())
            .one(&self.database_connection)
            .await?
        {
            Some(existing) => {
                let mut am: SubscriptionActive = existing.into();
                am.status = Set(payload.status);
                am.current_period_start = Set(payload.current_period_start);
                am.current_period_end = Set(payload.current_period_end);
                am.cancel_at_period_end = Set(payload.cancel_at_period_end);
                am.updated_at = Set(now);
                Ok(am.update(&self.database_connection).await?)
            }
            None => {
                Subscription::insert(SubscriptionActive {
                    id: Set(payload.id.clone()),
                    workspace_id: Set(payload.workspace_id),
                    status: Set(payload.status),
                    current_period_start: Set(payload.current_period_start),
                    current_period_end: Set(payload.current_period_end),
                    cancel_at_period_end: Set(payload.cancel_at_period_end),
                    created_at: Set(now),
                    updated_at: Set(now),
                })
                .exec(&self.database_connection)
                .await?;
                Ok(Subscription::find_by_id(payload.id.clone())
                    .one(&self.database_connection)
                    .await?
                    .ok_or_else(|| {
                        sea_orm::DbErr::RecordNotFound("Subscription not found".into())
                    })?)
            }
        }
    }

    /// Idempotent: deleting an unknown subscription is a no-op, the processor
    /// retries webhooks.
    pub async fn remove_subscription(&self, id: &str) -> Result<(), AppError> {
        Subscription::delete_by_id(id)
            .exec(&self.database_connection)
            .await?;
        Ok(())
    }

    pub async fn list_subscriptions_for_workspace(
        &self,
        workspace_id: Uuid,
    ) -> Result<Vec<SubscriptionModel>, AppError> {
        Ok(Subscription::find()
            .filter(entity::subscription::Column::WorkspaceId.eq(workspace_id))
            .all(&self.database_connection)
            .await?)
    }
}
