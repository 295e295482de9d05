use actix_web::{delete, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::policy;
use crate::routes::workspace::workspace_context;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};

#[delete("/{slug}/members/{user_id}")]
async fn remove(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<(String, Uuid)>,
    auth: BearerAuth,
) -> ApiResult<MessageRes> {
    let (slug, target_user_id) = path.into_inner();
    let (workspace, actor) = workspace_context(&db, auth.token(), &slug).await?;

    let target = db
        .get_member(workspace.id, target_user_id)
        .await?
        .ok_or(AppError::NotFound)?;

    policy::ensure_can_remove(actor.role, actor.user_id == target.user_id, target.role)?;

    db.remove_member(workspace.id, target_user_id).await?;

    Ok(ApiResponse::Ok(MessageRes {
        message: "Member has been removed from the workspace.".to_string(),
    }))
}
