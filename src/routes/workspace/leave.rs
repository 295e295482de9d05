use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::policy;
use crate::routes::workspace::workspace_context;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};

#[post("/{slug}/leave")]
async fn leave(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
    auth: BearerAuth,
) -> ApiResult<MessageRes> {
    let slug = path.into_inner();
    let (workspace, member) = workspace_context(&db, auth.token(), &slug).await?;

    policy::ensure_can_leave(member.role)?;

    db.remove_member(workspace.id, member.user_id).await?;

    Ok(ApiResponse::Ok(MessageRes {
        message: format!("You have left {slug}."),
    }))
}
