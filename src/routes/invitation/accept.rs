use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::token::extract_token_parts;
use entity::workspace_member::Role;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    pub workspace_slug: String,
    pub role: Role,
}

#[post("/{token}/accept")]
async fn accept(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
    auth: BearerAuth,
) -> ApiResult<Response> {
    let invite_token = path.into_inner();

    let (user_id, _) = extract_token_parts(auth.token()).ok_or(AppError::Unauthorized)?;
    let acceptor = db.get_user_by_id(&user_id).await?;

    // email match, expiry, double-accept and already-member checks all live
    // in the transactional accept
    let member = db.accept_invitation(&invite_token, &acceptor).await?;
    let workspace = db.get_workspace_by_id(member.workspace_id).await?;

    Ok(ApiResponse::Ok(Response {
        message: format!("You have joined {}.", workspace.name),
        workspace_slug: workspace.slug,
        role: member.role,
    }))
}
