use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::workspace::{WorkspaceListRes, WorkspaceRes};
use crate::utils::token::extract_token_parts;

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    auth: BearerAuth,
) -> ApiResult<WorkspaceListRes> {
    let (user_id, _) = extract_token_parts(auth.token()).ok_or(AppError::Unauthorized)?;

    let workspaces = db
        .list_workspaces_for_user(user_id)
        .await?
        .into_iter()
        .map(|(workspace, role)| WorkspaceRes::from_model(workspace, role))
        .collect();

    Ok(ApiResponse::Ok(WorkspaceListRes { workspaces }))
}
