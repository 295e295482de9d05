use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::routes::workspace::workspace_context;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::workspace::WorkspaceRes;

#[get("/{slug}")]
async fn get(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
    auth: BearerAuth,
) -> ApiResult<WorkspaceRes> {
    let slug = path.into_inner();
    let (workspace, member) = workspace_context(&db, auth.token(), &slug).await?;

    Ok(ApiResponse::Ok(WorkspaceRes::from_model(
        workspace,
        member.role,
    )))
}
