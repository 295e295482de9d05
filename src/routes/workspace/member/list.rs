use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::policy;
use crate::routes::workspace::workspace_context;
use crate::types::member::{MemberListRes, MemberRes};
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{slug}/members")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
    auth: BearerAuth,
) -> ApiResult<MemberListRes> {
    let slug = path.into_inner();
    let (workspace, member) = workspace_context(&db, auth.token(), &slug).await?;

    policy::ensure_can_view_members(member.role)?;

    let members = db
        .list_members(workspace.id)
        .await?
        .into_iter()
        .map(|(member, user)| MemberRes::from_models(member, user))
        .collect();

    Ok(ApiResponse::Ok(MemberListRes { members }))
}
