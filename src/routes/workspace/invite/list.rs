use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::policy;
use crate::routes::workspace::workspace_context;
use crate::types::invitation::{InvitationListRes, InvitationRes};
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{slug}/invitations")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
    auth: BearerAuth,
) -> ApiResult<InvitationListRes> {
    let slug = path.into_inner();
    let (workspace, actor) = workspace_context(&db, auth.token(), &slug).await?;

    policy::ensure_can_manage_invitations(actor.role)?;

    let invitations = db
        .list_pending_invitations_for_workspace(workspace.id)
        .await?
        .into_iter()
        .map(InvitationRes::from)
        .collect();

    Ok(ApiResponse::Ok(InvitationListRes { invitations }))
}
