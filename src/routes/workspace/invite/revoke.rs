use actix_web::{delete, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::policy;
use crate::routes::workspace::workspace_context;
use crate::types::response::{ApiResponse, ApiResult};

#[delete("/{slug}/invitations/{id}")]
async fn revoke(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<(String, Uuid)>,
    auth: BearerAuth,
) -> ApiResult<()> {
    let (slug, invitation_id) = path.into_inner();
    let (workspace, actor) = workspace_context(&db, auth.token(), &slug).await?;

    policy::ensure_can_manage_invitations(actor.role)?;

    db.delete_invitation(workspace.id, invitation_id).await?;

    Ok(ApiResponse::NoContent)
}
