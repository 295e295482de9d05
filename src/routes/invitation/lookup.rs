use actix_web::{get, web};
use chrono::Utc;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::invitation::InvitationPreviewRes;
use crate::types::response::{ApiResponse, ApiResult};

/// Unauthenticated preview so the invitee can see what they were invited to
/// before being asked to log in. Token knowledge is the only gate.
#[get("/{token}")]
async fn lookup(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
) -> ApiResult<InvitationPreviewRes> {
    let token = path.into_inner();

    let invitation = db.get_invitation_by_token(&token).await?;
    let workspace = db.get_workspace_by_id(invitation.workspace_id).await?;
    let inviter = db.get_user_by_id(&invitation.invited_by).await?;

    Ok(ApiResponse::Ok(InvitationPreviewRes {
        workspace_name: workspace.name,
        workspace_slug: workspace.slug,
        email: invitation.email.clone(),
        role: invitation.role,
        invited_by: inviter.name,
        expired: invitation.is_expired(Utc::now()),
        expires_at: invitation.expires_at,
    }))
}
