use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::warn;

use crate::config::EnvConfig;
use crate::db::postgres_service::PostgresService;
use crate::db::INVITE_TTL_DAYS;
use crate::policy;
use crate::routes::workspace::workspace_context;
use crate::types::error::AppError;
use crate::types::invitation::{InvitationRes, RInvitationCreate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::mail::mail_workspace_invite;

#[post("/{slug}/invitations")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    config: web::Data<EnvConfig>,
    path: web::Path<String>,
    data: web::Json<RInvitationCreate>,
    auth: BearerAuth,
) -> ApiResult<InvitationRes> {
    let slug = path.into_inner();
    let (workspace, actor) = workspace_context(&db, auth.token(), &slug).await?;

    policy::ensure_can_invite(actor.role, data.role)?;

    let email = data.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation(
            "A valid email address is required.".to_string(),
        ));
    }

    let invitation = db
        .create_invitation(
            workspace.id,
            &email,
            data.role,
            actor.user_id,
            Utc::now() + Duration::days(INVITE_TTL_DAYS),
        )
        .await?;

    // delivery is best effort; the invite is live either way
    if let Some(mail) = &config.mail {
        if let Err(e) = mail_workspace_invite(mail, &email, &workspace.name, &invitation.token).await
        {
            warn!("invitation mail to {email} failed: {e}");
        }
    }

    Ok(ApiResponse::Created(InvitationRes::from(invitation)))
}
