use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use tracing::warn;

use crate::config::EnvConfig;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::RegenerateTokenRes;
use crate::utils::mail::mail_token_reset;
use crate::utils::token::{construct_token, extract_token_parts};

#[post("/regenerate")]
async fn regenerate(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    config: web::Data<EnvConfig>,
    auth: BearerAuth,
) -> ApiResult<RegenerateTokenRes> {
    let (user_id, _) = extract_token_parts(auth.token()).ok_or(AppError::Unauthorized)?;

    let secret = db.regenerate_user_token(&user_id).await?;
    let user = db.get_user_by_id(&user_id).await?;
    let token = construct_token(&user_id, &secret);

    // best effort; the token is in the response either way
    if let Some(mail) = &config.mail {
        if let Err(e) = mail_token_reset(mail, &user.email, &token).await {
            warn!("token reset mail failed: {e}");
        }
    }

    Ok(ApiResponse::Ok(RegenerateTokenRes {
        token,
        message: "Access token regenerated. Previous tokens no longer work.".to_string(),
    }))
}
