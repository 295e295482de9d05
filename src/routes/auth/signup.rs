use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RSignup, SignupRes};
use crate::utils::token::{construct_token, encrypt, new_token};

const NAME_MAX_LEN: usize = 100;
const PASSWORD_MIN_LEN: usize = 8;

fn validate_signup(data: &RSignup) -> Result<(), AppError> {
    if data.name.trim().is_empty() || data.name.len() > NAME_MAX_LEN {
        return Err(AppError::Validation(format!(
            "Name must be between 1 and {NAME_MAX_LEN} characters."
        )));
    }
    let email = data.email.trim();
    if email.len() > 255 || !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(AppError::Validation(
            "A valid email address is required.".to_string(),
        ));
    }
    if data.password.len() < PASSWORD_MIN_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {PASSWORD_MIN_LEN} characters."
        )));
    }
    Ok(())
}

#[post("/signup")]
async fn signup(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    data: web::Json<RSignup>,
) -> ApiResult<SignupRes> {
    validate_signup(&data)?;

    let password_hash = encrypt(&data.password)
        .map_err(|e| AppError::Internal(format!("password hash failed: {e}")))?;

    let secret = new_token();
    let token_hash =
        encrypt(&secret).map_err(|e| AppError::Internal(format!("token hash failed: {e}")))?;

    let user_id = db
        .create_user(DBUserCreate {
            name: data.name.trim().to_string(),
            email: data.email.trim().to_string(),
            password_hash: Some(password_hash),
            token_hash,
        })
        .await
        .map_err(|e| match e {
            AppError::AlreadyExists => {
                AppError::Conflict("An account with this email already exists.".to_string())
            }
            other => other,
        })?;

    Ok(ApiResponse::Created(SignupRes {
        user_id,
        token: construct_token(&user_id, &secret),
        redirect_to: "/workspaces".to_string(),
    }))
}
