use actix_web::{dev::ServiceRequest, error::ErrorUnauthorized, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::config::EnvConfig;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token;
use entity::user::Model as UserModel;

/// Resolve a bearer token to its user, verifying the secret against the
/// stored hash. Handlers behind the auth middleware can use
/// [`token::extract_token_parts`] alone; the secret was already checked here.
pub async fn resolve_user(db: &PostgresService, bearer: &str) -> Result<UserModel, AppError> {
    let (user_id, secret) = token::extract_token_parts(bearer).ok_or(AppError::Unauthorized)?;
    let user = db
        .get_user_by_id(&user_id)
        .await
        .map_err(|_| AppError::Unauthorized)?;
    if !token::verify(&secret, &user.token_hash).unwrap_or(false) {
        return Err(AppError::Unauthorized);
    }
    Ok(user)
}

pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let Some(db) = req.app_data::<web::Data<Arc<PostgresService>>>() else {
        return Err((ErrorUnauthorized("Invalid token"), req));
    };
    match resolve_user(db, credentials.token()).await {
        Ok(_) => Ok(req),
        Err(_) => Err((ErrorUnauthorized("Invalid token"), req)),
    }
}

/// Operator endpoints authenticate with the service's own auth secret.
pub async fn validate_ops_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let Some(config) = req.app_data::<web::Data<EnvConfig>>() else {
        return Err((ErrorUnauthorized("Invalid token"), req));
    };
    if credentials.token() == config.auth_secret {
        Ok(req)
    } else {
        Err((ErrorUnauthorized("Invalid token"), req))
    }
}
