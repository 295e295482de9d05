use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::resolve_user;

#[derive(Serialize, Deserialize)]
pub struct Response {}

#[post("/validate")]
async fn validate(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<Response> {
    if resolve_user(&db, auth.token()).await.is_err() {
        return Err(AppError::Unauthorized);
    }

    Ok(ApiResponse::EmptyOk)
}
