use actix_web::{get, post, web};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::config::{evaluate_env, ReadinessReport};
use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/readiness")]
async fn readiness(_req: actix_web::HttpRequest) -> ApiResult<ReadinessReport> {
    Ok(ApiResponse::Ok(evaluate_env()))
}

#[derive(Serialize)]
pub struct ExpireRes {
    pub removed: u64,
}

/// Expired pending invitations are only ever checked lazily at acceptance;
/// this sweep is how they actually get cleaned out.
#[post("/invitations/expire")]
async fn expire_invitations(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<ExpireRes> {
    let removed = db.expire_invitations().await?;
    info!("expired-invitation sweep removed {removed} rows");
    Ok(ApiResponse::Ok(ExpireRes { removed }))
}
