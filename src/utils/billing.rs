use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

use crate::config::StripeConfig;
use crate::types::error::AppError;

const STRIPE_API: &str = "https://api.stripe.com/v1";

#[derive(Deserialize)]
struct Customer {
    id: String,
}

/// Thin client for the payment processor. Customer creation only; everything
/// else about billing flows back through the webhook.
pub struct BillingClient {
    http: Client,
    secret_key: String,
}

impl BillingClient {
    pub fn new(config: &StripeConfig) -> Result<Self, AppError> {
        let http = ClientBuilder::new()
            .user_agent("vellum-cloud/0.3 (+reqwest)")
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::Internal(format!("build billing client failed: {e}")))?;
        Ok(Self {
            http,
            secret_key: config.secret_key.clone(),
        })
    }

    pub async fn create_customer(
        &self,
        workspace_name: &str,
        workspace_slug: &str,
        owner_email: &str,
    ) -> Result<String, AppError> {
        let params = [
            ("name", workspace_name),
            ("email", owner_email),
            ("metadata[workspace_slug]", workspace_slug),
        ];
        let res = self
            .http
            .post(format!("{STRIPE_API}/customers"))
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("billing request failed: {e}")))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Internal(format!(
                "billing API error: HTTP {status}: {body}"
            )));
        }

        let customer: Customer = res
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("billing response malformed: {e}")))?;
        info!("created billing customer {} for {workspace_slug}", customer.id);
        Ok(customer.id)
    }
}
