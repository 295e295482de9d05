use serde::Deserialize;

/// Minimal view of a payment-processor event. Fields we never read are left
/// to serde's default handling so unknown payload shapes do not 400.
#[derive(Deserialize, Debug)]
pub struct StripeEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: StripeEventData,
}

#[derive(Deserialize, Debug)]
pub struct StripeEventData {
    pub object: StripeSubscriptionObject,
}

#[derive(Deserialize, Debug)]
pub struct StripeSubscriptionObject {
    pub id: String,
    pub customer: Option<String>,
    pub status: Option<String>,
    pub current_period_start: Option<i64>,
    pub current_period_end: Option<i64>,
    #[serde(default)]
    pub cancel_at_period_end: bool,
}
