use reqwest::{Client, ClientBuilder};
use tracing::{debug, info};

use crate::config::MailConfig;
use crate::types::mail::SendEmail;

const RESEND_API: &str = "https://api.resend.com/emails";

pub async fn send_email(config: &MailConfig, mut email: SendEmail) -> Result<String, String> {
    if email.from.is_empty() {
        email.from = config.from.clone();
    }

    let payload =
        serde_json::to_string(&email).map_err(|e| format!("serialize email failed: {e}"))?;
    debug!("mail payload: {payload}");

    let client: Client = ClientBuilder::new()
        .user_agent("vellum-cloud/0.3 (+reqwest)")
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| format!("build client failed: {e}"))?;

    let res = client
        .post(RESEND_API)
        .bearer_auth(&config.api_key) // do NOT log the key
        .header("Content-Type", "application/json")
        .body(payload)
        .send()
        .await
        .map_err(|e| format!("send failed: {e}"))?;

    let status = res.status();
    let body = res.text().await.map_err(|e| format!("read body failed: {e}"))?;
    info!("mail delivery responded {status}");

    if status.is_success() {
        Ok(body)
    } else {
        Err(format!("Resend API error: HTTP {status}: {body}"))
    }
}

pub async fn mail_workspace_invite(
    config: &MailConfig,
    to: &str,
    workspace_name: &str,
    token: &str,
) -> Result<String, String> {
    send_email(
        config,
        SendEmail {
            to: vec![to.to_string()],
            subject: format!("You've been invited to {workspace_name}"),
            text: Some(format!(
                "You've been invited to join the {workspace_name} workspace.\n\n\
                 Review and accept the invitation here: /invitations/{token}\n\n\
                 The invitation expires in 7 days."
            )),
            ..Default::default()
        },
    )
    .await
}

pub async fn mail_token_reset(config: &MailConfig, to: &str, token: &str) -> Result<String, String> {
    send_email(
        config,
        SendEmail {
            to: vec![to.to_string()],
            subject: "Your access token was reset".to_string(),
            text: Some(format!(
                "Your access token has been reset. If this wasn't you, please contact support.\n\n\
                 Your new access token is: {token}"
            )),
            ..Default::default()
        },
    )
    .await
}
