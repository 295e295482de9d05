use serde::Serialize;
use std::env;

/// Integrations the service knows how to talk to, and the environment
/// variables each one needs. Required integrations block startup when
/// incomplete; optional ones gate features.
const INTEGRATIONS: &[IntegrationSpec] = &[
    IntegrationSpec {
        name: "database",
        required: true,
        vars: &["DATABASE_URL"],
    },
    IntegrationSpec {
        name: "auth",
        required: true,
        vars: &["AUTH_SECRET"],
    },
    IntegrationSpec {
        name: "google",
        required: false,
        vars: &["GOOGLE_CLIENT_ID", "GOOGLE_CLIENT_SECRET"],
    },
    IntegrationSpec {
        name: "stripe",
        required: false,
        vars: &["STRIPE_SECRET_KEY", "STRIPE_WEBHOOK_SECRET"],
    },
    IntegrationSpec {
        name: "neon",
        required: false,
        vars: &["NEON_API_KEY"],
    },
    IntegrationSpec {
        name: "mail",
        required: false,
        vars: &["RESEND_API_KEY"],
    },
];

struct IntegrationSpec {
    name: &'static str,
    required: bool,
    vars: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationStatus {
    /// All variables present.
    Configured,
    /// Required integration with variables absent. Blocks startup.
    Missing,
    /// Optional integration with some but not all variables present.
    Partial,
    /// Optional integration left unconfigured.
    Optional,
}

#[derive(Debug, Clone, Serialize)]
pub struct IntegrationCheck {
    pub name: &'static str,
    pub required: bool,
    pub status: IntegrationStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadinessReport {
    pub checks: Vec<IntegrationCheck>,
    pub ready: bool,
}

/// Evaluate the integration table against a variable lookup. Empty values
/// count as unset.
pub fn evaluate<F>(lookup: F) -> ReadinessReport
where
    F: Fn(&str) -> Option<String>,
{
    let checks: Vec<IntegrationCheck> = INTEGRATIONS
        .iter()
        .map(|integration| {
            let present = integration
                .vars
                .iter()
                .filter(|var| lookup(var).is_some_and(|v| !v.is_empty()))
                .count();
            let status = if present == integration.vars.len() {
                IntegrationStatus::Configured
            } else if integration.required {
                IntegrationStatus::Missing
            } else if present > 0 {
                IntegrationStatus::Partial
            } else {
                IntegrationStatus::Optional
            };
            IntegrationCheck {
                name: integration.name,
                required: integration.required,
                status,
            }
        })
        .collect();

    let ready = checks
        .iter()
        .filter(|c| c.required)
        .all(|c| c.status == IntegrationStatus::Configured);

    ReadinessReport { checks, ready }
}

pub fn evaluate_env() -> ReadinessReport {
    evaluate(|var| env::var(var).ok())
}

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub database_url: String,
    pub auth_secret: String,
    pub google: Option<GoogleConfig>,
    pub stripe: Option<StripeConfig>,
    pub neon: Option<NeonConfig>,
    pub mail: Option<MailConfig>,
}

#[derive(Clone, Debug)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Clone, Debug)]
pub struct StripeConfig {
    pub secret_key: String,
    pub webhook_secret: String,
}

#[derive(Clone, Debug)]
pub struct NeonConfig {
    pub api_key: String,
}

#[derive(Clone, Debug)]
pub struct MailConfig {
    pub api_key: String,
    pub from: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    fn get_env_opt(key: &str) -> Option<String> {
        env::var(key).ok().filter(|v| !v.is_empty())
    }

    /// Build the immutable runtime config. Call only after the readiness
    /// gate passed; required variables panic here because the process must
    /// not serve without them.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let google = match (
            Self::get_env_opt("GOOGLE_CLIENT_ID"),
            Self::get_env_opt("GOOGLE_CLIENT_SECRET"),
        ) {
            (Some(client_id), Some(client_secret)) => Some(GoogleConfig {
                client_id,
                client_secret,
            }),
            _ => None,
        };

        let stripe = match (
            Self::get_env_opt("STRIPE_SECRET_KEY"),
            Self::get_env_opt("STRIPE_WEBHOOK_SECRET"),
        ) {
            (Some(secret_key), Some(webhook_secret)) => Some(StripeConfig {
                secret_key,
                webhook_secret,
            }),
            _ => None,
        };

        let neon = Self::get_env_opt("NEON_API_KEY").map(|api_key| NeonConfig { api_key });

        let mail = Self::get_env_opt("RESEND_API_KEY").map(|api_key| MailConfig {
            api_key,
            from: Self::get_env_opt("MAIL_FROM")
                .unwrap_or_else(|| "noreply@vellum.cloud".to_string()),
        });

        EnvConfig {
            port: Self::get_env_opt("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database_url: Self::get_env("DATABASE_URL"),
            auth_secret: Self::get_env("AUTH_SECRET"),
            google,
            stripe,
            neon,
            mail,
        }
    }
}
