use std::collections::HashMap;
use vellum_cloud::config::{evaluate, IntegrationStatus};

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn status_of(report: &vellum_cloud::config::ReadinessReport, name: &str) -> IntegrationStatus {
    report
        .checks
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| panic!("no check named {name}"))
        .status
}

#[test]
fn test_empty_environment_is_not_ready() {
    let vars = env(&[]);
    let report = evaluate(|key| vars.get(key).cloned());

    assert!(!report.ready);
    assert_eq!(status_of(&report, "database"), IntegrationStatus::Missing);
    assert_eq!(status_of(&report, "auth"), IntegrationStatus::Missing);
    assert_eq!(status_of(&report, "stripe"), IntegrationStatus::Optional);
    assert_eq!(status_of(&report, "neon"), IntegrationStatus::Optional);
}

#[test]
fn test_required_only_is_ready() {
    let vars = env(&[
        ("DATABASE_URL", "postgres://localhost/control"),
        ("AUTH_SECRET", "s3cret"),
    ]);
    let report = evaluate(|key| vars.get(key).cloned());

    assert!(report.ready);
    assert_eq!(status_of(&report, "database"), IntegrationStatus::Configured);
    assert_eq!(status_of(&report, "auth"), IntegrationStatus::Configured);
    // optional integrations stay optional without blocking
    assert_eq!(status_of(&report, "google"), IntegrationStatus::Optional);
}

#[test]
fn test_everything_set_is_fully_configured() {
    let vars = env(&[
        ("DATABASE_URL", "postgres://localhost/control"),
        ("AUTH_SECRET", "s3cret"),
        ("GOOGLE_CLIENT_ID", "id"),
        ("GOOGLE_CLIENT_SECRET", "secret"),
        ("STRIPE_SECRET_KEY", "sk_test"),
        ("STRIPE_WEBHOOK_SECRET", "whsec"),
        ("NEON_API_KEY", "neon"),
        ("RESEND_API_KEY", "re"),
    ]);
    let report = evaluate(|key| vars.get(key).cloned());

    assert!(report.ready);
    for check in &report.checks {
        assert_eq!(
            check.status,
            IntegrationStatus::Configured,
            "{} not configured",
            check.name
        );
    }
}

#[test]
fn test_partial_optional_integration() {
    let vars = env(&[
        ("DATABASE_URL", "postgres://localhost/control"),
        ("AUTH_SECRET", "s3cret"),
        ("STRIPE_SECRET_KEY", "sk_test"),
        // webhook secret missing
    ]);
    let report = evaluate(|key| vars.get(key).cloned());

    // partial optional integration does not block readiness
    assert!(report.ready);
    assert_eq!(status_of(&report, "stripe"), IntegrationStatus::Partial);
}

#[test]
fn test_empty_values_count_as_unset() {
    let vars = env(&[("DATABASE_URL", ""), ("AUTH_SECRET", "s3cret")]);
    let report = evaluate(|key| vars.get(key).cloned());

    assert!(!report.ready);
    assert_eq!(status_of(&report, "database"), IntegrationStatus::Missing);
}
