use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;
use vellum_cloud::config::EnvConfig;
use vellum_cloud::db::postgres_service::PostgresService;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let container = Postgres::default()
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

/// Config with every optional integration off, so handlers never reach out
/// to provisioning/billing/mail during tests.
pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        database_url: "unused-in-tests".to_string(),
        auth_secret: "ops-secret-for-tests".to_string(),
        google: None,
        stripe: None,
        neon: None,
        mail: None,
    }
}

// Test data helpers
pub mod test_data {
    use vellum_cloud::types::user::RSignup;
    use vellum_cloud::types::workspace::RWorkspaceCreate;

    pub fn sample_signup() -> RSignup {
        RSignup {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password: "correct-horse-battery".to_string(),
        }
    }

    pub fn sample_signup_with_email(email: &str) -> RSignup {
        RSignup {
            email: email.to_string(),
            ..sample_signup()
        }
    }

    pub fn sample_workspace(slug: &str) -> RWorkspaceCreate {
        RWorkspaceCreate {
            name: "Test Workspace".to_string(),
            slug: Some(slug.to_string()),
            with_billing: None,
        }
    }
}
