use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracing::{error, info};

use vellum_cloud::config::{self, EnvConfig, IntegrationStatus};
use vellum_cloud::db::postgres_service::PostgresService;
use vellum_cloud::routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // readiness gate: refuse to serve with required integrations incomplete
    let report = config::evaluate_env();
    for check in &report.checks {
        match check.status {
            IntegrationStatus::Missing => error!("integration {}: missing", check.name),
            status => info!("integration {}: {:?}", check.name, status),
        }
    }
    if !report.ready {
        error!("required integrations are not configured, refusing to start");
        std::process::exit(1);
    }

    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.database_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );

    info!("Starting server on {addr}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(web::Data::new(config.clone()))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
