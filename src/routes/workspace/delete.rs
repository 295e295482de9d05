use actix_web::{delete, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use tracing::error;

use crate::config::EnvConfig;
use crate::db::postgres_service::PostgresService;
use crate::policy;
use crate::routes::workspace::workspace_context;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use crate::utils::provision::ProvisioningClient;

#[delete("/{slug}")]
async fn delete(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    config: web::Data<EnvConfig>,
    path: web::Path<String>,
    auth: BearerAuth,
) -> ApiResult<MessageRes> {
    let slug = path.into_inner();
    let (workspace, member) = workspace_context(&db, auth.token(), &slug).await?;

    policy::ensure_can_delete_workspace(member.role)?;

    db.delete_workspace(workspace.id).await?;

    // the rows are gone; external teardown failures only get logged
    if let (Some(project_id), Some(neon)) = (&workspace.database_project_id, &config.neon) {
        match ProvisioningClient::new(neon) {
            Ok(client) => {
                if let Err(e) = client.delete_database(project_id).await {
                    error!("deprovisioning {project_id} for deleted workspace {slug} failed: {e}");
                }
            }
            Err(e) => error!("provisioning client unavailable during delete: {e}"),
        }
    }

    Ok(ApiResponse::Ok(MessageRes {
        message: format!("Workspace {slug} has been deleted."),
    }))
}
