use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use tracing::{error, warn};

use crate::config::EnvConfig;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::workspace::{DBWorkspaceCreate, RWorkspaceCreate, WorkspaceRes};
use crate::utils::billing::BillingClient;
use crate::utils::provision::ProvisioningClient;
use crate::utils::slug::validate_slug;
use crate::utils::token::extract_token_parts;

const NAME_MAX_LEN: usize = 100;

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    config: web::Data<EnvConfig>,
    data: web::Json<RWorkspaceCreate>,
    auth: BearerAuth,
) -> ApiResult<WorkspaceRes> {
    // 0) auth
    let (owner_id, _) = extract_token_parts(auth.token()).ok_or(AppError::Unauthorized)?;
    let owner = db.get_user_by_id(&owner_id).await?;

    // 1) name + slug
    let name = data.name.trim().to_string();
    if name.is_empty() || name.len() > NAME_MAX_LEN {
        return Err(AppError::Validation(format!(
            "Name must be between 1 and {NAME_MAX_LEN} characters."
        )));
    }
    let slug = match &data.slug {
        Some(slug) => {
            validate_slug(slug).map_err(AppError::Validation)?;
            slug.clone()
        }
        None => db.generate_unique_slug(&name).await?,
    };
    if db.slug_exists(&slug).await? {
        return Err(AppError::Conflict(
            "A workspace with this slug already exists.".to_string(),
        ));
    }

    // 2) dedicated database, when provisioning is configured. Failure here
    //    aborts the whole creation.
    let database = match &config.neon {
        Some(neon) => Some(
            ProvisioningClient::new(neon)?
                .create_database(&slug)
                .await?,
        ),
        None => None,
    };

    // 3) billing customer, best effort only
    let billing_customer_id = if data.with_billing.unwrap_or(false) {
        match &config.stripe {
            Some(stripe) => match BillingClient::new(stripe) {
                Ok(client) => match client.create_customer(&name, &slug, &owner.email).await {
                    Ok(id) => Some(id),
                    Err(e) => {
                        warn!("billing customer creation failed, continuing without: {e}");
                        None
                    }
                },
                Err(e) => {
                    warn!("billing client unavailable, continuing without: {e}");
                    None
                }
            },
            None => None,
        }
    } else {
        None
    };

    // 4) persist workspace + owner membership. If the insert loses a race we
    //    tear the provisioned database back down.
    let project_id = database.as_ref().map(|d| d.project_id.clone());
    let created = db
        .create_workspace(DBWorkspaceCreate {
            name,
            slug,
            owner: owner_id,
            database,
            billing_customer_id,
        })
        .await;

    let (workspace, member) = match created {
        Ok(pair) => pair,
        Err(err) => {
            if let (Some(project_id), Some(neon)) = (project_id, &config.neon) {
                if let Ok(client) = ProvisioningClient::new(neon) {
                    if let Err(e) = client.delete_database(&project_id).await {
                        error!("orphaned database {project_id} after failed create: {e}");
                    }
                }
            }
            return Err(err);
        }
    };

    Ok(ApiResponse::Created(WorkspaceRes::from_model(
        workspace,
        member.role,
    )))
}
