use actix_web::{patch, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::policy;
use crate::routes::workspace::workspace_context;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::workspace::{RWorkspaceUpdate, WorkspaceRes};

const NAME_MAX_LEN: usize = 100;

#[patch("/{slug}")]
async fn update(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
    data: web::Json<RWorkspaceUpdate>,
    auth: BearerAuth,
) -> ApiResult<WorkspaceRes> {
    let slug = path.into_inner();
    let (workspace, member) = workspace_context(&db, auth.token(), &slug).await?;

    policy::ensure_can_update_workspace(member.role)?;

    if let Some(name) = &data.name {
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed.len() > NAME_MAX_LEN {
            return Err(AppError::Validation(format!(
                "Name must be between 1 and {NAME_MAX_LEN} characters."
            )));
        }
    }

    let updated = db
        .update_workspace(
            workspace.id,
            data.name.as_ref().map(|n| n.trim().to_string()),
            data.settings.clone(),
        )
        .await?;

    Ok(ApiResponse::Ok(WorkspaceRes::from_model(
        updated,
        member.role,
    )))
}
