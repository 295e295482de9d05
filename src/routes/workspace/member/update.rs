use actix_web::{patch, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::policy;
use crate::routes::workspace::workspace_context;
use crate::types::error::AppError;
use crate::types::member::{MemberRes, RMemberUpdate};
use crate::types::response::{ApiResponse, ApiResult};

#[patch("/{slug}/members/{user_id}")]
async fn update(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<(String, Uuid)>,
    data: web::Json<RMemberUpdate>,
    auth: BearerAuth,
) -> ApiResult<MemberRes> {
    let (slug, target_user_id) = path.into_inner();
    let (workspace, actor) = workspace_context(&db, auth.token(), &slug).await?;

    // the target must exist before the policy can judge the pair
    let target = db
        .get_member(workspace.id, target_user_id)
        .await?
        .ok_or(AppError::NotFound)?;

    policy::ensure_can_update_role(
        actor.role,
        actor.user_id == target.user_id,
        target.role,
        data.role,
    )?;

    let updated = db
        .update_member_role(workspace.id, target_user_id, data.role)
        .await?;
    let user = db.get_user_by_id(&target_user_id).await?;

    Ok(ApiResponse::Ok(MemberRes::from_models(updated, user)))
}
