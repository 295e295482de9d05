use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token::extract_token_parts;
use entity::workspace::Model as WorkspaceModel;
use entity::workspace_member::Model as MemberModel;

pub mod create;
pub mod delete;
pub mod get;
pub mod invite;
pub mod leave;
pub mod list;
pub mod member;
pub mod update;

/// Resolve (workspace, acting member) for a workspace-scoped request. The
/// bearer secret was already verified by the auth middleware.
pub(crate) async fn workspace_context(
    db: &PostgresService,
    bearer: &str,
    slug: &str,
) -> Result<(WorkspaceModel, MemberModel), AppError> {
    let (user_id, _) = extract_token_parts(bearer).ok_or(AppError::Unauthorized)?;
    let workspace = db.get_workspace_by_slug(slug).await?;
    let member = db.require_member(workspace.id, user_id).await?;
    Ok((workspace, member))
}
