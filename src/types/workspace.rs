use chrono::{DateTime, Utc};
use entity::workspace::Model as WorkspaceModel;
use entity::workspace_member::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::provision::ProvisionedDatabase;

#[derive(Serialize, Deserialize, Debug)]
pub struct RWorkspaceCreate {
    pub name: String,
    pub slug: Option<String>,
    pub with_billing: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RWorkspaceUpdate {
    pub name: Option<String>,
    pub settings: Option<serde_json::Value>,
}

/// Shape handed to the persistence layer once provisioning/billing ran.
pub struct DBWorkspaceCreate {
    pub name: String,
    pub slug: String,
    pub owner: Uuid,
    pub database: Option<ProvisionedDatabase>,
    pub billing_customer_id: Option<String>,
}

/// Workspace as returned to the caller, with their own role attached.
/// Connection strings stay server-side.
#[derive(Serialize, Deserialize, Debug)]
pub struct WorkspaceRes {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub plan: String,
    pub suspended: bool,
    pub settings: serde_json::Value,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl WorkspaceRes {
    pub fn from_model(workspace: WorkspaceModel, role: Role) -> Self {
        WorkspaceRes {
            id: workspace.id,
            name: workspace.name,
            slug: workspace.slug,
            plan: workspace.plan,
            suspended: workspace.suspended,
            settings: workspace.settings,
            role,
            created_at: workspace.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct WorkspaceListRes {
    pub workspaces: Vec<WorkspaceRes>,
}
