use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

use crate::config::NeonConfig;
use crate::types::error::AppError;

const NEON_API: &str = "https://console.neon.tech/api/v2";

/// Connection details for a freshly provisioned workspace database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionedDatabase {
    pub project_id: String,
    pub connection_uri: String,
    pub pooler_uri: String,
}

#[derive(Serialize)]
struct CreateProjectReq<'a> {
    project: ProjectName<'a>,
}

#[derive(Serialize)]
struct ProjectName<'a> {
    name: &'a str,
}

#[derive(Deserialize)]
struct CreateProjectRes {
    project: Project,
    connection_uris: Vec<ConnectionUri>,
}

#[derive(Deserialize)]
struct Project {
    id: String,
}

#[derive(Deserialize)]
struct ConnectionUri {
    connection_uri: String,
    #[serde(default)]
    pooler_connection_uri: Option<String>,
}

/// Thin client for the database-provisioning API. One dedicated project per
/// workspace.
pub struct ProvisioningClient {
    http: Client,
    api_key: String,
}

impl ProvisioningClient {
    pub fn new(config: &NeonConfig) -> Result<Self, AppError> {
        let http = ClientBuilder::new()
            .user_agent("vellum-cloud/0.3 (+reqwest)")
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::Internal(format!("build provisioning client failed: {e}")))?;
        Ok(Self {
            http,
            api_key: config.api_key.clone(),
        })
    }

    pub async fn create_database(&self, slug: &str) -> Result<ProvisionedDatabase, AppError> {
        info!("provisioning database for workspace {slug}");
        let res = self
            .http
            .post(format!("{NEON_API}/projects"))
            .bearer_auth(&self.api_key)
            .json(&CreateProjectReq {
                project: ProjectName { name: slug },
            })
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("provisioning request failed: {e}")))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Internal(format!(
                "provisioning API error: HTTP {status}: {body}"
            )));
        }

        let created: CreateProjectRes = res
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("provisioning response malformed: {e}")))?;

        let uri = created
            .connection_uris
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Internal("provisioning returned no connection uri".into()))?;

        let pooler_uri = uri
            .pooler_connection_uri
            .unwrap_or_else(|| uri.connection_uri.clone());

        info!("provisioned project {} for {slug}", created.project.id);
        Ok(ProvisionedDatabase {
            project_id: created.project.id,
            connection_uri: uri.connection_uri,
            pooler_uri,
        })
    }

    /// Used on workspace deletion, and as compensating cleanup when the
    /// workspace insert fails after provisioning succeeded.
    pub async fn delete_database(&self, project_id: &str) -> Result<(), AppError> {
        info!("deprovisioning project {project_id}");
        let res = self
            .http
            .delete(format!("{NEON_API}/projects/{project_id}"))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("deprovisioning request failed: {e}")))?;

        let status = res.status();
        if !status.is_success() && status.as_u16() != 404 {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Internal(format!(
                "deprovisioning API error: HTTP {status}: {body}"
            )));
        }
        Ok(())
    }
}
