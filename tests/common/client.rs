use actix_web::{web, App};
use chrono::{Duration, Utc};
use entity::workspace_member::Role;
use std::sync::Arc;
use uuid::Uuid;
use vellum_cloud::{
    db::postgres_service::PostgresService,
    db::INVITE_TTL_DAYS,
    types::user::DBUserCreate,
    types::workspace::DBWorkspaceCreate,
    utils::token::{construct_token, encrypt, new_token},
};

use super::get_test_config;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(get_test_config()))
            .configure(vellum_cloud::routes::configure_routes)
    }

    pub async fn create_test_user(&self, email: Option<String>) -> (Uuid, String) {
        let secret = new_token();
        let token_hash = encrypt(&secret).expect("Failed to hash token");
        let random_id = Uuid::new_v4();

        let email = email.unwrap_or_else(|| format!("user-{}@test.com", random_id));

        let user_id = self
            .db
            .create_user(DBUserCreate {
                name: "Test User".to_string(),
                email,
                password_hash: None,
                token_hash,
            })
            .await
            .expect("Failed to create user");

        let access_token = construct_token(&user_id, &secret);

        (user_id, access_token)
    }

    pub async fn create_workspace_with_owner(&self, owner_id: Uuid, slug: &str) -> Uuid {
        let (workspace, _member) = self
            .db
            .create_workspace(DBWorkspaceCreate {
                name: "Test Workspace".to_string(),
                slug: slug.to_string(),
                owner: owner_id,
                database: None,
                billing_customer_id: None,
            })
            .await
            .expect("Failed to create workspace");
        workspace.id
    }

    #[allow(dead_code)]
    pub async fn add_member(&self, workspace_id: Uuid, user_id: Uuid, role: Role) {
        self.db
            .add_member(workspace_id, user_id, role)
            .await
            .expect("Failed to add member");
    }

    #[allow(dead_code)]
    pub async fn create_invitation(
        &self,
        workspace_id: Uuid,
        email: &str,
        role: Role,
        invited_by: Uuid,
    ) -> entity::workspace_invitation::Model {
        self.db
            .create_invitation(
                workspace_id,
                email,
                role,
                invited_by,
                Utc::now() + Duration::days(INVITE_TTL_DAYS),
            )
            .await
            .expect("Failed to create invitation")
    }
}
