use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct RSignup {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SignupRes {
    pub user_id: Uuid,
    pub token: String,
    pub redirect_to: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RegenerateTokenRes {
    pub token: String,
    pub message: String,
}

/// Shape handed to the persistence layer; secrets arrive pre-hashed.
#[derive(Serialize, Deserialize)]
pub struct DBUserCreate {
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub token_hash: String,
}
