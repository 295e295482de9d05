use chrono::{DateTime, Utc};
use entity::user::Model as UserModel;
use entity::workspace_member::{Model as MemberModel, Role};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct RMemberUpdate {
    pub role: Role,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MemberRes {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub joined_at: DateTime<Utc>,
}

impl MemberRes {
    pub fn from_models(member: MemberModel, user: UserModel) -> Self {
        MemberRes {
            user_id: user.id,
            name: user.name,
            email: user.email,
            role: member.role,
            joined_at: member.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MemberListRes {
    pub members: Vec<MemberRes>,
}
