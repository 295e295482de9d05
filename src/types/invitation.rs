use chrono::{DateTime, Utc};
use entity::workspace_invitation::Model as InvitationModel;
use entity::workspace_member::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct RInvitationCreate {
    pub email: String,
    pub role: Role,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct InvitationRes {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<InvitationModel> for InvitationRes {
    fn from(inv: InvitationModel) -> Self {
        InvitationRes {
            id: inv.id,
            email: inv.email,
            role: inv.role,
            expires_at: inv.expires_at,
            created_at: inv.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct InvitationListRes {
    pub invitations: Vec<InvitationRes>,
}

/// Unauthenticated preview shown before the invitee logs in.
#[derive(Serialize, Deserialize, Debug)]
pub struct InvitationPreviewRes {
    pub workspace_name: String,
    pub workspace_slug: String,
    pub email: String,
    pub role: Role,
    pub invited_by: String,
    pub expires_at: DateTime<Utc>,
    pub expired: bool,
}
