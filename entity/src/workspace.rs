use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "workspace")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,                     // immutable after creation
    pub plan: String,
    pub database_project_id: Option<String>,
    pub database_url: Option<String>,
    pub database_pooler_url: Option<String>,
    pub billing_customer_id: Option<String>,
    pub settings: Json,
    pub suspended: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::workspace_member::Entity")]
    WorkspaceMember,

    #[sea_orm(has_many = "super::workspace_invitation::Entity")]
    WorkspaceInvitation,

    #[sea_orm(has_many = "super::subscription::Entity")]
    Subscription,
}

impl Related<super::workspace_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkspaceMember.def()
    }
}

impl Related<super::workspace_invitation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkspaceInvitation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
