pub mod subscription;
pub mod user;
pub mod workspace;
pub mod workspace_invitation;
pub mod workspace_member;

/*
 Users sign up for free and own nothing until they create or join a workspace.
 Creating a workspace provisions a dedicated content database and makes the
 creator its owner. Owners/admins invite people by email with a proposed role;
 the invitee accepts with a token and becomes a member.
 so the flow would be:
 Mara signs up. No workspaces, no access.
 Mara creates "mara-press" -> database provisioned, Mara is owner.
 Mara invites jo@example.com as editor. Jo signs up, accepts, and can edit
 content in mara-press but cannot touch members or billing.
 */
