//! Membership authorization rules, in one place instead of scattered per
//! handler. Every function returns the exact error the caller surfaces.
//!
//! Role order: owner > admin > editor > viewer. Invariants the matrix
//! protects: exactly one owner per workspace, the owner can never be changed
//! or removed, and admins never gain authority over other admins.

use entity::workspace_member::Role;

use crate::types::error::AppError;

pub fn ensure_can_view_members(actor: Role) -> Result<(), AppError> {
    // every member may list members; the function exists so routes read
    // uniformly against the policy layer
    let _ = actor;
    Ok(())
}

pub fn ensure_can_update_workspace(actor: Role) -> Result<(), AppError> {
    if !actor.can_manage_members() {
        return Err(AppError::Forbidden(
            "Only the workspace owner or an admin can update the workspace.".to_string(),
        ));
    }
    Ok(())
}

pub fn ensure_can_delete_workspace(actor: Role) -> Result<(), AppError> {
    if actor != Role::Owner {
        return Err(AppError::Forbidden(
            "Only the workspace owner can delete the workspace.".to_string(),
        ));
    }
    Ok(())
}

pub fn ensure_can_manage_invitations(actor: Role) -> Result<(), AppError> {
    if !actor.can_manage_members() {
        return Err(AppError::Forbidden(
            "Only the workspace owner or an admin can manage invitations.".to_string(),
        ));
    }
    Ok(())
}

pub fn ensure_can_invite(actor: Role, proposed: Role) -> Result<(), AppError> {
    if !actor.can_manage_members() {
        return Err(AppError::Forbidden(
            "Only the workspace owner or an admin can invite members.".to_string(),
        ));
    }
    if proposed == Role::Owner {
        return Err(AppError::BadRequest(
            "A workspace cannot have a second owner.".to_string(),
        ));
    }
    if proposed == Role::Admin && actor != Role::Owner {
        return Err(AppError::Forbidden(
            "Only the workspace owner can invite an admin.".to_string(),
        ));
    }
    Ok(())
}

pub fn ensure_can_update_role(
    actor: Role,
    self_target: bool,
    target: Role,
    new_role: Role,
) -> Result<(), AppError> {
    if !actor.can_manage_members() {
        return Err(AppError::Forbidden(
            "Only the workspace owner or an admin can change member roles.".to_string(),
        ));
    }
    if self_target {
        return Err(AppError::BadRequest(
            "You cannot change your own role.".to_string(),
        ));
    }
    if target == Role::Owner {
        return Err(AppError::Forbidden(
            "The owner's role cannot be changed.".to_string(),
        ));
    }
    if new_role == Role::Owner {
        return Err(AppError::BadRequest(
            "Ownership transfer is not supported.".to_string(),
        ));
    }
    if actor == Role::Admin && target == Role::Admin {
        return Err(AppError::Forbidden(
            "Admins cannot change another admin's role.".to_string(),
        ));
    }
    if new_role == Role::Admin && actor != Role::Owner {
        return Err(AppError::Forbidden(
            "Only the workspace owner can promote a member to admin.".to_string(),
        ));
    }
    Ok(())
}

pub fn ensure_can_remove(actor: Role, self_target: bool, target: Role) -> Result<(), AppError> {
    if !actor.can_manage_members() {
        return Err(AppError::Forbidden(
            "Only the workspace owner or an admin can remove members.".to_string(),
        ));
    }
    if self_target {
        return Err(AppError::BadRequest(
            "You cannot remove yourself here. Leave the workspace instead.".to_string(),
        ));
    }
    if target == Role::Owner {
        return Err(AppError::Forbidden(
            "The workspace owner cannot be removed.".to_string(),
        ));
    }
    if actor == Role::Admin && target == Role::Admin {
        return Err(AppError::Forbidden(
            "Admins cannot remove another admin.".to_string(),
        ));
    }
    Ok(())
}

pub fn ensure_can_leave(actor: Role) -> Result<(), AppError> {
    if actor == Role::Owner {
        return Err(AppError::Forbidden(
            "The owner cannot leave the workspace. Delete it instead.".to_string(),
        ));
    }
    Ok(())
}
