use entity::workspace_member::Role;
use vellum_cloud::policy;
use vellum_cloud::types::error::AppError;

fn assert_forbidden(result: Result<(), AppError>) {
    match result {
        Err(e) => assert_eq!(e.kind(), "FORBIDDEN", "expected FORBIDDEN, got {e}"),
        Ok(()) => panic!("expected FORBIDDEN, got Ok"),
    }
}

fn assert_bad_request(result: Result<(), AppError>) {
    match result {
        Err(e) => assert_eq!(e.kind(), "BAD_REQUEST", "expected BAD_REQUEST, got {e}"),
        Ok(()) => panic!("expected BAD_REQUEST, got Ok"),
    }
}

#[test]
fn test_only_owner_and_admin_manage_members() {
    for role in [Role::Editor, Role::Viewer] {
        assert_forbidden(policy::ensure_can_invite(role, Role::Viewer));
        assert_forbidden(policy::ensure_can_update_role(
            role,
            false,
            Role::Viewer,
            Role::Editor,
        ));
        assert_forbidden(policy::ensure_can_remove(role, false, Role::Viewer));
        assert_forbidden(policy::ensure_can_manage_invitations(role));
    }
    assert!(policy::ensure_can_invite(Role::Owner, Role::Editor).is_ok());
    assert!(policy::ensure_can_invite(Role::Admin, Role::Editor).is_ok());
}

#[test]
fn test_admin_cannot_create_admin_owner_can() {
    assert_forbidden(policy::ensure_can_invite(Role::Admin, Role::Admin));
    assert!(policy::ensure_can_invite(Role::Owner, Role::Admin).is_ok());

    assert_forbidden(policy::ensure_can_update_role(
        Role::Admin,
        false,
        Role::Editor,
        Role::Admin,
    ));
    assert!(
        policy::ensure_can_update_role(Role::Owner, false, Role::Editor, Role::Admin).is_ok()
    );
}

#[test]
fn test_nobody_invites_a_second_owner() {
    assert_bad_request(policy::ensure_can_invite(Role::Owner, Role::Owner));
    // non-owner actors fail on the admin/owner grant rule either way
    assert!(policy::ensure_can_invite(Role::Admin, Role::Owner).is_err());
}

#[test]
fn test_owner_is_untouchable() {
    assert_forbidden(policy::ensure_can_update_role(
        Role::Admin,
        false,
        Role::Owner,
        Role::Editor,
    ));
    assert_forbidden(policy::ensure_can_update_role(
        Role::Owner,
        false,
        Role::Owner,
        Role::Editor,
    ));
    assert_forbidden(policy::ensure_can_remove(Role::Admin, false, Role::Owner));
    assert_forbidden(policy::ensure_can_remove(Role::Owner, false, Role::Owner));
}

#[test]
fn test_ownership_transfer_unsupported() {
    assert_bad_request(policy::ensure_can_update_role(
        Role::Owner,
        false,
        Role::Editor,
        Role::Owner,
    ));
}

#[test]
fn test_admin_cannot_touch_other_admins() {
    assert_forbidden(policy::ensure_can_update_role(
        Role::Admin,
        false,
        Role::Admin,
        Role::Editor,
    ));
    assert_forbidden(policy::ensure_can_remove(Role::Admin, false, Role::Admin));
    // the owner may demote or remove an admin
    assert!(
        policy::ensure_can_update_role(Role::Owner, false, Role::Admin, Role::Editor).is_ok()
    );
    assert!(policy::ensure_can_remove(Role::Owner, false, Role::Admin).is_ok());
}

#[test]
fn test_self_service_is_blocked_on_management_endpoints() {
    assert_bad_request(policy::ensure_can_update_role(
        Role::Admin,
        true,
        Role::Admin,
        Role::Editor,
    ));
    assert_bad_request(policy::ensure_can_remove(Role::Admin, true, Role::Admin));
}

#[test]
fn test_leave_rules() {
    assert_forbidden(policy::ensure_can_leave(Role::Owner));
    for role in [Role::Admin, Role::Editor, Role::Viewer] {
        assert!(policy::ensure_can_leave(role).is_ok());
    }
}

#[test]
fn test_admin_can_act_downward() {
    assert!(
        policy::ensure_can_update_role(Role::Admin, false, Role::Viewer, Role::Editor).is_ok()
    );
    assert!(policy::ensure_can_remove(Role::Admin, false, Role::Editor).is_ok());
}

#[test]
fn test_workspace_level_rules() {
    assert!(policy::ensure_can_update_workspace(Role::Admin).is_ok());
    assert_forbidden(policy::ensure_can_update_workspace(Role::Editor));
    assert!(policy::ensure_can_delete_workspace(Role::Owner).is_ok());
    assert_forbidden(policy::ensure_can_delete_workspace(Role::Admin));
}

#[test]
fn test_role_rank_ordering() {
    assert!(Role::Owner.rank() > Role::Admin.rank());
    assert!(Role::Admin.rank() > Role::Editor.rank());
    assert!(Role::Editor.rank() > Role::Viewer.rank());
}
