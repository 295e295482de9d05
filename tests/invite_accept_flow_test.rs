mod common;

use actix_web::{http::StatusCode, test};
use chrono::{Duration, Utc};
use common::{client::TestClient, TestContext};
use entity::workspace_member::Role;

#[tokio::test]
async fn test_accept_invite_flow_success() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, owner_token) = client.create_test_user(None).await;
    client.create_workspace_with_owner(owner_id, "invite-ws").await;

    let invitee_email = "invitee@test.com";
    let (invitee_id, invitee_token) = client
        .create_test_user(Some(invitee_email.to_string()))
        .await;

    // owner issues the invitation over HTTP
    let req = test::TestRequest::post()
        .uri("/api/workspaces/invite-ws/invitations")
        .insert_header(("Authorization", format!("Bearer {}", owner_token)))
        .set_json(serde_json::json!({ "email": invitee_email, "role": "editor" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let workspace = ctx.db.get_workspace_by_slug("invite-ws").await.unwrap();
    let invitation = ctx
        .db
        .list_pending_invitations_for_workspace(workspace.id)
        .await
        .unwrap()
        .pop()
        .expect("invitation missing");
    assert_eq!(invitation.email, invitee_email);

    // invitee accepts with the token
    let req = test::TestRequest::post()
        .uri(&format!("/api/invitations/{}/accept", invitation.token))
        .insert_header(("Authorization", format!("Bearer {}", invitee_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["workspace_slug"], "invite-ws");
    assert_eq!(body["role"], "editor");

    // membership created with the invited role; acceptance and join share a
    // timestamp
    let member = ctx
        .db
        .get_member(workspace.id, invitee_id)
        .await
        .unwrap()
        .expect("membership missing");
    assert_eq!(member.role, Role::Editor);

    let accepted = ctx
        .db
        .get_invitation_by_token(&invitation.token)
        .await
        .unwrap();
    assert_eq!(accepted.accepted_at, Some(member.created_at));
}

#[tokio::test]
async fn test_accept_invite_wrong_email_forbidden() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, _owner_token) = client.create_test_user(None).await;
    let workspace_id = client.create_workspace_with_owner(owner_id, "strict-ws").await;

    let invitation = client
        .create_invitation(workspace_id, "right@test.com", Role::Viewer, owner_id)
        .await;

    let (_other_id, other_token) = client.create_test_user(None).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/invitations/{}/accept", invitation.token))
        .insert_header(("Authorization", format!("Bearer {}", other_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_accept_invite_twice_conflicts() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, _) = client.create_test_user(None).await;
    let workspace_id = client.create_workspace_with_owner(owner_id, "once-ws").await;

    let email = "again@test.com";
    let (_invitee_id, invitee_token) = client.create_test_user(Some(email.to_string())).await;
    let invitation = client
        .create_invitation(workspace_id, email, Role::Viewer, owner_id)
        .await;

    let uri = format!("/api/invitations/{}/accept", invitation.token);
    let req = test::TestRequest::post()
        .uri(&uri)
        .insert_header(("Authorization", format!("Bearer {}", invitee_token)))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // second accept must fail and change nothing
    let req = test::TestRequest::post()
        .uri(&uri)
        .insert_header(("Authorization", format!("Bearer {}", invitee_token)))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CONFLICT
    );
}

#[tokio::test]
async fn test_accept_expired_invite_rejected() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, _) = client.create_test_user(None).await;
    let workspace_id = client.create_workspace_with_owner(owner_id, "stale-ws").await;

    let email = "late@test.com";
    let (invitee_id, invitee_token) = client.create_test_user(Some(email.to_string())).await;
    let invitation = ctx
        .db
        .create_invitation(
            workspace_id,
            email,
            Role::Viewer,
            owner_id,
            Utc::now() - Duration::minutes(1),
        )
        .await
        .unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/invitations/{}/accept", invitation.token))
        .insert_header(("Authorization", format!("Bearer {}", invitee_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // no membership appeared
    assert!(ctx
        .db
        .get_member(workspace_id, invitee_id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_accept_when_already_member_conflicts() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, _) = client.create_test_user(None).await;
    let workspace_id = client.create_workspace_with_owner(owner_id, "dupe-ws").await;

    let email = "already@test.com";
    let (member_id, member_token) = client.create_test_user(Some(email.to_string())).await;
    let invitation = client
        .create_invitation(workspace_id, email, Role::Editor, owner_id)
        .await;

    // they join through another path before accepting
    client.add_member(workspace_id, member_id, Role::Viewer).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/invitations/{}/accept", invitation.token))
        .insert_header(("Authorization", format!("Bearer {}", member_token)))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CONFLICT
    );
    // role untouched by the failed accept
    let member = ctx
        .db
        .get_member(workspace_id, member_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(member.role, Role::Viewer);
}

#[tokio::test]
async fn test_invite_duplicate_pending_conflicts() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, owner_token) = client.create_test_user(None).await;
    client.create_workspace_with_owner(owner_id, "double-ws").await;

    let payload = serde_json::json!({ "email": "twice@test.com", "role": "viewer" });
    let req = test::TestRequest::post()
        .uri("/api/workspaces/double-ws/invitations")
        .insert_header(("Authorization", format!("Bearer {}", owner_token)))
        .set_json(&payload)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::post()
        .uri("/api/workspaces/double-ws/invitations")
        .insert_header(("Authorization", format!("Bearer {}", owner_token)))
        .set_json(&payload)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CONFLICT
    );
    let _ = ctx;
}

#[tokio::test]
async fn test_invite_existing_member_conflicts() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, owner_token) = client.create_test_user(None).await;
    let workspace_id = client.create_workspace_with_owner(owner_id, "known-ws").await;
    let email = "veteran@test.com";
    let (member_id, _) = client.create_test_user(Some(email.to_string())).await;
    client.add_member(workspace_id, member_id, Role::Editor).await;

    let req = test::TestRequest::post()
        .uri("/api/workspaces/known-ws/invitations")
        .insert_header(("Authorization", format!("Bearer {}", owner_token)))
        .set_json(serde_json::json!({ "email": email, "role": "viewer" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CONFLICT
    );
    let _ = ctx;
}

#[tokio::test]
async fn test_admin_cannot_invite_admin() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, _) = client.create_test_user(None).await;
    let (admin_id, admin_token) = client.create_test_user(None).await;
    let workspace_id = client.create_workspace_with_owner(owner_id, "ranked-ws").await;
    client.add_member(workspace_id, admin_id, Role::Admin).await;

    let req = test::TestRequest::post()
        .uri("/api/workspaces/ranked-ws/invitations")
        .insert_header(("Authorization", format!("Bearer {}", admin_token)))
        .set_json(serde_json::json!({ "email": "peer@test.com", "role": "admin" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );

    // inviting an editor is fine for an admin
    let req = test::TestRequest::post()
        .uri("/api/workspaces/ranked-ws/invitations")
        .insert_header(("Authorization", format!("Bearer {}", admin_token)))
        .set_json(serde_json::json!({ "email": "peer@test.com", "role": "editor" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );
    let _ = ctx;
}

#[tokio::test]
async fn test_lookup_invitation_is_public() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, _) = client.create_test_user(None).await;
    let workspace_id = client.create_workspace_with_owner(owner_id, "preview-ws").await;
    let invitation = client
        .create_invitation(workspace_id, "peek@test.com", Role::Viewer, owner_id)
        .await;

    // no Authorization header at all
    let req = test::TestRequest::get()
        .uri(&format!("/api/invitations/{}", invitation.token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["workspace_slug"], "preview-ws");
    assert_eq!(body["email"], "peek@test.com");
    assert_eq!(body["expired"], false);
    let _ = ctx;
}

#[tokio::test]
async fn test_revoke_invitation() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, owner_token) = client.create_test_user(None).await;
    let workspace_id = client.create_workspace_with_owner(owner_id, "revoke-ws").await;
    let invitation = client
        .create_invitation(workspace_id, "gone@test.com", Role::Viewer, owner_id)
        .await;

    let req = test::TestRequest::delete()
        .uri(&format!(
            "/api/workspaces/revoke-ws/invitations/{}",
            invitation.id
        ))
        .insert_header(("Authorization", format!("Bearer {}", owner_token)))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );

    // hard delete: the token no longer resolves
    assert!(ctx
        .db
        .get_invitation_by_token(&invitation.token)
        .await
        .is_err());
}

#[tokio::test]
async fn test_expired_invite_sweep() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let (owner_id, _) = client.create_test_user(None).await;
    let workspace_id = client.create_workspace_with_owner(owner_id, "sweep-ws").await;

    ctx.db
        .create_invitation(
            workspace_id,
            "old@test.com",
            Role::Viewer,
            owner_id,
            Utc::now() - Duration::days(1),
        )
        .await
        .unwrap();
    client
        .create_invitation(workspace_id, "fresh@test.com", Role::Viewer, owner_id)
        .await;

    let removed = ctx.db.expire_invitations().await.unwrap();
    assert_eq!(removed, 1);

    let remaining = ctx
        .db
        .list_pending_invitations_for_workspace(workspace_id)
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].email, "fresh@test.com");
}
