//! Integration tests for the admin surface: user listing, role changes,
//! deactivation, and the activity log.

mod common;

use http::StatusCode;

#[tokio::test]
async fn test_admin_endpoints_reject_members() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    let token = app.register("bob@example.com", "pw123456", "Bob").await;

    for (method, path) in [
        ("GET", "/api/admin/users"),
        ("GET", "/api/admin/activity"),
    ] {
        let response = app.request(method, path, None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{method} {path}");
    }
}

#[tokio::test]
async fn test_list_users_paginated() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    app.create_user("root@example.com", "pw123456", "admin").await;
    let admin = app.login("root@example.com", "pw123456").await;
    for i in 0..3 {
        app.create_user(&format!("user{i}@example.com"), "pw123456", "member")
            .await;
    }

    let response = app
        .request(
            "GET",
            "/api/admin/users?page=1&page_size=2",
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let users = &response.body["users"];
    assert_eq!(users["total_items"], 4);
    assert_eq!(users["total_pages"], 2);
    assert_eq!(users["items"].as_array().map(Vec::len), Some(2));
    // Password hashes never leave the API.
    assert!(users["items"][0].get("password_hash").is_none());
}

#[tokio::test]
async fn test_list_users_normalizes_out_of_range_pagination() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    app.create_user("root@example.com", "pw123456", "admin").await;
    let admin = app.login("root@example.com", "pw123456").await;
    app.create_user("dora@example.com", "pw123456", "member")
        .await;

    // Query-string values bypass the constructor's clamping, so a zero
    // page_size must be repaired server-side rather than divide by zero.
    let response = app
        .request(
            "GET",
            "/api/admin/users?page=0&page_size=0",
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let users = &response.body["users"];
    assert_eq!(users["page"], 1);
    assert_eq!(users["page_size"], 1);
    assert_eq!(users["total_items"], 2);
    assert_eq!(users["items"].as_array().map(Vec::len), Some(1));

    // A huge page_size clamps instead of overflowing the SQL LIMIT.
    let response = app
        .request(
            "GET",
            "/api/admin/users?page_size=18446744073709551615",
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["users"]["page_size"], 100);
}

#[tokio::test]
async fn test_role_change() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    app.create_user("root@example.com", "pw123456", "admin").await;
    let admin = app.login("root@example.com", "pw123456").await;
    let member_id = app
        .create_user("carol@example.com", "pw123456", "member")
        .await;
    let member = app.login("carol@example.com", "pw123456").await;

    let bad = app
        .request(
            "PUT",
            &format!("/api/admin/users/{member_id}/role"),
            Some(serde_json::json!({ "role": "superuser" })),
            Some(&admin),
        )
        .await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);

    let promoted = app
        .request(
            "PUT",
            &format!("/api/admin/users/{member_id}/role"),
            Some(serde_json::json!({ "role": "admin" })),
            Some(&admin),
        )
        .await;
    assert_eq!(promoted.status, StatusCode::OK);
    assert_eq!(promoted.body["message"], "Role updated");

    // The promotion takes effect for the member's existing session.
    let users = app
        .request("GET", "/api/admin/users", None, Some(&member))
        .await;
    assert_eq!(users.status, StatusCode::OK);
}

#[tokio::test]
async fn test_deactivation_revokes_all_sessions() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    app.create_user("root@example.com", "pw123456", "admin").await;
    let admin = app.login("root@example.com", "pw123456").await;
    let target_id = app
        .create_user("dave@example.com", "pw123456", "member")
        .await;
    let first = app.login("dave@example.com", "pw123456").await;
    let second = app.login("dave@example.com", "pw123456").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/users/{target_id}/deactivate"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    for token in [&first, &second] {
        let me = app.request("GET", "/api/auth/me", None, Some(token)).await;
        assert_eq!(me.status, StatusCode::UNAUTHORIZED);
    }

    // A deactivated user cannot log back in either.
    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "dave@example.com",
                "password": "pw123456",
            })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_activity_log_records_and_filters() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    app.create_user("root@example.com", "pw123456", "admin").await;
    let admin = app.login("root@example.com", "pw123456").await;

    let token = app.register("erin@example.com", "pw123456", "Erin").await;
    let workspace = app
        .request(
            "POST",
            "/api/workspaces",
            Some(serde_json::json!({ "name": "Ops" })),
            Some(&token),
        )
        .await;
    let workspace_id = workspace.body["workspace"]["id"]
        .as_str()
        .expect("workspace id")
        .to_string();
    let board = app
        .request(
            "POST",
            "/api/boards",
            Some(serde_json::json!({ "workspace_id": workspace_id, "name": "Deploys" })),
            Some(&token),
        )
        .await;
    assert_eq!(board.status, StatusCode::OK);

    let logs = app
        .request("GET", "/api/admin/activity", None, Some(&admin))
        .await;
    assert_eq!(logs.status, StatusCode::OK);

    let entries = logs.body["logs"].as_array().expect("logs array");
    let actions: Vec<&str> = entries
        .iter()
        .filter_map(|e| e["action"].as_str())
        .collect();
    // Newest first.
    assert_eq!(actions, ["board.created", "workspace.created"]);
    assert_eq!(entries[0]["user_email"], "erin@example.com");

    let filtered = app
        .request(
            "GET",
            &format!("/api/admin/activity?workspace_id={workspace_id}&limit=1"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(filtered.status, StatusCode::OK);
    assert_eq!(
        filtered.body["logs"].as_array().map(Vec::len),
        Some(1)
    );
}
