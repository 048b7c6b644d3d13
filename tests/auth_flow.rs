//! Integration tests for registration, login, logout, and token
//! validation.

mod common;

use http::StatusCode;

#[tokio::test]
async fn test_register_then_me() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    let token = app
        .register("alice@example.com", "pw123456", "Alice")
        .await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let user = &response.body["user"];
    assert_eq!(user["email"], "alice@example.com");
    assert_eq!(user["role"], "member");
    assert!(user.get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    app.register("dup@example.com", "pw123456", "First").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "dup@example.com",
                "password": "pw123456",
                "name": "Second",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_email_insert_is_validation_error() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    // Concurrent registrations can both pass the email_exists pre-check;
    // the second insert then hits the unique index and must come back as
    // a validation error, not a database fault.
    let repo = taskboard_database::repositories::user::UserRepository::new(app.db_pool.clone());
    let data = taskboard_entity::user::CreateUser {
        email: "race@example.com".to_string(),
        name: "Racer".to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        role: taskboard_entity::user::UserRole::Member,
    };

    repo.create(&data).await.unwrap();
    let err = repo.create(&data).await.unwrap_err();
    assert_eq!(err.kind, taskboard_core::error::ErrorKind::Validation);
}

#[tokio::test]
async fn test_register_short_password() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "short@example.com",
                "password": "short",
                "name": "Shorty",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success_and_wrong_password() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    app.create_user("bob@example.com", "password123", "member")
        .await;

    let token = app.login("bob@example.com", "password123").await;
    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "bob@example.com",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // A failed login must not leave a session behind.
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sessions s JOIN users u ON u.id = s.user_id \
         WHERE u.email = 'bob@example.com'",
    )
    .fetch_one(&app.db_pool)
    .await
    .expect("count sessions");
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    let token = app
        .register("carol@example.com", "pw123456", "Carol")
        .await;

    let logout = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(logout.status, StatusCode::OK);

    // The signature is still valid, but the session row is gone.
    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_and_malformed_tokens() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    let response = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/api/auth/me", None, Some("not.a.jwt"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
