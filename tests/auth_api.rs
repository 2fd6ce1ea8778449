//! Authentication API integration tests
//!
//! Registration, login, token verification, and the protected /me
//! endpoint, driven through the real router.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{register_user, spawn_server};
use reelview::backend::auth::tokens::{create_token_with_ttl, verify_token};

#[tokio::test]
async fn register_returns_token_and_user() {
    let ctx = spawn_server().await;

    let response = ctx
        .server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "pw123456",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "User created successfully");
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert!(body["user"].get("password").is_none());

    // The issued token carries the new user's identity
    let token = body["token"].as_str().unwrap();
    let claims = verify_token(&ctx.jwt, token).unwrap();
    assert_eq!(claims.sub, body["user"]["id"].as_i64().unwrap());
    assert_eq!(claims.username, "alice");
}

#[tokio::test]
async fn register_rejects_missing_fields() {
    let ctx = spawn_server().await;

    let response = ctx
        .server
        .post("/api/auth/register")
        .json(&json!({
            "username": "",
            "email": "a@example.com",
            "password": "pw123456",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Missing required fields");
}

#[tokio::test]
async fn register_rejects_absent_fields() {
    let ctx = spawn_server().await;

    // Password key left out entirely, not sent as an empty string
    let response = ctx
        .server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Missing required fields");

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&ctx.pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

#[tokio::test]
async fn register_duplicate_username_leaves_no_row() {
    let ctx = spawn_server().await;
    register_user(&ctx, "alice", "alice@example.com", "pw123456").await;

    let response = ctx
        .server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "email": "other@example.com",
            "password": "pw123456",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Username already exists");

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&ctx.pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

#[tokio::test]
async fn register_duplicate_email_is_rejected() {
    let ctx = spawn_server().await;
    register_user(&ctx, "alice", "alice@example.com", "pw123456").await;

    let response = ctx
        .server
        .post("/api/auth/register")
        .json(&json!({
            "username": "bob",
            "email": "alice@example.com",
            "password": "pw123456",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Email already exists");
}

#[tokio::test]
async fn post_users_aliases_registration() {
    let ctx = spawn_server().await;

    let response = ctx
        .server
        .post("/api/users")
        .json(&json!({
            "username": "carol",
            "email": "carol@example.com",
            "password": "pw123456",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["user"]["username"], "carol");
}

#[tokio::test]
async fn login_with_username_succeeds() {
    let ctx = spawn_server().await;
    register_user(&ctx, "alice", "alice@example.com", "pw123456").await;

    let response = ctx
        .server
        .post("/api/auth/login")
        .json(&json!({ "username": "alice", "password": "pw123456" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Login successful");
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["user"]["username"], "alice");
}

#[tokio::test]
async fn login_with_email_identifier_succeeds() {
    let ctx = spawn_server().await;
    register_user(&ctx, "alice", "alice@example.com", "pw123456").await;

    let response = ctx
        .server
        .post("/api/auth/login")
        .json(&json!({ "identifier": "alice@example.com", "password": "pw123456" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn login_wrong_password_and_unknown_user_look_identical() {
    let ctx = spawn_server().await;
    register_user(&ctx, "alice", "alice@example.com", "pw123456").await;

    let wrong_password = ctx
        .server
        .post("/api/auth/login")
        .json(&json!({ "username": "alice", "password": "nope" }))
        .await;
    let unknown_user = ctx
        .server
        .post("/api/auth/login")
        .json(&json!({ "username": "mallory", "password": "nope" }))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status_code(), StatusCode::UNAUTHORIZED);

    let a: serde_json::Value = wrong_password.json();
    let b: serde_json::Value = unknown_user.json();
    assert_eq!(a["error"], "Invalid credentials");
    assert_eq!(a, b);
}

#[tokio::test]
async fn me_returns_current_user() {
    let ctx = spawn_server().await;
    let (token, user_id) = register_user(&ctx, "alice", "alice@example.com", "pw123456").await;

    let response = ctx
        .server
        .get("/api/auth/me")
        .authorization_bearer(&token)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["id"].as_i64().unwrap(), user_id);
    assert_eq!(body["username"], "alice");
}

#[tokio::test]
async fn me_after_account_deletion_is_not_found() {
    let ctx = spawn_server().await;
    let (token, user_id) = register_user(&ctx, "alice", "alice@example.com", "pw123456").await;

    let delete = ctx
        .server
        .delete(&format!("/api/users/{}", user_id))
        .authorization_bearer(&token)
        .await;
    assert_eq!(delete.status_code(), StatusCode::OK);

    // Token still verifies but the user row is gone
    let response = ctx
        .server
        .get("/api/auth/me")
        .authorization_bearer(&token)
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let ctx = spawn_server().await;

    let response = ctx.server.get("/api/auth/me").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Access token required");
}

#[tokio::test]
async fn garbage_token_is_forbidden() {
    let ctx = spawn_server().await;

    let response = ctx
        .server
        .get("/api/auth/me")
        .authorization_bearer("not-a-real-token")
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let ctx = spawn_server().await;
    let (_, user_id) = register_user(&ctx, "alice", "alice@example.com", "pw123456").await;

    // Issued two hours in the past, well beyond validation leeway
    let expired = create_token_with_ttl(&ctx.jwt, user_id, "alice", -7200).unwrap();

    let response = ctx
        .server
        .get("/api/auth/me")
        .authorization_bearer(&expired)
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn token_signed_with_other_secret_is_rejected() {
    let ctx = spawn_server().await;
    let (_, user_id) = register_user(&ctx, "alice", "alice@example.com", "pw123456").await;

    let other_keys = reelview::backend::auth::JwtKeys::from_secret(b"different-secret");
    let forged = create_token_with_ttl(&other_keys, user_id, "alice", 3600).unwrap();

    let response = ctx
        .server
        .get("/api/auth/me")
        .authorization_bearer(&forged)
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}
