//! Common test utilities and helpers
//!
//! Spins up the full API router against an in-memory SQLite database so
//! integration tests exercise the real middleware, handlers, and schema
//! constraints end to end.

use axum_test::TestServer;
use sqlx::SqlitePool;

use reelview::backend::auth::JwtKeys;
use reelview::backend::routes::create_router;
use reelview::backend::{db, AppState};

pub const TEST_SECRET: &[u8] = b"test-secret";

pub struct TestContext {
    pub server: TestServer,
    pub pool: SqlitePool,
    pub jwt: JwtKeys,
}

/// Build a server over a fresh in-memory database.
pub async fn spawn_server() -> TestContext {
    let pool = db::connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    db::schema::create_schema(&pool).await.expect("schema");

    let jwt = JwtKeys::from_secret(TEST_SECRET);
    let state = AppState::new(pool.clone(), jwt.clone());
    let server = TestServer::new(create_router(state)).expect("test server");

    TestContext { server, pool, jwt }
}

/// Register a user through the API and return (token, user id).
pub async fn register_user(
    ctx: &TestContext,
    username: &str,
    email: &str,
    password: &str,
) -> (String, i64) {
    let response = ctx
        .server
        .post("/api/auth/register")
        .json(&serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        }))
        .await;

    assert_eq!(response.status_code().as_u16(), 201, "register failed");
    let body: serde_json::Value = response.json();
    let token = body["token"].as_str().expect("token in body").to_string();
    let user_id = body["user"]["id"].as_i64().expect("user id in body");
    (token, user_id)
}

/// Create a movie through the API and return its id.
pub async fn create_movie(ctx: &TestContext, token: &str, title: &str) -> i64 {
    let response = ctx
        .server
        .post("/api/movies")
        .authorization_bearer(token)
        .json(&serde_json::json!({ "title": title }))
        .await;

    assert_eq!(response.status_code().as_u16(), 201, "create movie failed");
    let body: serde_json::Value = response.json();
    body["id"].as_i64().expect("movie id in body")
}

/// Post a review through the API and return its id.
pub async fn create_review(ctx: &TestContext, token: &str, movie_id: i64, rating: i64) -> i64 {
    let response = ctx
        .server
        .post("/api/reviews")
        .authorization_bearer(token)
        .json(&serde_json::json!({
            "movie_id": movie_id,
            "rating": rating,
            "comment": "test review",
        }))
        .await;

    assert_eq!(response.status_code().as_u16(), 201, "create review failed");
    let body: serde_json::Value = response.json();
    body["id"].as_i64().expect("review id in body")
}
