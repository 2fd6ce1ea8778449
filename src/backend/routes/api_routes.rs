/**
 * API Route Tables
 *
 * Two route tables, split by authentication requirement:
 *
 * ## Public
 * - `POST /api/auth/register` - user registration
 * - `POST /api/auth/login`    - user login
 * - `POST /api/users`         - user creation (same operation as register)
 * - `GET  /api/movies[/{id}]` - movies are readable by anyone
 * - `GET  /api/reviews[/{id}]`- reviews are readable by anyone
 *
 * ## Protected (bearer token required)
 * - `GET    /api/auth/me`       - identity behind the caller's token
 * - `GET    /api/users[/{id}]`  - user listing/fetch
 * - `DELETE /api/users/{id}`    - self-deletion only
 * - `POST   /api/movies`        - movie creation
 * - `DELETE /api/movies/{id}`   - movie deletion
 * - `POST   /api/reviews`       - review creation (owner from token)
 * - `DELETE /api/reviews/{id}`  - owner-only review deletion
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{get_me, login, register};
use crate::backend::movies::handlers::{create_movie, delete_movie, get_movie, list_movies};
use crate::backend::reviews::handlers::{
    create_review, delete_review, get_review, list_reviews,
};
use crate::backend::server::state::AppState;
use crate::backend::users::handlers::{delete_user, get_user, list_users};

/// Routes that answer without a token.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/users", post(register))
        .route("/api/movies", get(list_movies))
        .route("/api/movies/{id}", get(get_movie))
        .route("/api/reviews", get(list_reviews))
        .route("/api/reviews/{id}", get(get_review))
}

/// Routes gated by the auth middleware (applied in `router`).
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/me", get(get_me))
        .route("/api/users", get(list_users))
        .route(
            "/api/users/{id}",
            get(get_user).delete(delete_user),
        )
        .route("/api/movies", post(create_movie))
        .route("/api/movies/{id}", axum::routing::delete(delete_movie))
        .route("/api/reviews", post(create_review))
        .route("/api/reviews/{id}", axum::routing::delete(delete_review))
}
