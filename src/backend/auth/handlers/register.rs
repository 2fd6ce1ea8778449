/**
 * Registration Handler
 *
 * POST /api/auth/register
 *
 * # Registration Process
 *
 * 1. Reject empty email/username/password
 * 2. Check that the username and email are not already taken
 * 3. Hash the password with bcrypt
 * 4. Insert the user (a concurrent duplicate still fails cleanly on the
 *    unique constraints and maps to the same client-visible error)
 * 5. Issue a token and return it with the created user
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt DEFAULT_COST and never returned
 * - Tokens expire 24 hours after issuance
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};

use crate::backend::auth::tokens::create_token;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::backend::users::db::{create_user, get_user_by_email, get_user_by_username};
use crate::shared::types::{AuthResponse, RegisterRequest};

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - missing fields, or username/email already taken
/// * `500 Internal Server Error` - hashing, insert, or signing failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    tracing::info!(
        "Registration request for username: {}, email: {}",
        request.username,
        request.email
    );

    if request.email.is_empty() || request.username.is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("Missing required fields"));
    }

    // Pre-check both uniqueness constraints for a precise error message;
    // the insert below still catches a concurrent duplicate.
    if get_user_by_username(&state.db, &request.username)
        .await?
        .is_some()
    {
        tracing::warn!("Username already exists: {}", request.username);
        return Err(ApiError::conflict("Username already exists"));
    }

    if get_user_by_email(&state.db, &request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(ApiError::conflict("Email already exists"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    let user = create_user(&state.db, &request.email, &request.username, &password_hash).await?;

    let token = create_token(&state.jwt, user.id, &user.username).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        ApiError::internal("Server error")
    })?;

    tracing::info!("User created successfully: {} ({})", user.username, user.id);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User created successfully".to_string(),
            token,
            user,
        }),
    ))
}
