/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * # Authentication Process
 *
 * 1. Locate the user by the supplied identifier (username or email,
 *    interchangeably)
 * 2. Verify the password against the stored bcrypt hash
 * 3. Issue a token and return it with the user payload
 *
 * # Security
 *
 * - "No such user" and "wrong password" return the same generic 401,
 *   preventing account enumeration
 * - Passwords are never logged or returned
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::backend::auth::tokens::create_token;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::backend::users::db::{get_user_by_email, get_user_by_username, User};
use crate::shared::types::{AuthResponse, LoginRequest, UserResponse};

/// Look up a user by username first, then by email. The two are
/// interchangeable at login time.
async fn find_by_identifier(
    state: &AppState,
    identifier: &str,
) -> Result<Option<User>, ApiError> {
    if let Some(user) = get_user_by_username(&state.db, identifier).await? {
        return Ok(Some(user));
    }
    Ok(get_user_by_email(&state.db, identifier).await?)
}

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - no identifier or password supplied
/// * `401 Unauthorized` - unknown identifier or wrong password (one
///   generic message for both)
/// * `500 Internal Server Error` - database or signing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let identifier = request
        .identifier()
        .ok_or_else(|| ApiError::validation("Missing required fields"))?;

    if request.password.is_empty() {
        return Err(ApiError::validation("Missing required fields"));
    }

    tracing::info!("Login request for: {}", identifier);

    let user = find_by_identifier(&state, identifier)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed: unknown identifier {}", identifier);
            ApiError::unauthenticated("Invalid credentials")
        })?;

    let valid = verify(&request.password, &user.password)?;
    if !valid {
        tracing::warn!("Login failed: wrong password for {}", user.username);
        return Err(ApiError::unauthenticated("Invalid credentials"));
    }

    let token = create_token(&state.jwt, user.id, &user.username).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        ApiError::internal("Server error")
    })?;

    tracing::info!("User logged in successfully: {}", user.username);

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        user: UserResponse {
            id: user.id,
            username: user.username,
            email: user.email,
        },
    }))
}
