/**
 * Authorization Middleware
 *
 * Gates protected routes on a bearer token:
 *
 * 1. Extract the token from the Authorization header
 * 2. Verify signature and expiry
 * 3. Attach the decoded identity to the request extensions
 *
 * A missing or malformed header fails with 401; an invalid or expired
 * token fails with 403. Ownership decisions (who may delete what) stay
 * in the handlers, which compare the attached identity against the
 * resource's owner.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::backend::auth::tokens::verify_token;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Identity decoded from a verified token.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
}

/// Authorization middleware
///
/// Applied with `axum::middleware::from_fn_with_state` on every route
/// that requires authentication. On success the request proceeds with a
/// `CurrentUser` in its extensions; handlers receive it through the
/// [`AuthUser`] extractor.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::unauthenticated("Access token required")
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Malformed Authorization header");
        ApiError::unauthenticated("Access token required")
    })?;

    let claims = verify_token(&state.jwt, token).map_err(|e| {
        tracing::warn!("Token rejected: {:?}", e);
        ApiError::forbidden("Invalid or expired token")
    })?;

    request.extensions_mut().insert(CurrentUser {
        id: claims.sub,
        username: claims.username,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated identity.
///
/// Only usable on routes behind [`auth_middleware`]; elsewhere the
/// extension is absent and extraction fails with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub CurrentUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("CurrentUser not found in request extensions");
                ApiError::unauthenticated("Access token required")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn test_extractor_reads_attached_identity() {
        let request = Request::builder()
            .uri("http://example.com")
            .extension(CurrentUser {
                id: 7,
                username: "alice".to_string(),
            })
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let AuthUser(user) = AuthUser::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_extractor_fails_without_identity() {
        let request = Request::builder()
            .uri("http://example.com")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let err = AuthUser::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert_eq!(
            err.status_code(),
            axum::http::StatusCode::UNAUTHORIZED
        );
    }
}
