/**
 * API Request and Response Types
 *
 * This module defines the JSON bodies exchanged between the client and the
 * REST API. The same structs are used by the Axum handlers to build
 * responses and by the desktop client to parse them.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registration request
///
/// Contains the email, username and password for user registration.
/// Absent fields deserialize as empty strings so the handler's presence
/// check rejects them with the API's own error body rather than a
/// deserialization failure.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RegisterRequest {
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// User's chosen username
    #[serde(default)]
    pub username: String,
    /// User's password (hashed before storage, never stored raw)
    #[serde(default)]
    pub password: String,
}

/// Login request
///
/// The caller may supply the account under any of `identifier`,
/// `username`, or `email`; the first one present is used to locate the
/// user, and usernames and emails are interchangeable.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct LoginRequest {
    /// Username or email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Username (alias for identifier)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Email (alias for identifier)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// User's password
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    /// The username-or-email the caller supplied, if any.
    pub fn identifier(&self) -> Option<&str> {
        self.identifier
            .as_deref()
            .or(self.username.as_deref())
            .or(self.email.as_deref())
            .filter(|s| !s.is_empty())
    }
}

/// Auth response
///
/// Returned by register and login. Contains the signed token and the user
/// payload for immediate authentication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    /// Human-readable outcome ("User created successfully", "Login successful")
    pub message: String,
    /// Signed token, expires 24 hours after issuance
    pub token: String,
    /// User information (never includes the password hash)
    pub user: UserResponse,
}

/// User payload (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct UserResponse {
    /// Unique numeric id
    pub id: i64,
    /// Unique username
    pub username: String,
    /// Email, when one is stored
    pub email: Option<String>,
}

/// A movie row as stored and served.
#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub genre: Option<String>,
    pub year: Option<i64>,
    pub poster_url: Option<String>,
    pub summary: Option<String>,
}

/// Movie creation request. An absent title deserializes as empty and
/// fails the handler's validation.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct NewMovie {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub year: Option<i64>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// A review row as stored and served.
///
/// `user_id` names the owning user; `movie_id` the reviewed movie. Both
/// cascade-delete with their parent rows.
#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Review {
    pub id: i64,
    pub user_id: i64,
    pub movie_id: i64,
    /// Integer rating, 1 through 5 inclusive
    pub rating: i64,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Review creation request. The owning user comes from the caller's
/// token, never from the body. An absent `movie_id` or `rating`
/// deserializes as zero, which the storage constraints reject.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct NewReview {
    #[serde(default)]
    pub movie_id: i64,
    #[serde(default)]
    pub rating: i64,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Error body returned by every failing endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_accepts_any_identifier_alias() {
        let by_identifier: LoginRequest =
            serde_json::from_str(r#"{"identifier":"alice","password":"pw"}"#).unwrap();
        assert_eq!(by_identifier.identifier(), Some("alice"));

        let by_username: LoginRequest =
            serde_json::from_str(r#"{"username":"alice","password":"pw"}"#).unwrap();
        assert_eq!(by_username.identifier(), Some("alice"));

        let by_email: LoginRequest =
            serde_json::from_str(r#"{"email":"alice@example.com","password":"pw"}"#).unwrap();
        assert_eq!(by_email.identifier(), Some("alice@example.com"));
    }

    #[test]
    fn login_request_without_identifier_is_none() {
        let empty: LoginRequest = serde_json::from_str(r#"{"password":"pw"}"#).unwrap();
        assert_eq!(empty.identifier(), None);

        let blank: LoginRequest =
            serde_json::from_str(r#"{"identifier":"","password":"pw"}"#).unwrap();
        assert_eq!(blank.identifier(), None);
    }

    #[test]
    fn new_movie_defaults_optional_fields() {
        let movie: NewMovie = serde_json::from_str(r#"{"title":"Inception"}"#).unwrap();
        assert_eq!(movie.title, "Inception");
        assert!(movie.genre.is_none());
        assert!(movie.year.is_none());
    }

    #[test]
    fn absent_fields_deserialize_to_empty_values() {
        let register: RegisterRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(register.email.is_empty());
        assert!(register.username.is_empty());
        assert!(register.password.is_empty());

        let movie: NewMovie = serde_json::from_str(r#"{"genre":"Drama"}"#).unwrap();
        assert!(movie.title.is_empty());

        let review: NewReview = serde_json::from_str(r#"{"movie_id":1}"#).unwrap();
        assert_eq!(review.rating, 0);
    }
}
