use std::sync::mpsc::{channel, Receiver};

use crate::client::api;
use crate::client::config::Config;
use crate::shared::types::{Movie, NewReview, Review, UserResponse};

/// Which top-level screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Auth,
    Browse,
}

/// Authentication state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub authenticated: bool,
    pub user: Option<UserResponse>,
    pub error: Option<String>,
    pub loading: bool,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
    }
}

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub auth_state: AuthState,
    pub current_view: View,
    pub identifier_input: String,
    pub username_input: String,
    pub email_input: String,
    pub password_input: String,
    pub is_signup_mode: bool,

    pub movies: Vec<Movie>,
    pub reviews: Vec<Review>,
    pub catalog_error: Option<String>,
    pub catalog_loading: bool,

    /// Movie id the review composer is open for
    pub composing_for: Option<i64>,
    pub review_rating: i64,
    pub review_comment: String,
    pub review_error: Option<String>,

    pub auth_result: Option<Receiver<Result<crate::shared::types::AuthResponse, String>>>,
    pub me_result: Option<Receiver<Result<UserResponse, String>>>,
    pub catalog_result: Option<Receiver<Result<(Vec<Movie>, Vec<Review>), String>>>,
    pub review_result: Option<Receiver<Result<Review, String>>>,
    pub delete_result: Option<Receiver<Result<Review, String>>>,
}

impl AppState {
    pub fn new() -> Self {
        let config = Config::new();
        // A persisted token drops us straight into the catalog; the
        // identity behind it is re-resolved against the server, and a
        // stale token falls back to the login screen.
        let current_view = if config.get_token().is_some() {
            View::Browse
        } else {
            View::Auth
        };

        let mut state = Self {
            config,
            auth_state: AuthState::new(),
            current_view,
            identifier_input: String::new(),
            username_input: String::new(),
            email_input: String::new(),
            password_input: String::new(),
            is_signup_mode: false,
            movies: Vec::new(),
            reviews: Vec::new(),
            catalog_error: None,
            catalog_loading: false,
            composing_for: None,
            review_rating: 3,
            review_comment: String::new(),
            review_error: None,
            auth_result: None,
            me_result: None,
            catalog_result: None,
            review_result: None,
            delete_result: None,
        };

        if state.current_view == View::Browse {
            state.resolve_identity();
            state.refresh_catalog();
        }

        state
    }

    /// True while any background request is in flight.
    pub fn busy(&self) -> bool {
        self.auth_result.is_some()
            || self.me_result.is_some()
            || self.catalog_result.is_some()
            || self.review_result.is_some()
            || self.delete_result.is_some()
    }

    /// Drain any completed background requests. Called once per frame.
    pub fn poll_results(&mut self) {
        self.check_auth_result();
        self.check_me_result();
        self.check_catalog_result();
        self.check_review_result();
        self.check_delete_result();
    }

    fn check_auth_result(&mut self) {
        let Some(rx) = self.auth_result.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(result) => {
                self.auth_state.loading = false;
                match result {
                    Ok(auth) => {
                        tracing::info!("Authenticated as {}", auth.user.username);
                        self.config.set_token(Some(auth.token));
                        self.auth_state.authenticated = true;
                        self.auth_state.user = Some(auth.user);
                        self.auth_state.error = None;
                        self.current_view = View::Browse;
                        self.password_input.clear();
                        self.is_signup_mode = false;
                        self.refresh_catalog();
                    }
                    Err(e) => {
                        tracing::warn!("Authentication failed: {}", e);
                        self.auth_state.set_error(e);
                    }
                }
            }
            Err(_) => self.auth_result = Some(rx),
        }
    }

    fn check_me_result(&mut self) {
        let Some(rx) = self.me_result.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(result) => match result {
                Ok(user) => {
                    tracing::info!("Session restored for {}", user.username);
                    self.auth_state.authenticated = true;
                    self.auth_state.user = Some(user);
                }
                Err(e) => {
                    // Expired or revoked session; drop the token and land
                    // on the login screen
                    tracing::warn!("Persisted session rejected: {}", e);
                    self.config.clear_token();
                    self.auth_state = AuthState::new();
                    self.current_view = View::Auth;
                }
            },
            Err(_) => self.me_result = Some(rx),
        }
    }

    fn check_catalog_result(&mut self) {
        let Some(rx) = self.catalog_result.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(result) => {
                self.catalog_loading = false;
                match result {
                    Ok((movies, reviews)) => {
                        self.movies = movies;
                        self.reviews = reviews;
                        self.catalog_error = None;
                    }
                    Err(e) => self.catalog_error = Some(e),
                }
            }
            Err(_) => self.catalog_result = Some(rx),
        }
    }

    fn check_review_result(&mut self) {
        let Some(rx) = self.review_result.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(result) => match result {
                Ok(review) => {
                    self.reviews.push(review);
                    self.composing_for = None;
                    self.review_comment.clear();
                    self.review_rating = 3;
                    self.review_error = None;
                }
                Err(e) => self.review_error = Some(e),
            },
            Err(_) => self.review_result = Some(rx),
        }
    }

    fn check_delete_result(&mut self) {
        let Some(rx) = self.delete_result.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(result) => match result {
                Ok(deleted) => self.reviews.retain(|r| r.id != deleted.id),
                Err(e) => self.catalog_error = Some(e),
            },
            Err(_) => self.delete_result = Some(rx),
        }
    }

    pub fn handle_login(&mut self) {
        if self.identifier_input.is_empty() || self.password_input.is_empty() {
            self.auth_state
                .set_error("Username and password are required".to_string());
            return;
        }

        self.auth_state.loading = true;
        self.auth_state.error = None;

        let identifier = self.identifier_input.clone();
        let password = self.password_input.clone();
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api::login(&config, identifier, password);
            let _ = tx.send(result);
        });

        self.auth_result = Some(rx);
    }

    pub fn handle_signup(&mut self) {
        if self.username_input.is_empty()
            || self.email_input.is_empty()
            || self.password_input.is_empty()
        {
            self.auth_state
                .set_error("Username, email and password are required".to_string());
            return;
        }

        // Simple email validation
        if !self.email_input.contains('@') {
            self.auth_state
                .set_error("Please enter a valid email address".to_string());
            return;
        }

        self.auth_state.loading = true;
        self.auth_state.error = None;

        let email = self.email_input.clone();
        let username = self.username_input.clone();
        let password = self.password_input.clone();
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api::register(&config, email, username, password);
            let _ = tx.send(result);
        });

        self.auth_result = Some(rx);
    }

    /// Resolve the identity behind the persisted token so ownership-aware
    /// UI (the delete buttons) works without a fresh login.
    pub fn resolve_identity(&mut self) {
        let Some(token) = self.config.get_token().cloned() else {
            return;
        };
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api::fetch_me(&config, &token);
            let _ = tx.send(result);
        });

        self.me_result = Some(rx);
    }

    pub fn refresh_catalog(&mut self) {
        if self.catalog_result.is_some() {
            return;
        }

        self.catalog_loading = true;
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api::fetch_movies(&config)
                .and_then(|movies| api::fetch_reviews(&config).map(|reviews| (movies, reviews)));
            let _ = tx.send(result);
        });

        self.catalog_result = Some(rx);
    }

    pub fn submit_review(&mut self) {
        let Some(movie_id) = self.composing_for else {
            return;
        };
        let Some(token) = self.config.get_token().cloned() else {
            self.review_error = Some("Log in to post a review".to_string());
            return;
        };

        let review = NewReview {
            movie_id,
            rating: self.review_rating,
            comment: if self.review_comment.trim().is_empty() {
                None
            } else {
                Some(self.review_comment.trim().to_string())
            },
        };
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api::create_review(&config, &token, review);
            let _ = tx.send(result);
        });

        self.review_result = Some(rx);
    }

    pub fn delete_review(&mut self, review_id: i64) {
        let Some(token) = self.config.get_token().cloned() else {
            return;
        };
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api::delete_review(&config, &token, review_id);
            let _ = tx.send(result);
        });

        self.delete_result = Some(rx);
    }

    pub fn logout(&mut self) {
        self.config.clear_token();
        self.auth_state = AuthState::new();
        self.current_view = View::Auth;
        self.identifier_input.clear();
        self.username_input.clear();
        self.email_input.clear();
        self.password_input.clear();
        self.movies.clear();
        self.reviews.clear();
        self.composing_for = None;
    }

    pub fn toggle_auth_mode(&mut self) {
        self.is_signup_mode = !self.is_signup_mode;
        self.auth_state.clear_error();
        self.password_input.clear();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    fn restored_user() -> UserResponse {
        UserResponse {
            id: 7,
            username: "alice".to_string(),
            email: Some("alice@example.com".to_string()),
        }
    }

    /// A state that never touches the environment, the config dir, or
    /// the network.
    fn detached_state() -> AppState {
        AppState {
            config: Config::with_server_url("http://localhost:0"),
            auth_state: AuthState::new(),
            current_view: View::Auth,
            identifier_input: String::new(),
            username_input: String::new(),
            email_input: String::new(),
            password_input: String::new(),
            is_signup_mode: false,
            movies: Vec::new(),
            reviews: Vec::new(),
            catalog_error: None,
            catalog_loading: false,
            composing_for: None,
            review_rating: 3,
            review_comment: String::new(),
            review_error: None,
            auth_result: None,
            me_result: None,
            catalog_result: None,
            review_result: None,
            delete_result: None,
        }
    }

    #[test]
    fn restored_session_attaches_identity() {
        let mut state = detached_state();
        state.current_view = View::Browse;

        let (tx, rx) = channel();
        tx.send(Ok(restored_user())).unwrap();
        state.me_result = Some(rx);

        state.poll_results();

        assert!(state.auth_state.authenticated);
        assert_eq!(
            state.auth_state.user.as_ref().map(|u| u.id),
            Some(7)
        );
        assert_eq!(state.current_view, View::Browse);
        assert!(state.me_result.is_none());
    }

    #[test]
    fn rejected_session_falls_back_to_login() {
        let mut state = detached_state();
        state.current_view = View::Browse;
        state.auth_state.authenticated = true;
        state.config.set_token(Some("stale-token".to_string()));

        let (tx, rx) = channel();
        tx.send(Err("Invalid or expired token".to_string())).unwrap();
        state.me_result = Some(rx);

        state.poll_results();

        assert!(!state.auth_state.authenticated);
        assert!(state.auth_state.user.is_none());
        assert_eq!(state.current_view, View::Auth);
        assert!(state.config.get_token().is_none());
    }

    #[test]
    fn pending_result_is_kept_until_delivery() {
        let mut state = detached_state();
        let (tx, rx) = channel();
        state.me_result = Some(rx);

        state.poll_results();
        assert!(state.me_result.is_some());

        tx.send(Ok(restored_user())).unwrap();
        state.poll_results();
        assert!(state.me_result.is_none());
    }
}
