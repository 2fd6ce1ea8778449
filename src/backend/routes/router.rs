/**
 * Router Assembly
 *
 * Merges the public and protected route tables into the final router.
 * The auth middleware is applied as a `route_layer` on the protected
 * table only, so it runs for matched protected routes and nothing else.
 * CORS and request tracing wrap the whole surface.
 */

use axum::{middleware, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::middleware::auth::auth_middleware;
use crate::backend::routes::api_routes::{protected_routes, public_routes};
use crate::backend::server::state::AppState;

/// Create the router with all routes, middleware, and layers configured.
pub fn create_router(state: AppState) -> Router {
    let protected = protected_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth_middleware,
    ));

    Router::new()
        .merge(public_routes())
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
