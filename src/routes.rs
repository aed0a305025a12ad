use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use crate::handlers;
use crate::state::AppState;

/// Builds the service router. `debug` turns on per-request tracing.
pub fn build_router(state: AppState, debug: bool) -> Router {
    let app = Router::new()
        // Arithmetic
        .route("/calculate", post(handlers::handle_calculate))

        // Auth routes
        .route("/register", post(handlers::handle_register))
        .route("/login", post(handlers::handle_login))
        .route("/users/current", get(handlers::handle_current_user))
        .route("/logout", post(handlers::handle_logout))

        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    if debug {
        app.layer(TraceLayer::new_for_http())
    } else {
        app
    }
}
