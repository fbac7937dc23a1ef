//! Router construction.
//!
//! Kept out of `main` so tests can drive the same router with any
//! [`AccountStore`] implementation.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{handlers, services::account_service::AccountStore};

/// Store handle shared with every handler via State extraction.
pub type SharedStore = Arc<dyn AccountStore>;

/// Build the HTTP router.
///
/// | Method | Path | Handler |
/// |---|---|---|
/// | GET | `/` | liveness banner |
/// | POST | `/users` | create account |
/// | GET | `/users` | list accounts |
/// | POST | `/deposit` | deposit |
pub fn create_router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(handlers::health::index))
        .route(
            "/users",
            post(handlers::accounts::create_user).get(handlers::accounts::list_users),
        )
        .route("/deposit", post(handlers::transactions::deposit))
        // Request/response spans for every call
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
