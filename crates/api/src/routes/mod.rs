pub mod books;
pub mod categories;
pub mod health;
pub mod users;

use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::response::IntoResponse;
use axum::{Json, Router};

use crate::middleware::auth::require_auth;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users
///     POST /login
///     POST /seed-admin                 (admin bootstrap only)
///     POST /reset-admin-password       (admin bootstrap only)
///
/// /categories                          bearer token required
///     GET, POST /
///     GET, DELETE /{id}
///     GET /{id}/books
///
/// /books                               bearer token required
///     GET, POST /
///     GET, DELETE /{id}
/// ```
pub fn api_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .nest("/categories", categories::router())
        .nest("/books", books::router())
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .nest("/users", users::router(state.config.admin.enabled))
        .merge(protected)
}

/// Envelope answer for any path no route matches.
pub async fn fallback() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::error("Route not found", "no route matches this path")),
    )
}
