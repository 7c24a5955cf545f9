//! Route definitions for the `/users` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`. None of them require a token.
///
/// ```text
/// POST /login                 -> login
/// POST /seed-admin            -> seed_admin            (admin bootstrap only)
/// POST /reset-admin-password  -> reset_admin_password  (admin bootstrap only)
/// ```
pub fn router(admin_bootstrap: bool) -> Router<AppState> {
    let router = Router::new().route("/login", post(user::login));
    if !admin_bootstrap {
        return router;
    }
    router
        .route("/seed-admin", post(user::seed_admin))
        .route("/reset-admin-password", post(user::reset_admin_password))
}
