//! Route definitions for refresh stamps.

use axum::routing::get;
use axum::Router;

use crate::handlers::refresh;
use crate::state::AppState;

/// Routes mounted at `/refresh`.
///
/// ```text
/// GET    /          -> list (stamps for all scopes)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(refresh::list))
}
