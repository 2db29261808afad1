//! Route definitions for recipe CRUD.

use axum::routing::get;
use axum::Router;

use crate::handlers::recipes;
use crate::state::AppState;

/// Routes mounted at `/recipes`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /options   -> options
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recipes::list).post(recipes::create))
        .route("/options", get(recipes::options))
        .route(
            "/{id}",
            get(recipes::get_by_id)
                .put(recipes::update)
                .delete(recipes::delete),
        )
}
