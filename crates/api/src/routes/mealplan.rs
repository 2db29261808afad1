//! Route definitions for the meal plan.

use axum::routing::get;
use axum::Router;

use crate::handlers::mealplan;
use crate::state::AppState;

/// Routes mounted at `/mealplan`.
///
/// ```text
/// GET    /?from&to  -> list (day range, inclusive)
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(mealplan::list).post(mealplan::create))
        .route(
            "/{id}",
            get(mealplan::get_by_id)
                .put(mealplan::update)
                .delete(mealplan::delete),
        )
}
