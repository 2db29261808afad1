pub mod groups;
pub mod health;
pub mod mealplan;
pub mod recipes;
pub mod refresh;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /recipes                   list, create
/// /recipes/options           option summaries for pickers
/// /recipes/{id}              get, update, delete
///
/// /mealplan?from&to          entries in a day range
/// /mealplan/{id}             get, update, delete
///
/// /users                     list, create
/// /users/{id}                get, update, delete
///
/// /groups                    list, create
/// /groups/{id}               get, update, delete
///
/// /refresh                   refresh stamps for all scopes
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/recipes", recipes::router())
        .nest("/mealplan", mealplan::router())
        .nest("/users", users::router())
        .nest("/groups", groups::router())
        .nest("/refresh", refresh::router())
}
