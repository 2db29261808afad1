//! Postgres adapters for the repository traits.
//!
//! Each adapter holds the shared pool, uses explicit column lists, and
//! runs aggregate writes inside a transaction.

pub mod account_repo;
pub mod mealplan_repo;
pub mod recipe_repo;
pub mod refresh_repo;

pub use account_repo::{PgUserGroupStore, PgUserStore};
pub use mealplan_repo::PgMealPlanStore;
pub use recipe_repo::PgRecipeStore;
pub use refresh_repo::PgRefreshStore;
