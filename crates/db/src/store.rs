//! Repository interfaces the API layer depends on.
//!
//! Every trait exposes `find` / `list` / `save` / `delete`-shaped
//! operations over domain entities; nothing above this module sees sqlx.
//! `save` persists an *already reconciled* aggregate: the mapper layer has
//! applied the create/update/delete diff at the entity level, so the store
//! only has to make the rows match the entity.

use std::sync::Arc;

use async_trait::async_trait;

use ladle_core::account::{User, UserGroup};
use ladle_core::mealplan::MealPlanEntry;
use ladle_core::recipe::Recipe;
use ladle_core::refresh::{RefreshScope, RefreshStamp};
use ladle_core::types::{Day, DbId};

use crate::error::StoreError;
use crate::repositories::{
    PgMealPlanStore, PgRecipeStore, PgRefreshStore, PgUserGroupStore, PgUserStore,
};
use crate::DbPool;

/// A meal plan entry joined with its recipe title, so the API can render
/// the `recipe` option summary without a second query.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedMeal {
    pub entry: MealPlanEntry,
    pub recipe_title: String,
}

#[async_trait]
pub trait RecipeStore: Send + Sync {
    async fn find(&self, id: DbId) -> Result<Option<Recipe>, StoreError>;
    /// All recipes, ordered by title then id, children in stored order.
    async fn list(&self) -> Result<Vec<Recipe>, StoreError>;
    /// `(id, title)` pairs for select widgets, ordered by title.
    async fn list_options(&self) -> Result<Vec<(DbId, String)>, StoreError>;
    /// Persist the aggregate and return it with assigned ids.
    async fn save(&self, recipe: Recipe) -> Result<Recipe, StoreError>;
    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;
    /// Cheap connectivity probe for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find(&self, id: DbId) -> Result<Option<User>, StoreError>;
    async fn list(&self) -> Result<Vec<User>, StoreError>;
    async fn save(&self, user: User) -> Result<User, StoreError>;
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait UserGroupStore: Send + Sync {
    async fn find(&self, id: DbId) -> Result<Option<UserGroup>, StoreError>;
    async fn list(&self) -> Result<Vec<UserGroup>, StoreError>;
    async fn save(&self, group: UserGroup) -> Result<UserGroup, StoreError>;
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait MealPlanStore: Send + Sync {
    async fn find(&self, id: DbId) -> Result<Option<PlannedMeal>, StoreError>;
    /// Entries with `from <= day <= to`, ordered by day then id.
    async fn list_range(&self, from: Day, to: Day) -> Result<Vec<PlannedMeal>, StoreError>;
    async fn save(&self, entry: MealPlanEntry) -> Result<PlannedMeal, StoreError>;
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait RefreshStore: Send + Sync {
    /// Stamps for all scopes, in [`ladle_core::refresh::ALL_SCOPES`] order.
    async fn list(&self) -> Result<Vec<RefreshStamp>, StoreError>;
    /// Bump the scope's timestamp to now.
    async fn touch(&self, scope: RefreshScope) -> Result<(), StoreError>;
}

/// Bundle of store handles handed to the API layer.
///
/// Cheaply cloneable; the trait objects make the API testable against
/// in-memory fakes and keep sqlx types out of handler signatures.
#[derive(Clone)]
pub struct Stores {
    pub recipes: Arc<dyn RecipeStore>,
    pub users: Arc<dyn UserStore>,
    pub groups: Arc<dyn UserGroupStore>,
    pub meal_plan: Arc<dyn MealPlanStore>,
    pub refresh: Arc<dyn RefreshStore>,
}

impl Stores {
    /// Wire all stores to their Postgres adapters over a shared pool.
    pub fn postgres(pool: DbPool) -> Self {
        Self {
            recipes: Arc::new(PgRecipeStore::new(pool.clone())),
            users: Arc::new(PgUserStore::new(pool.clone())),
            groups: Arc::new(PgUserGroupStore::new(pool.clone())),
            meal_plan: Arc::new(PgMealPlanStore::new(pool.clone())),
            refresh: Arc::new(PgRefreshStore::new(pool)),
        }
    }
}
