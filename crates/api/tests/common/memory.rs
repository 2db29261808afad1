//! In-memory store implementations backing the integration tests.
//!
//! Behave like the Postgres adapters for everything the handlers rely on:
//! id assignment on save (children included), `Missing` on updates of
//! vanished rows, title joins for planned meals, and scope touching.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use ladle_core::account::{User, UserGroup};
use ladle_core::mealplan::MealPlanEntry;
use ladle_core::recipe::Recipe;
use ladle_core::refresh::{RefreshScope, RefreshStamp, ALL_SCOPES};
use ladle_core::types::{Day, DbId, Timestamp};
use ladle_db::error::StoreError;
use ladle_db::store::{
    MealPlanStore, PlannedMeal, RecipeStore, RefreshStore, Stores, UserGroupStore, UserStore,
};

/// Rows keyed by id plus a monotonic id allocator.
struct Table<T> {
    rows: HashMap<DbId, T>,
    next_id: DbId,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            next_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn allocate(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }
}

// ---------------------------------------------------------------------------
// Recipes
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MemoryRecipeStore {
    inner: Mutex<Table<Recipe>>,
}

#[async_trait]
impl RecipeStore for MemoryRecipeStore {
    async fn find(&self, id: DbId) -> Result<Option<Recipe>, StoreError> {
        Ok(self.inner.lock().unwrap().rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Recipe>, StoreError> {
        let mut recipes: Vec<Recipe> =
            self.inner.lock().unwrap().rows.values().cloned().collect();
        recipes.sort_by(|a, b| (&a.title, a.id).cmp(&(&b.title, b.id)));
        Ok(recipes)
    }

    async fn list_options(&self) -> Result<Vec<(DbId, String)>, StoreError> {
        let recipes = self.list().await?;
        Ok(recipes
            .into_iter()
            .map(|r| (r.id.unwrap(), r.title))
            .collect())
    }

    async fn save(&self, mut recipe: Recipe) -> Result<Recipe, StoreError> {
        let mut table = self.inner.lock().unwrap();
        let id = match recipe.id {
            Some(id) => {
                if !table.rows.contains_key(&id) {
                    return Err(StoreError::Missing {
                        entity: "Recipe",
                        id,
                    });
                }
                id
            }
            None => table.allocate(),
        };
        recipe.id = Some(id);
        for child in &mut recipe.instructions {
            if child.id.is_none() {
                child.id = Some(table.allocate());
            }
        }
        for child in &mut recipe.ingredients {
            if child.id.is_none() {
                child.id = Some(table.allocate());
            }
        }
        if let Some(image) = &mut recipe.image {
            if image.id.is_none() {
                image.id = Some(table.allocate());
            }
        }
        table.rows.insert(id, recipe.clone());
        Ok(recipe)
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(self.inner.lock().unwrap().rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Users & groups
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MemoryUserStore {
    inner: Mutex<Table<User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find(&self, id: DbId) -> Result<Option<User>, StoreError> {
        Ok(self.inner.lock().unwrap().rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let mut users: Vec<User> = self.inner.lock().unwrap().rows.values().cloned().collect();
        users.sort_by(|a, b| (&a.username, a.id).cmp(&(&b.username, b.id)));
        Ok(users)
    }

    async fn save(&self, mut user: User) -> Result<User, StoreError> {
        let mut table = self.inner.lock().unwrap();
        let id = match user.id {
            Some(id) => {
                if !table.rows.contains_key(&id) {
                    return Err(StoreError::Missing { entity: "User", id });
                }
                id
            }
            None => table.allocate(),
        };
        user.id = Some(id);
        table.rows.insert(id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(self.inner.lock().unwrap().rows.remove(&id).is_some())
    }
}

#[derive(Default)]
pub struct MemoryUserGroupStore {
    inner: Mutex<Table<UserGroup>>,
}

#[async_trait]
impl UserGroupStore for MemoryUserGroupStore {
    async fn find(&self, id: DbId) -> Result<Option<UserGroup>, StoreError> {
        Ok(self.inner.lock().unwrap().rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<UserGroup>, StoreError> {
        let mut groups: Vec<UserGroup> =
            self.inner.lock().unwrap().rows.values().cloned().collect();
        groups.sort_by(|a, b| (&a.name, a.id).cmp(&(&b.name, b.id)));
        Ok(groups)
    }

    async fn save(&self, mut group: UserGroup) -> Result<UserGroup, StoreError> {
        let mut table = self.inner.lock().unwrap();
        let id = match group.id {
            Some(id) => {
                if !table.rows.contains_key(&id) {
                    return Err(StoreError::Missing {
                        entity: "UserGroup",
                        id,
                    });
                }
                id
            }
            None => table.allocate(),
        };
        group.id = Some(id);
        table.rows.insert(id, group.clone());
        Ok(group)
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(self.inner.lock().unwrap().rows.remove(&id).is_some())
    }
}

// ---------------------------------------------------------------------------
// Meal plan
// ---------------------------------------------------------------------------

pub struct MemoryMealPlanStore {
    inner: Mutex<Table<MealPlanEntry>>,
    recipes: Arc<MemoryRecipeStore>,
}

impl MemoryMealPlanStore {
    pub fn new(recipes: Arc<MemoryRecipeStore>) -> Self {
        Self {
            inner: Mutex::default(),
            recipes,
        }
    }

    async fn join_title(&self, entry: MealPlanEntry) -> Result<PlannedMeal, StoreError> {
        let recipe = self.recipes.find(entry.recipe_id).await?;
        let recipe_title = recipe
            .map(|r| r.title)
            .ok_or_else(|| StoreError::Corrupt(format!("No recipe {}", entry.recipe_id)))?;
        Ok(PlannedMeal {
            entry,
            recipe_title,
        })
    }
}

#[async_trait]
impl MealPlanStore for MemoryMealPlanStore {
    async fn find(&self, id: DbId) -> Result<Option<PlannedMeal>, StoreError> {
        let entry = self.inner.lock().unwrap().rows.get(&id).cloned();
        match entry {
            Some(entry) => Ok(Some(self.join_title(entry).await?)),
            None => Ok(None),
        }
    }

    async fn list_range(&self, from: Day, to: Day) -> Result<Vec<PlannedMeal>, StoreError> {
        let mut entries: Vec<MealPlanEntry> = self
            .inner
            .lock()
            .unwrap()
            .rows
            .values()
            .filter(|e| e.day >= from && e.day <= to)
            .cloned()
            .collect();
        entries.sort_by_key(|e| (e.day, e.id));

        let mut meals = Vec::with_capacity(entries.len());
        for entry in entries {
            meals.push(self.join_title(entry).await?);
        }
        Ok(meals)
    }

    async fn save(&self, mut entry: MealPlanEntry) -> Result<PlannedMeal, StoreError> {
        {
            let mut table = self.inner.lock().unwrap();
            let id = match entry.id {
                Some(id) => {
                    if !table.rows.contains_key(&id) {
                        return Err(StoreError::Missing {
                            entity: "MealPlanEntry",
                            id,
                        });
                    }
                    id
                }
                None => table.allocate(),
            };
            entry.id = Some(id);
            table.rows.insert(id, entry.clone());
        }
        self.join_title(entry).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(self.inner.lock().unwrap().rows.remove(&id).is_some())
    }
}

// ---------------------------------------------------------------------------
// Refresh stamps
// ---------------------------------------------------------------------------

pub struct MemoryRefreshStore {
    stamps: Mutex<HashMap<RefreshScope, Timestamp>>,
}

impl MemoryRefreshStore {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            stamps: Mutex::new(ALL_SCOPES.iter().map(|s| (*s, now)).collect()),
        }
    }
}

#[async_trait]
impl RefreshStore for MemoryRefreshStore {
    async fn list(&self) -> Result<Vec<RefreshStamp>, StoreError> {
        let stamps = self.stamps.lock().unwrap();
        Ok(ALL_SCOPES
            .iter()
            .filter_map(|scope| {
                stamps.get(scope).map(|ts| RefreshStamp {
                    scope: *scope,
                    refreshed_at: *ts,
                })
            })
            .collect())
    }

    async fn touch(&self, scope: RefreshScope) -> Result<(), StoreError> {
        self.stamps.lock().unwrap().insert(scope, Utc::now());
        Ok(())
    }
}

/// Fresh in-memory stores for one test.
pub fn memory_stores() -> Stores {
    let recipes = Arc::new(MemoryRecipeStore::default());
    let recipes_dyn: Arc<dyn RecipeStore> = recipes.clone();
    Stores {
        recipes: recipes_dyn,
        users: Arc::new(MemoryUserStore::default()),
        groups: Arc::new(MemoryUserGroupStore::default()),
        meal_plan: Arc::new(MemoryMealPlanStore::new(recipes)),
        refresh: Arc::new(MemoryRefreshStore::new()),
    }
}
