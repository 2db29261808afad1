//! Repository for the `meal_plan_entries` table.
//!
//! All reads join the recipe title so the API can render the `recipe`
//! option summary without a second query.

use async_trait::async_trait;

use ladle_core::mealplan::MealPlanEntry;
use ladle_core::types::{Day, DbId};

use crate::error::StoreError;
use crate::models::MealPlanRow;
use crate::store::{MealPlanStore, PlannedMeal};
use crate::DbPool;

/// Joined column list for meal plan queries.
const COLUMNS: &str = "\
    m.id, m.day, m.recipe_id, m.portions, r.title AS recipe_title";

/// sqlx-backed [`MealPlanStore`].
pub struct PgMealPlanStore {
    pool: DbPool,
}

impl PgMealPlanStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn find_joined(&self, id: DbId) -> Result<Option<PlannedMeal>, StoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM meal_plan_entries m \
             JOIN recipes r ON r.id = m.recipe_id WHERE m.id = $1"
        );
        let row = sqlx::query_as::<_, MealPlanRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(PlannedMeal::from))
    }
}

#[async_trait]
impl MealPlanStore for PgMealPlanStore {
    async fn find(&self, id: DbId) -> Result<Option<PlannedMeal>, StoreError> {
        self.find_joined(id).await
    }

    async fn list_range(&self, from: Day, to: Day) -> Result<Vec<PlannedMeal>, StoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM meal_plan_entries m \
             JOIN recipes r ON r.id = m.recipe_id \
             WHERE m.day BETWEEN $1 AND $2 ORDER BY m.day, m.id"
        );
        let rows = sqlx::query_as::<_, MealPlanRow>(&query)
            .bind(from)
            .bind(to)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(PlannedMeal::from).collect())
    }

    async fn save(&self, entry: MealPlanEntry) -> Result<PlannedMeal, StoreError> {
        let id = match entry.id {
            Some(id) => {
                let updated = sqlx::query_scalar::<_, DbId>(
                    "UPDATE meal_plan_entries SET day = $1, recipe_id = $2, portions = $3 \
                     WHERE id = $4 RETURNING id",
                )
                .bind(entry.day)
                .bind(entry.recipe_id)
                .bind(entry.portions)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
                updated.ok_or(StoreError::Missing {
                    entity: "MealPlanEntry",
                    id,
                })?
            }
            None => {
                sqlx::query_scalar::<_, DbId>(
                    "INSERT INTO meal_plan_entries (day, recipe_id, portions) \
                     VALUES ($1, $2, $3) RETURNING id",
                )
                .bind(entry.day)
                .bind(entry.recipe_id)
                .bind(entry.portions)
                .fetch_one(&self.pool)
                .await?
            }
        };

        self.find_joined(id).await?.ok_or(StoreError::Missing {
            entity: "MealPlanEntry",
            id,
        })
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM meal_plan_entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
