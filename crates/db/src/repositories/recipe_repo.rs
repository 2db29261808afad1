//! Repository for the recipe aggregate.
//!
//! The aggregate arrives already reconciled: children carrying an id are
//! kept (and updated), children without one are new, and any row whose id
//! the entity no longer lists is deleted. All writes for one save happen
//! in a single transaction; list positions are rewritten from the
//! entity's collection order on every save.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgConnection;

use ladle_core::recipe::{Image, Ingredient, Instruction, Recipe};
use ladle_core::types::DbId;

use crate::error::StoreError;
use crate::models::{assemble_recipe, ImageRow, IngredientRow, InstructionRow, RecipeRow};
use crate::store::RecipeStore;
use crate::DbPool;

/// Column list for `recipes` queries.
const RECIPE_COLUMNS: &str = "id, title, portion_size, created_at, updated_at";

/// Column list for `instructions` queries.
const INSTRUCTION_COLUMNS: &str = "id, recipe_id, position, instruction";

/// Column list for `ingredients` queries.
const INGREDIENT_COLUMNS: &str = "id, recipe_id, position, name, amount, unit";

/// Column list for `images` queries.
const IMAGE_COLUMNS: &str = "id, recipe_id, path";

/// sqlx-backed [`RecipeStore`].
pub struct PgRecipeStore {
    pool: DbPool,
}

impl PgRecipeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Load children for a batch of recipe rows and assemble aggregates,
    /// preserving the order of `rows`.
    async fn assemble_all(&self, rows: Vec<RecipeRow>) -> Result<Vec<Recipe>, StoreError> {
        let ids: Vec<DbId> = rows.iter().map(|r| r.id).collect();

        let query = format!(
            "SELECT {INSTRUCTION_COLUMNS} FROM instructions \
             WHERE recipe_id = ANY($1) ORDER BY recipe_id, position"
        );
        let instructions = sqlx::query_as::<_, InstructionRow>(&query)
            .bind(&ids)
            .fetch_all(&self.pool)
            .await?;

        let query = format!(
            "SELECT {INGREDIENT_COLUMNS} FROM ingredients \
             WHERE recipe_id = ANY($1) ORDER BY recipe_id, position"
        );
        let ingredients = sqlx::query_as::<_, IngredientRow>(&query)
            .bind(&ids)
            .fetch_all(&self.pool)
            .await?;

        let query = format!("SELECT {IMAGE_COLUMNS} FROM images WHERE recipe_id = ANY($1)");
        let images = sqlx::query_as::<_, ImageRow>(&query)
            .bind(&ids)
            .fetch_all(&self.pool)
            .await?;

        let mut instructions_by_recipe: HashMap<DbId, Vec<InstructionRow>> = HashMap::new();
        for row in instructions {
            instructions_by_recipe
                .entry(row.recipe_id)
                .or_default()
                .push(row);
        }
        let mut ingredients_by_recipe: HashMap<DbId, Vec<IngredientRow>> = HashMap::new();
        for row in ingredients {
            ingredients_by_recipe
                .entry(row.recipe_id)
                .or_default()
                .push(row);
        }
        let mut image_by_recipe: HashMap<DbId, ImageRow> = HashMap::new();
        for row in images {
            image_by_recipe.insert(row.recipe_id, row);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let id = row.id;
                assemble_recipe(
                    row,
                    instructions_by_recipe.remove(&id).unwrap_or_default(),
                    ingredients_by_recipe.remove(&id).unwrap_or_default(),
                    image_by_recipe.remove(&id),
                )
            })
            .collect())
    }
}

#[async_trait]
impl RecipeStore for PgRecipeStore {
    async fn find(&self, id: DbId) -> Result<Option<Recipe>, StoreError> {
        let query = format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = $1");
        let row = sqlx::query_as::<_, RecipeRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(self.assemble_all(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Recipe>, StoreError> {
        let query = format!("SELECT {RECIPE_COLUMNS} FROM recipes ORDER BY title, id");
        let rows = sqlx::query_as::<_, RecipeRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        self.assemble_all(rows).await
    }

    async fn list_options(&self) -> Result<Vec<(DbId, String)>, StoreError> {
        let rows = sqlx::query_as::<_, (DbId, String)>(
            "SELECT id, title FROM recipes ORDER BY title, id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn save(&self, recipe: Recipe) -> Result<Recipe, StoreError> {
        let mut tx = self.pool.begin().await?;

        let recipe_id = match recipe.id {
            Some(id) => {
                let updated = sqlx::query_scalar::<_, DbId>(
                    "UPDATE recipes SET title = $1, portion_size = $2, updated_at = NOW() \
                     WHERE id = $3 RETURNING id",
                )
                .bind(&recipe.title)
                .bind(recipe.portion_size)
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
                updated.ok_or(StoreError::Missing {
                    entity: "Recipe",
                    id,
                })?
            }
            None => {
                sqlx::query_scalar::<_, DbId>(
                    "INSERT INTO recipes (title, portion_size) VALUES ($1, $2) RETURNING id",
                )
                .bind(&recipe.title)
                .bind(recipe.portion_size)
                .fetch_one(&mut *tx)
                .await?
            }
        };

        sync_instructions(&mut *tx, recipe_id, &recipe.instructions).await?;
        sync_ingredients(&mut *tx, recipe_id, &recipe.ingredients).await?;
        sync_image(&mut *tx, recipe_id, recipe.image.as_ref()).await?;

        tx.commit().await?;

        tracing::debug!(recipe_id, "Recipe saved");

        self.find(recipe_id).await?.ok_or(StoreError::Missing {
            entity: "Recipe",
            id: recipe_id,
        })
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        // Children cascade via foreign keys.
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Make the `instructions` rows match the entity's collection.
async fn sync_instructions(
    tx: &mut PgConnection,
    recipe_id: DbId,
    children: &[Instruction],
) -> Result<(), StoreError> {
    let kept: Vec<DbId> = children.iter().filter_map(|c| c.id).collect();
    sqlx::query("DELETE FROM instructions WHERE recipe_id = $1 AND NOT (id = ANY($2))")
        .bind(recipe_id)
        .bind(&kept)
        .execute(&mut *tx)
        .await?;

    for (position, child) in children.iter().enumerate() {
        let position = position as i32;
        match child.id {
            Some(id) => {
                sqlx::query(
                    "UPDATE instructions SET position = $1, instruction = $2 \
                     WHERE id = $3 AND recipe_id = $4",
                )
                .bind(position)
                .bind(&child.instruction)
                .bind(id)
                .bind(recipe_id)
                .execute(&mut *tx)
                .await?;
            }
            None => {
                sqlx::query(
                    "INSERT INTO instructions (recipe_id, position, instruction) \
                     VALUES ($1, $2, $3)",
                )
                .bind(recipe_id)
                .bind(position)
                .bind(&child.instruction)
                .execute(&mut *tx)
                .await?;
            }
        }
    }
    Ok(())
}

/// Make the `ingredients` rows match the entity's collection.
async fn sync_ingredients(
    tx: &mut PgConnection,
    recipe_id: DbId,
    children: &[Ingredient],
) -> Result<(), StoreError> {
    let kept: Vec<DbId> = children.iter().filter_map(|c| c.id).collect();
    sqlx::query("DELETE FROM ingredients WHERE recipe_id = $1 AND NOT (id = ANY($2))")
        .bind(recipe_id)
        .bind(&kept)
        .execute(&mut *tx)
        .await?;

    for (position, child) in children.iter().enumerate() {
        let position = position as i32;
        match child.id {
            Some(id) => {
                sqlx::query(
                    "UPDATE ingredients SET position = $1, name = $2, amount = $3, unit = $4 \
                     WHERE id = $5 AND recipe_id = $6",
                )
                .bind(position)
                .bind(&child.name)
                .bind(child.amount)
                .bind(&child.unit)
                .bind(id)
                .bind(recipe_id)
                .execute(&mut *tx)
                .await?;
            }
            None => {
                sqlx::query(
                    "INSERT INTO ingredients (recipe_id, position, name, amount, unit) \
                     VALUES ($1, $2, $3, $4, $5)",
                )
                .bind(recipe_id)
                .bind(position)
                .bind(&child.name)
                .bind(child.amount)
                .bind(&child.unit)
                .execute(&mut *tx)
                .await?;
            }
        }
    }
    Ok(())
}

/// Make the `images` row (arity one) match the entity.
async fn sync_image(
    tx: &mut PgConnection,
    recipe_id: DbId,
    image: Option<&Image>,
) -> Result<(), StoreError> {
    match image {
        None => {
            sqlx::query("DELETE FROM images WHERE recipe_id = $1")
                .bind(recipe_id)
                .execute(&mut *tx)
                .await?;
        }
        Some(Image { id: Some(id), path }) => {
            sqlx::query("UPDATE images SET path = $1 WHERE id = $2 AND recipe_id = $3")
                .bind(path)
                .bind(id)
                .bind(recipe_id)
                .execute(&mut *tx)
                .await?;
        }
        Some(Image { id: None, path }) => {
            // Replace whatever was there with the fresh image.
            sqlx::query("DELETE FROM images WHERE recipe_id = $1")
                .bind(recipe_id)
                .execute(&mut *tx)
                .await?;
            sqlx::query("INSERT INTO images (recipe_id, path) VALUES ($1, $2)")
                .bind(recipe_id)
                .bind(path)
                .execute(&mut *tx)
                .await?;
        }
    }
    Ok(())
}
