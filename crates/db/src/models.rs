//! Row structs and aggregate assembly.
//!
//! Covers the tables:
//! - `recipes`, `instructions`, `ingredients`, `images` -- the recipe aggregate
//! - `users`, `user_groups` -- accounts
//! - `meal_plan_entries` -- the meal plan (joined with recipe titles)
//! - `refresh_timestamps` -- per-scope change markers
//!
//! Child rows carry an explicit `position` column; queries order by it, and
//! assembly assumes rows arrive pre-sorted.

use sqlx::FromRow;

use ladle_core::account::{User, UserGroup};
use ladle_core::mealplan::MealPlanEntry;
use ladle_core::recipe::{Image, Ingredient, Instruction, Recipe};
use ladle_core::types::{Day, DbId, Timestamp};

use crate::store::PlannedMeal;

// ---------------------------------------------------------------------------
// Recipe aggregate rows
// ---------------------------------------------------------------------------

/// A row from the `recipes` table.
#[derive(Debug, Clone, FromRow)]
pub struct RecipeRow {
    pub id: DbId,
    pub title: String,
    pub portion_size: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `instructions` table.
#[derive(Debug, Clone, FromRow)]
pub struct InstructionRow {
    pub id: DbId,
    pub recipe_id: DbId,
    pub position: i32,
    pub instruction: String,
}

/// A row from the `ingredients` table.
#[derive(Debug, Clone, FromRow)]
pub struct IngredientRow {
    pub id: DbId,
    pub recipe_id: DbId,
    pub position: i32,
    pub name: String,
    pub amount: Option<f64>,
    pub unit: Option<String>,
}

/// A row from the `images` table (at most one per recipe).
#[derive(Debug, Clone, FromRow)]
pub struct ImageRow {
    pub id: DbId,
    pub recipe_id: DbId,
    pub path: String,
}

/// Assemble a [`Recipe`] aggregate from its rows. Child rows must already
/// be sorted by `position`.
pub fn assemble_recipe(
    row: RecipeRow,
    instructions: Vec<InstructionRow>,
    ingredients: Vec<IngredientRow>,
    image: Option<ImageRow>,
) -> Recipe {
    Recipe {
        id: Some(row.id),
        title: row.title,
        portion_size: row.portion_size,
        instructions: instructions
            .into_iter()
            .map(|r| Instruction {
                id: Some(r.id),
                instruction: r.instruction,
            })
            .collect(),
        ingredients: ingredients
            .into_iter()
            .map(|r| Ingredient {
                id: Some(r.id),
                name: r.name,
                amount: r.amount,
                unit: r.unit,
            })
            .collect(),
        image: image.map(|r| Image {
            id: Some(r.id),
            path: r.path,
        }),
    }
}

// ---------------------------------------------------------------------------
// Account rows
// ---------------------------------------------------------------------------

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: DbId,
    pub username: String,
    pub name: String,
    pub group_id: Option<DbId>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: Some(row.id),
            username: row.username,
            name: row.name,
            group_id: row.group_id,
        }
    }
}

/// A row from the `user_groups` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserGroupRow {
    pub id: DbId,
    pub name: String,
}

impl From<UserGroupRow> for UserGroup {
    fn from(row: UserGroupRow) -> Self {
        UserGroup {
            id: Some(row.id),
            name: row.name,
        }
    }
}

// ---------------------------------------------------------------------------
// Meal plan rows
// ---------------------------------------------------------------------------

/// A `meal_plan_entries` row joined with the recipe title.
#[derive(Debug, Clone, FromRow)]
pub struct MealPlanRow {
    pub id: DbId,
    pub day: Day,
    pub recipe_id: DbId,
    pub portions: Option<i32>,
    pub recipe_title: String,
}

impl From<MealPlanRow> for PlannedMeal {
    fn from(row: MealPlanRow) -> Self {
        PlannedMeal {
            entry: MealPlanEntry {
                id: Some(row.id),
                day: row.day,
                recipe_id: row.recipe_id,
                portions: row.portions,
            },
            recipe_title: row.recipe_title,
        }
    }
}

// ---------------------------------------------------------------------------
// Refresh rows
// ---------------------------------------------------------------------------

/// A row from the `refresh_timestamps` table.
#[derive(Debug, Clone, FromRow)]
pub struct RefreshRow {
    pub scope: String,
    pub refreshed_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
