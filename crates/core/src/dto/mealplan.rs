//! Transfer objects for meal plan entries.

use serde::Deserialize;
use validator::Validate;

use crate::dto::OptionDto;
use crate::serializer::{Dto, WireValue};
use crate::types::{Day, DbId};

/// Wire mirror of [`crate::mealplan::MealPlanEntry`].
///
/// Wire field order: `id`, `day`, `recipeId`, `portions`, `recipe`.
/// The `recipe` field is a read-only `{ id, label }` summary resolved from
/// the planned recipe's title; it is accepted but ignored on input.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MealPlanEntryDto {
    #[serde(default)]
    pub id: Option<DbId>,
    pub day: Day,
    pub recipe_id: DbId,
    #[serde(default)]
    #[validate(range(min = 1, max = 100, message = "portions must be between 1 and 100"))]
    pub portions: Option<i32>,
    #[serde(default)]
    pub recipe: Option<OptionDto>,
}

impl Dto for MealPlanEntryDto {
    fn wire_fields(&self) -> Vec<(&'static str, WireValue)> {
        vec![
            ("id", WireValue::opt(self.id)),
            ("day", self.day.to_string().into()),
            ("recipeId", self.recipe_id.into()),
            ("portions", WireValue::opt(self.portions)),
            ("recipe", WireValue::nested(self.recipe.as_ref())),
        ]
    }
}
