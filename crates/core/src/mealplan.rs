//! Meal plan entities.
//!
//! A meal plan is a set of entries, each placing one recipe on one calendar
//! day with an optional portion override (defaulting to the recipe's own
//! portion size at serving time).

use crate::error::CoreError;
use crate::types::{Day, DbId};

/// One planned meal: a recipe scheduled on a day.
#[derive(Debug, Clone, PartialEq)]
pub struct MealPlanEntry {
    pub id: Option<DbId>,
    pub day: Day,
    pub recipe_id: DbId,
    /// Overrides the recipe's portion size for this meal when set.
    pub portions: Option<i32>,
}

/// Validate a day range query (`from` must not be after `to`).
pub fn validate_day_range(from: Day, to: Day) -> Result<(), CoreError> {
    if from > to {
        return Err(CoreError::Validation(
            "Range start must not be after range end".into(),
        ));
    }
    Ok(())
}
