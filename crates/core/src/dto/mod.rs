//! Transfer objects exchanged with API clients.
//!
//! Inbound, DTOs are bound from JSON by serde with `deny_unknown_fields`
//! (the struct declaration *is* the binding schema -- no reflection) and
//! then checked against `validator` constraints. Outbound, each DTO
//! implements [`crate::serializer::Dto`], listing its wire fields in
//! declaration order so the serialized key order is part of the type.

mod account;
mod mealplan;
mod recipe;
mod refresh;

pub use account::{UserDto, UserGroupDto};
pub use mealplan::MealPlanEntryDto;
pub use recipe::{ImageDto, IngredientDto, InstructionDto, OptionDto, RecipeDto};
pub use refresh::RefreshStampDto;

use validator::Validate;

use crate::error::CoreError;

/// Run `validator` constraints on an inbound DTO, flattening the error
/// set into a single human-readable message.
pub fn validate_dto<T: Validate>(dto: &T) -> Result<(), CoreError> {
    dto.validate()
        .map_err(|errors| CoreError::Validation(errors.to_string().replace('\n', "; ")))
}
