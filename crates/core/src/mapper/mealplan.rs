//! Mapper for meal plan entries.

use crate::dto::{MealPlanEntryDto, OptionDto};
use crate::mealplan::MealPlanEntry;

/// Maps [`MealPlanEntry`] entities to [`MealPlanEntryDto`] and back.
#[derive(Debug, Clone, Copy, Default)]
pub struct MealPlanMapper;

impl MealPlanMapper {
    /// Build the outbound DTO. The `recipe` summary is resolved from the
    /// planned recipe's title when the caller has it (list/detail reads);
    /// it stays `None` otherwise.
    pub fn entity_to_dto(
        &self,
        entity: &MealPlanEntry,
        recipe_title: Option<&str>,
    ) -> MealPlanEntryDto {
        MealPlanEntryDto {
            id: entity.id,
            day: entity.day,
            recipe_id: entity.recipe_id,
            portions: entity.portions,
            recipe: recipe_title.map(|title| OptionDto {
                id: Some(entity.recipe_id),
                label: title.to_string(),
            }),
        }
    }

    /// Map a DTO onto an entity. The DTO's `recipe` summary is derived
    /// state and is ignored on input.
    pub fn dto_to_entity(
        &self,
        dto: &MealPlanEntryDto,
        existing: Option<MealPlanEntry>,
    ) -> MealPlanEntry {
        match existing {
            Some(mut entity) => {
                entity.day = dto.day;
                entity.recipe_id = dto.recipe_id;
                entity.portions = dto.portions;
                entity
            }
            None => MealPlanEntry {
                id: dto.id,
                day: dto.day,
                recipe_id: dto.recipe_id,
                portions: dto.portions,
            },
        }
    }
}
