//! Mappers for the recipe aggregate.

use crate::dto::{ImageDto, IngredientDto, InstructionDto, OptionDto, RecipeDto};
use crate::error::CoreError;
use crate::recipe::{Image, Ingredient, Instruction, Recipe};

use super::reconcile::reconcile;

// ---------------------------------------------------------------------------
// Leaf mappers
// ---------------------------------------------------------------------------

/// Maps [`Instruction`] entities to [`InstructionDto`] and back.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstructionMapper;

impl InstructionMapper {
    pub fn entity_to_dto(&self, entity: &Instruction) -> InstructionDto {
        InstructionDto {
            id: entity.id,
            instruction: entity.instruction.clone(),
        }
    }

    /// Update `existing` in place when given (identity preserved),
    /// otherwise build a new entity carrying the DTO's id verbatim --
    /// an id is copied, never invented.
    pub fn dto_to_entity(
        &self,
        dto: &InstructionDto,
        existing: Option<Instruction>,
    ) -> Instruction {
        match existing {
            Some(mut entity) => {
                entity.instruction = dto.instruction.clone();
                entity
            }
            None => Instruction {
                id: dto.id,
                instruction: dto.instruction.clone(),
            },
        }
    }
}

/// Maps [`Ingredient`] entities to [`IngredientDto`] and back.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngredientMapper;

impl IngredientMapper {
    pub fn entity_to_dto(&self, entity: &Ingredient) -> IngredientDto {
        IngredientDto {
            id: entity.id,
            name: entity.name.clone(),
            amount: entity.amount,
            unit: entity.unit.clone(),
        }
    }

    pub fn dto_to_entity(&self, dto: &IngredientDto, existing: Option<Ingredient>) -> Ingredient {
        match existing {
            Some(mut entity) => {
                entity.name = dto.name.clone();
                entity.amount = dto.amount;
                entity.unit = dto.unit.clone();
                entity
            }
            None => Ingredient {
                id: dto.id,
                name: dto.name.clone(),
                amount: dto.amount,
                unit: dto.unit.clone(),
            },
        }
    }
}

/// Maps [`Image`] entities to [`ImageDto`] and back.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageMapper;

impl ImageMapper {
    pub fn entity_to_dto(&self, entity: &Image) -> ImageDto {
        ImageDto {
            id: entity.id,
            path: entity.path.clone(),
        }
    }

    pub fn dto_to_entity(&self, dto: &ImageDto, existing: Option<Image>) -> Image {
        match existing {
            Some(mut entity) => {
                entity.path = dto.path.clone();
                entity
            }
            None => Image {
                id: dto.id,
                path: dto.path.clone(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// RecipeMapper
// ---------------------------------------------------------------------------

/// Maps the [`Recipe`] aggregate, delegating child collections to the
/// constructor-supplied leaf mappers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeMapper {
    instructions: InstructionMapper,
    ingredients: IngredientMapper,
    images: ImageMapper,
}

impl RecipeMapper {
    pub fn new(
        instructions: InstructionMapper,
        ingredients: IngredientMapper,
        images: ImageMapper,
    ) -> Self {
        Self {
            instructions,
            ingredients,
            images,
        }
    }

    /// Build the outbound DTO, copying scalars verbatim and delegating
    /// children element-wise in source order. The computed `option`
    /// summary is filled here -- downstream layers include it verbatim.
    pub fn entity_to_dto(&self, entity: &Recipe) -> RecipeDto {
        RecipeDto {
            id: entity.id,
            title: entity.title.clone(),
            portion_size: entity.portion_size,
            instructions: entity
                .instructions
                .iter()
                .map(|i| self.instructions.entity_to_dto(i))
                .collect(),
            ingredients: entity
                .ingredients
                .iter()
                .map(|i| self.ingredients.entity_to_dto(i))
                .collect(),
            image: entity.image.as_ref().map(|i| self.images.entity_to_dto(i)),
            option: Some(OptionDto {
                id: entity.id,
                label: entity.title.clone(),
            }),
        }
    }

    /// Map a DTO onto an entity.
    ///
    /// With `existing`, the entity is updated in place and keeps its
    /// identity; child collections are reconciled by id, so children the
    /// DTO no longer lists are removed. Without `existing`, a new entity
    /// is built. The DTO's `option` field is ignored -- it is derived
    /// state, not input.
    pub fn dto_to_entity(
        &self,
        dto: &RecipeDto,
        existing: Option<Recipe>,
    ) -> Result<Recipe, CoreError> {
        let Some(mut entity) = existing else {
            // Create path: no target collection to diff against, so children
            // map directly. Ids (if any) are copied from the DTO verbatim.
            return Ok(Recipe {
                id: dto.id,
                title: dto.title.clone(),
                portion_size: dto.portion_size,
                instructions: dto
                    .instructions
                    .iter()
                    .map(|d| self.instructions.dto_to_entity(d, None))
                    .collect(),
                ingredients: dto
                    .ingredients
                    .iter()
                    .map(|d| self.ingredients.dto_to_entity(d, None))
                    .collect(),
                image: dto.image.as_ref().map(|d| self.images.dto_to_entity(d, None)),
            });
        };

        entity.title = dto.title.clone();
        entity.portion_size = dto.portion_size;

        entity.instructions = reconcile(
            std::mem::take(&mut entity.instructions),
            &dto.instructions,
            "instruction",
            |e| e.id,
            |d| d.id,
            |d, e| self.instructions.dto_to_entity(d, e),
        )?;

        entity.ingredients = reconcile(
            std::mem::take(&mut entity.ingredients),
            &dto.ingredients,
            "ingredient",
            |e| e.id,
            |d| d.id,
            |d, e| self.ingredients.dto_to_entity(d, e),
        )?;

        // The image is a single optional child: same diff with arity one.
        entity.image = match &dto.image {
            Some(image_dto) => {
                let current = entity.image.take();
                match (image_dto.id, current) {
                    (Some(id), Some(image)) if image.id == Some(id) => {
                        Some(self.images.dto_to_entity(image_dto, Some(image)))
                    }
                    (Some(id), _) => {
                        return Err(CoreError::Validation(format!(
                            "Unknown image id {id}: not attached to this recipe"
                        )));
                    }
                    (None, _) => Some(self.images.dto_to_entity(image_dto, None)),
                }
            }
            None => None,
        };

        Ok(entity)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
