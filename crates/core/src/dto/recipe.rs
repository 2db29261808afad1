//! Transfer objects for the recipe aggregate.

use serde::Deserialize;
use validator::Validate;

use crate::serializer::{Dto, WireValue};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// OptionDto
// ---------------------------------------------------------------------------

/// Summary form of an entity for select widgets: `{ id, label }`.
///
/// Computed once by the owning mapper and included verbatim by the
/// serializer, never re-derived downstream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OptionDto {
    pub id: Option<DbId>,
    pub label: String,
}

impl Dto for OptionDto {
    fn wire_fields(&self) -> Vec<(&'static str, WireValue)> {
        vec![
            ("id", WireValue::opt(self.id)),
            ("label", self.label.as_str().into()),
        ]
    }
}

// ---------------------------------------------------------------------------
// InstructionDto
// ---------------------------------------------------------------------------

/// Wire mirror of [`crate::recipe::Instruction`].
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InstructionDto {
    #[serde(default)]
    pub id: Option<DbId>,
    #[validate(length(min = 1, message = "instruction text must not be empty"))]
    pub instruction: String,
}

impl InstructionDto {
    /// Build a DTO without identity (create path).
    pub fn new(instruction: impl Into<String>) -> Self {
        Self {
            id: None,
            instruction: instruction.into(),
        }
    }
}

impl Dto for InstructionDto {
    fn wire_fields(&self) -> Vec<(&'static str, WireValue)> {
        vec![
            ("id", WireValue::opt(self.id)),
            ("instruction", self.instruction.as_str().into()),
        ]
    }
}

// ---------------------------------------------------------------------------
// IngredientDto
// ---------------------------------------------------------------------------

/// Wire mirror of [`crate::recipe::Ingredient`].
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IngredientDto {
    #[serde(default)]
    pub id: Option<DbId>,
    #[validate(length(min = 1, max = 120, message = "ingredient name must be 1-120 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "ingredient amount must not be negative"))]
    pub amount: Option<f64>,
    #[serde(default)]
    #[validate(length(max = 40, message = "unit must be at most 40 characters"))]
    pub unit: Option<String>,
}

impl Dto for IngredientDto {
    fn wire_fields(&self) -> Vec<(&'static str, WireValue)> {
        vec![
            ("id", WireValue::opt(self.id)),
            ("name", self.name.as_str().into()),
            ("amount", WireValue::opt(self.amount)),
            ("unit", WireValue::opt(self.unit.as_deref())),
        ]
    }
}

// ---------------------------------------------------------------------------
// ImageDto
// ---------------------------------------------------------------------------

/// Wire mirror of [`crate::recipe::Image`].
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ImageDto {
    #[serde(default)]
    pub id: Option<DbId>,
    #[validate(length(min = 1, message = "image path must not be empty"))]
    pub path: String,
}

impl Dto for ImageDto {
    fn wire_fields(&self) -> Vec<(&'static str, WireValue)> {
        vec![
            ("id", WireValue::opt(self.id)),
            ("path", self.path.as_str().into()),
        ]
    }
}

// ---------------------------------------------------------------------------
// RecipeDto
// ---------------------------------------------------------------------------

/// Wire mirror of the [`crate::recipe::Recipe`] aggregate.
///
/// Wire field order: `id`, `title`, `portionSize`, `instructions`,
/// `ingredients`, `image`, `option`. Clients consume this order
/// positionally; do not reorder fields.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecipeDto {
    #[serde(default)]
    pub id: Option<DbId>,
    #[validate(length(min = 1, max = 160, message = "title must be 1-160 characters"))]
    pub title: String,
    #[validate(range(min = 1, max = 100, message = "portion size must be between 1 and 100"))]
    pub portion_size: i32,
    #[serde(default)]
    #[validate(nested)]
    pub instructions: Vec<InstructionDto>,
    #[serde(default)]
    #[validate(nested)]
    pub ingredients: Vec<IngredientDto>,
    #[serde(default)]
    #[validate(nested)]
    pub image: Option<ImageDto>,
    /// Computed `{ id, label }` summary; accepted but ignored on input.
    #[serde(default)]
    pub option: Option<OptionDto>,
}

impl Dto for RecipeDto {
    fn wire_fields(&self) -> Vec<(&'static str, WireValue)> {
        vec![
            ("id", WireValue::opt(self.id)),
            ("title", self.title.as_str().into()),
            ("portionSize", self.portion_size.into()),
            ("instructions", WireValue::list(&self.instructions)),
            ("ingredients", WireValue::list(&self.ingredients)),
            ("image", WireValue::nested(self.image.as_ref())),
            ("option", WireValue::nested(self.option.as_ref())),
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
