//! Recipe aggregate entities.
//!
//! A [`Recipe`] owns an *ordered* list of [`Instruction`]s (step order is
//! part of the recipe), a list of [`Ingredient`]s (order preserved but not
//! meaningful), and at most one [`Image`]. Entities have no identity until
//! the store persists them, hence `id: Option<DbId>`. Structural input
//! constraints live on the DTOs in [`crate::dto`].

use crate::types::DbId;

/// A single preparation step. Step order is carried by the position in the
/// parent recipe's `instructions` list, not by the entity itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub id: Option<DbId>,
    pub instruction: String,
}

impl Instruction {
    /// Build an unsaved instruction.
    pub fn new(instruction: impl Into<String>) -> Self {
        Self {
            id: None,
            instruction: instruction.into(),
        }
    }
}

/// An ingredient line: a name with an optional quantity and unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: Option<DbId>,
    pub name: String,
    pub amount: Option<f64>,
    pub unit: Option<String>,
}

impl Ingredient {
    /// Build an unsaved ingredient with no quantity.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            amount: None,
            unit: None,
        }
    }
}

/// A stored recipe photo, referenced by its storage path.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub id: Option<DbId>,
    pub path: String,
}

/// The recipe aggregate root.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: Option<DbId>,
    pub title: String,
    pub portion_size: i32,
    pub instructions: Vec<Instruction>,
    pub ingredients: Vec<Ingredient>,
    pub image: Option<Image>,
}

impl Recipe {
    /// Build an unsaved recipe with empty child collections.
    pub fn new(title: impl Into<String>, portion_size: i32) -> Self {
        Self {
            id: None,
            title: title.into(),
            portion_size,
            instructions: Vec::new(),
            ingredients: Vec::new(),
            image: None,
        }
    }
}
