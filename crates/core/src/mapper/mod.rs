//! Entity <-> DTO mappers.
//!
//! One mapper per entity type; a parent mapper holds its child mappers
//! (constructor-supplied) and delegates element-wise, never re-implementing
//! a child's conversion. Mappers carry no per-call state, so one instance
//! can serve concurrent requests.
//!
//! `entity_to_dto` copies scalars verbatim and never mutates its source.
//! `dto_to_entity` updates an existing entity in place when one is given
//! (the edit path, preserving identity) and otherwise builds a fresh
//! entity; child collections are reconciled by id (see [`reconcile`]).

mod account;
mod mealplan;
mod recipe;
mod reconcile;

pub use account::{UserGroupMapper, UserMapper};
pub use mealplan::MealPlanMapper;
pub use recipe::{ImageMapper, IngredientMapper, InstructionMapper, RecipeMapper};
pub use reconcile::reconcile;
