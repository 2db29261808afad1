//! Request handlers, one module per resource.
//!
//! Handlers follow one shape: bind the DTO, validate it, run the mapper,
//! hand the entity to the store, touch the resource's refresh scope on
//! mutation, and render the result through the wire serializer.

pub mod groups;
pub mod mealplan;
pub mod recipes;
pub mod refresh;
pub mod users;
