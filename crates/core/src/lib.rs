//! Ladle core domain library.
//!
//! Framework-independent building blocks shared by the persistence and API
//! layers: domain entities, transfer objects (DTOs), the entity <-> DTO
//! mappers, and the wire serializer that renders DTO graphs as ordered
//! JSON. Nothing in this crate performs I/O, so it can be used by the API
//! server, repository implementations, and any future CLI tooling alike.

pub mod account;
pub mod dto;
pub mod error;
pub mod mapper;
pub mod mealplan;
pub mod recipe;
pub mod refresh;
pub mod serializer;
pub mod types;
