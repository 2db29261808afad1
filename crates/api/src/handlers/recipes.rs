//! Handlers for recipe CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use ladle_core::dto::{validate_dto, OptionDto, RecipeDto};
use ladle_core::error::CoreError;
use ladle_core::mapper::RecipeMapper;
use ladle_core::refresh::RefreshScope;
use ladle_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::response::Wire;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /api/v1/recipes
///
/// List all recipes as full DTOs, ordered by title.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mapper = RecipeMapper::default();
    let recipes = state.stores.recipes.list().await?;
    let dtos: Vec<RecipeDto> = recipes.iter().map(|r| mapper.entity_to_dto(r)).collect();
    Ok(Wire::list(&dtos))
}

/// GET /api/v1/recipes/options
///
/// `{ id, label }` summaries for select widgets, ordered by title.
pub async fn options(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let options = state.stores.recipes.list_options().await?;
    let dtos: Vec<OptionDto> = options
        .into_iter()
        .map(|(id, label)| OptionDto {
            id: Some(id),
            label,
        })
        .collect();
    Ok(Wire::list(&dtos))
}

/// GET /api/v1/recipes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let recipe = state
        .stores
        .recipes
        .find(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id,
        }))?;
    Ok(Wire::dto(&RecipeMapper::default().entity_to_dto(&recipe)))
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// POST /api/v1/recipes
///
/// Create a recipe from a DTO without identity anywhere in the graph.
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<RecipeDto>,
) -> AppResult<impl IntoResponse> {
    validate_dto(&dto)?;
    reject_ids_on_create(&dto)?;

    let mapper = RecipeMapper::default();
    let entity = mapper.dto_to_entity(&dto, None)?;
    let saved = state.stores.recipes.save(entity).await?;
    state.stores.refresh.touch(RefreshScope::Recipes).await?;

    Ok((StatusCode::CREATED, Wire::dto(&mapper.entity_to_dto(&saved))))
}

/// PUT /api/v1/recipes/{id}
///
/// Update an existing recipe in place. Child collections are reconciled
/// against the DTO's lists: children the DTO dropped are deleted.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(dto): Json<RecipeDto>,
) -> AppResult<impl IntoResponse> {
    validate_dto(&dto)?;

    let existing = state
        .stores
        .recipes
        .find(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id,
        }))?;

    let mapper = RecipeMapper::default();
    let entity = mapper.dto_to_entity(&dto, Some(existing))?;
    let saved = state.stores.recipes.save(entity).await?;
    state.stores.refresh.touch(RefreshScope::Recipes).await?;

    Ok(Wire::dto(&mapper.entity_to_dto(&saved)))
}

/// DELETE /api/v1/recipes/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.stores.recipes.delete(id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id,
        }));
    }
    state.stores.refresh.touch(RefreshScope::Recipes).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// A create must not smuggle identities in: ids are assigned by the store.
fn reject_ids_on_create(dto: &RecipeDto) -> Result<(), AppError> {
    let has_child_id = dto.instructions.iter().any(|i| i.id.is_some())
        || dto.ingredients.iter().any(|i| i.id.is_some())
        || dto.image.as_ref().is_some_and(|i| i.id.is_some());
    if dto.id.is_some() || has_child_id {
        return Err(AppError::BadRequest(
            "A new recipe must not carry ids".into(),
        ));
    }
    Ok(())
}
