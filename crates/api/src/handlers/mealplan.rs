//! Handlers for the meal plan.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use ladle_core::dto::{validate_dto, MealPlanEntryDto};
use ladle_core::error::CoreError;
use ladle_core::mapper::MealPlanMapper;
use ladle_core::mealplan::validate_day_range;
use ladle_core::refresh::RefreshScope;
use ladle_core::types::{Day, DbId};

use crate::error::{AppError, AppResult};
use crate::response::Wire;
use crate::state::AppState;

/// Query parameters for `GET /mealplan`.
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub from: Day,
    pub to: Day,
}

/// GET /api/v1/mealplan?from=YYYY-MM-DD&to=YYYY-MM-DD
///
/// Entries with `from <= day <= to`, ordered by day.
pub async fn list(
    State(state): State<AppState>,
    Query(range): Query<RangeQuery>,
) -> AppResult<impl IntoResponse> {
    validate_day_range(range.from, range.to)?;

    let mapper = MealPlanMapper::default();
    let meals = state.stores.meal_plan.list_range(range.from, range.to).await?;
    let dtos: Vec<MealPlanEntryDto> = meals
        .iter()
        .map(|m| mapper.entity_to_dto(&m.entry, Some(m.recipe_title.as_str())))
        .collect();
    Ok(Wire::list(&dtos))
}

/// GET /api/v1/mealplan/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let meal = state
        .stores
        .meal_plan
        .find(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MealPlanEntry",
            id,
        }))?;
    let mapper = MealPlanMapper::default();
    Ok(Wire::dto(
        &mapper.entity_to_dto(&meal.entry, Some(meal.recipe_title.as_str())),
    ))
}

/// POST /api/v1/mealplan
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<MealPlanEntryDto>,
) -> AppResult<impl IntoResponse> {
    validate_dto(&dto)?;
    if dto.id.is_some() {
        return Err(AppError::BadRequest(
            "A new meal plan entry must not carry an id".into(),
        ));
    }
    ensure_recipe_exists(&state, dto.recipe_id).await?;

    let mapper = MealPlanMapper::default();
    let entity = mapper.dto_to_entity(&dto, None);
    let saved = state.stores.meal_plan.save(entity).await?;
    state.stores.refresh.touch(RefreshScope::MealPlan).await?;

    Ok((
        StatusCode::CREATED,
        Wire::dto(&mapper.entity_to_dto(&saved.entry, Some(saved.recipe_title.as_str()))),
    ))
}

/// PUT /api/v1/mealplan/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(dto): Json<MealPlanEntryDto>,
) -> AppResult<impl IntoResponse> {
    validate_dto(&dto)?;

    let existing = state
        .stores
        .meal_plan
        .find(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MealPlanEntry",
            id,
        }))?;
    ensure_recipe_exists(&state, dto.recipe_id).await?;

    let mapper = MealPlanMapper::default();
    let entity = mapper.dto_to_entity(&dto, Some(existing.entry));
    let saved = state.stores.meal_plan.save(entity).await?;
    state.stores.refresh.touch(RefreshScope::MealPlan).await?;

    Ok(Wire::dto(
        &mapper.entity_to_dto(&saved.entry, Some(saved.recipe_title.as_str())),
    ))
}

/// DELETE /api/v1/mealplan/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.stores.meal_plan.delete(id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "MealPlanEntry",
            id,
        }));
    }
    state.stores.refresh.touch(RefreshScope::MealPlan).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Planning an unknown recipe is a client error, not a FK blow-up.
async fn ensure_recipe_exists(state: &AppState, recipe_id: DbId) -> Result<(), AppError> {
    if state.stores.recipes.find(recipe_id).await?.is_none() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown recipe id {recipe_id}"
        ))));
    }
    Ok(())
}
