//! Handlers for user CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use ladle_core::account::validate_username;
use ladle_core::dto::{validate_dto, UserDto};
use ladle_core::error::CoreError;
use ladle_core::mapper::UserMapper;
use ladle_core::refresh::RefreshScope;
use ladle_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::response::Wire;
use crate::state::AppState;

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mapper = UserMapper::default();
    let users = state.stores.users.list().await?;
    let dtos: Vec<UserDto> = users.iter().map(|u| mapper.entity_to_dto(u)).collect();
    Ok(Wire::list(&dtos))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = state
        .stores
        .users
        .find(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Wire::dto(&UserMapper::default().entity_to_dto(&user)))
}

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<UserDto>,
) -> AppResult<impl IntoResponse> {
    check_user_dto(&state, &dto).await?;
    if dto.id.is_some() {
        return Err(AppError::BadRequest("A new user must not carry an id".into()));
    }

    let mapper = UserMapper::default();
    let saved = state.stores.users.save(mapper.dto_to_entity(&dto, None)).await?;
    state.stores.refresh.touch(RefreshScope::Users).await?;

    Ok((StatusCode::CREATED, Wire::dto(&mapper.entity_to_dto(&saved))))
}

/// PUT /api/v1/users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(dto): Json<UserDto>,
) -> AppResult<impl IntoResponse> {
    check_user_dto(&state, &dto).await?;

    let existing = state
        .stores
        .users
        .find(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    let mapper = UserMapper::default();
    let saved = state
        .stores
        .users
        .save(mapper.dto_to_entity(&dto, Some(existing)))
        .await?;
    state.stores.refresh.touch(RefreshScope::Users).await?;

    Ok(Wire::dto(&mapper.entity_to_dto(&saved)))
}

/// DELETE /api/v1/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.stores.users.delete(id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }
    state.stores.refresh.touch(RefreshScope::Users).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Structural constraints plus the username shape rule and group existence.
async fn check_user_dto(state: &AppState, dto: &UserDto) -> Result<(), AppError> {
    validate_dto(dto)?;
    validate_username(&dto.username)?;
    if let Some(group_id) = dto.group_id {
        if state.stores.groups.find(group_id).await?.is_none() {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown group id {group_id}"
            ))));
        }
    }
    Ok(())
}
