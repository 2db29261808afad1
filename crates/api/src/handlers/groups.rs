//! Handlers for user group CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use ladle_core::dto::{validate_dto, UserGroupDto};
use ladle_core::error::CoreError;
use ladle_core::mapper::UserGroupMapper;
use ladle_core::refresh::RefreshScope;
use ladle_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::response::Wire;
use crate::state::AppState;

/// GET /api/v1/groups
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mapper = UserGroupMapper::default();
    let groups = state.stores.groups.list().await?;
    let dtos: Vec<UserGroupDto> = groups.iter().map(|g| mapper.entity_to_dto(g)).collect();
    Ok(Wire::list(&dtos))
}

/// GET /api/v1/groups/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let group = state
        .stores
        .groups
        .find(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "UserGroup",
            id,
        }))?;
    Ok(Wire::dto(&UserGroupMapper::default().entity_to_dto(&group)))
}

/// POST /api/v1/groups
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<UserGroupDto>,
) -> AppResult<impl IntoResponse> {
    validate_dto(&dto)?;
    if dto.id.is_some() {
        return Err(AppError::BadRequest(
            "A new group must not carry an id".into(),
        ));
    }

    let mapper = UserGroupMapper::default();
    let saved = state
        .stores
        .groups
        .save(mapper.dto_to_entity(&dto, None))
        .await?;
    state.stores.refresh.touch(RefreshScope::Groups).await?;

    Ok((StatusCode::CREATED, Wire::dto(&mapper.entity_to_dto(&saved))))
}

/// PUT /api/v1/groups/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(dto): Json<UserGroupDto>,
) -> AppResult<impl IntoResponse> {
    validate_dto(&dto)?;

    let existing = state
        .stores
        .groups
        .find(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "UserGroup",
            id,
        }))?;

    let mapper = UserGroupMapper::default();
    let saved = state
        .stores
        .groups
        .save(mapper.dto_to_entity(&dto, Some(existing)))
        .await?;
    state.stores.refresh.touch(RefreshScope::Groups).await?;

    Ok(Wire::dto(&mapper.entity_to_dto(&saved)))
}

/// DELETE /api/v1/groups/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.stores.groups.delete(id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "UserGroup",
            id,
        }));
    }
    state.stores.refresh.touch(RefreshScope::Groups).await?;
    Ok(StatusCode::NO_CONTENT)
}
