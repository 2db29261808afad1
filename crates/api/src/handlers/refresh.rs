//! Handler for refresh stamps.

use axum::extract::State;
use axum::response::IntoResponse;

use ladle_core::dto::RefreshStampDto;

use crate::error::AppResult;
use crate::response::Wire;
use crate::state::AppState;

/// GET /api/v1/refresh
///
/// Stamps for all scopes; clients refetch the scopes whose timestamp
/// moved since their last poll.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stamps = state.stores.refresh.list().await?;
    let dtos: Vec<RefreshStampDto> = stamps.iter().map(RefreshStampDto::from_entity).collect();
    Ok(Wire::list(&dtos))
}
