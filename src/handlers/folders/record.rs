use axum::extract::{rejection::PathRejection, Path, State};
use tracing::info;

use crate::api::format::FolderView;
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::folder_id_from_path;

/// GET /folders/:id - a single folder
pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<FolderView> {
    let id = folder_id_from_path(path)?;

    match state.folders.find(id).await? {
        Some(folder) => Ok(ApiResponse::success(FolderView::from(folder))),
        None => Err(ApiError::folder_not_found()),
    }
}

/// DELETE /folders/:id - remove a folder, 204 on success
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<()> {
    let id = folder_id_from_path(path)?;

    if !state.folders.delete(id).await? {
        return Err(ApiError::folder_not_found());
    }

    info!("Deleted folder {}", id);
    Ok(ApiResponse::<()>::no_content())
}
