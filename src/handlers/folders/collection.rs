use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::api::format::{folder_location, FolderView};
use crate::database::NewFolder;
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /folders - all folders in insertion order
pub async fn get(State(state): State<AppState>) -> ApiResult<Vec<FolderView>> {
    let folders = state.folders.list().await?;
    Ok(ApiResponse::success(
        folders.iter().map(FolderView::from).collect(),
    ))
}

/// POST /folders - create a folder from `{ "name": ... }`
pub async fn post(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<FolderView> {
    let body = match payload {
        Ok(Json(body)) => Some(body),
        Err(rejection) => {
            debug!("Rejected folder body: {}", rejection);
            None
        }
    };

    let name = body
        .as_ref()
        .and_then(|b| b.get("name"))
        .and_then(Value::as_str);

    let new_folder = NewFolder::from_name(name).ok_or_else(ApiError::missing_folder_name)?;

    let created = state.folders.insert(new_folder).await?;
    info!("Created folder {}", created.id);

    let location = folder_location(&state.api_root, created.id);
    Ok(ApiResponse::created(FolderView::from(created), location))
}
