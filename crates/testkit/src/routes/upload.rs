use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::AssetCategory;
use serde_json::json;

use crate::errors::StubError;
use crate::state::{StoredUpload, StubState};

/// Accepts the `file` part and answers with the backend's source-tree path,
/// `/src/assets/<category>/<file>`.
pub async fn upload(
    State(state): State<StubState>,
    Path(category): Path<String>,
    mut multipart: Multipart,
) -> Result<Response, StubError> {
    let Ok(category) = category.parse::<AssetCategory>() else {
        return Ok((StatusCode::BAD_REQUEST, Json(json!({"error": "Invalid category"}))).into_response());
    };

    while let Some(field) = multipart.next_field().await.map_err(|e| StubError::BadRequest(e.to_string()))? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| StubError::BadRequest("file part has no filename".into()))?;
        let bytes = field.bytes().await.map_err(|e| StubError::BadRequest(e.to_string()))?;

        state.db().write().await.uploads.push(StoredUpload {
            category: category.to_string(),
            file_name: file_name.clone(),
            size: bytes.len(),
        });
        if state.upload_url_omitted() {
            return Ok(Json(json!({"ok": true})).into_response());
        }
        return Ok(Json(json!({"url": format!("/src/assets/{category}/{file_name}")})).into_response());
    }
    Err(StubError::BadRequest("missing file part".into()))
}
