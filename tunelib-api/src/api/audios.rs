//! Audio endpoints
//!
//! Creation is a multipart upload: the file lands in the store, the row
//! records its name and relative path. Row deletion removes the file too.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tunelib_common::listing::Page;
use tunelib_common::Error;

use crate::api::{id_mismatch, ApiError, ListQuery};
use crate::services::audios::AudioDto;
use crate::AppState;

/// GET /api/audios
pub async fn list_audios(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<AudioDto>>, ApiError> {
    let page = state
        .audios()
        .list(query.sort.as_deref(), query.page)
        .await?;

    Ok(Json(page))
}

/// GET /api/audios/:id
pub async fn get_audio(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AudioDto>, ApiError> {
    Ok(Json(state.audios().get(id).await?))
}

/// POST /api/audios (multipart)
///
/// Expects one `file` field carrying the audio bytes and a file name.
pub async fn upload_audio(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<AudioDto>), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError(Error::InvalidInput(format!("bad multipart body: {}", e))))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_owned)
            .ok_or_else(|| ApiError(Error::InvalidInput("upload has no file name".to_string())))?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError(Error::InvalidInput(format!("bad multipart body: {}", e))))?;

        let created = state
            .audios()
            .create_from_upload(&file_name, &bytes, &state.files)
            .await?;

        return Ok((StatusCode::CREATED, Json(created)));
    }

    Err(ApiError(Error::InvalidInput(
        "upload has no file field".to_string(),
    )))
}

/// PUT /api/audios/:id
pub async fn update_audio(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<AudioDto>,
) -> Result<StatusCode, ApiError> {
    if dto.id != id {
        return Err(id_mismatch(id, dto.id));
    }

    state.audios().update(&dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/audios/:id
pub async fn delete_audio(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.audios().delete(id, &state.files).await?;
    Ok(StatusCode::NO_CONTENT)
}
