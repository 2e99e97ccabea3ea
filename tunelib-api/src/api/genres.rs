//! Genre endpoints

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tunelib_common::listing::Page;

use crate::api::{id_mismatch, ApiError, ListQuery};
use crate::services::genres::GenreDto;
use crate::AppState;

/// GET /api/genres
pub async fn list_genres(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<GenreDto>>, ApiError> {
    let page = state
        .genres()
        .list(query.sort.as_deref(), query.page)
        .await?;

    Ok(Json(page))
}

/// GET /api/genres/:id
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<GenreDto>, ApiError> {
    Ok(Json(state.genres().get(id).await?))
}

/// POST /api/genres
pub async fn create_genre(
    State(state): State<AppState>,
    Json(dto): Json<GenreDto>,
) -> Result<(StatusCode, Json<GenreDto>), ApiError> {
    let created = state.genres().create(&dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/genres/:id
pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<GenreDto>,
) -> Result<StatusCode, ApiError> {
    if dto.id != id {
        return Err(id_mismatch(id, dto.id));
    }

    state.genres().update(&dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/genres/:id
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.genres().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
