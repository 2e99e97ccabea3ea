//! Artist endpoints

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tunelib_common::listing::Page;

use crate::api::{id_mismatch, ApiError, ListQuery};
use crate::services::artists::ArtistDto;
use crate::AppState;

/// GET /api/artists
pub async fn list_artists(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<ArtistDto>>, ApiError> {
    let page = state
        .artists()
        .list(query.sort.as_deref(), query.page)
        .await?;

    Ok(Json(page))
}

/// GET /api/artists/:id
pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ArtistDto>, ApiError> {
    Ok(Json(state.artists().get(id).await?))
}

/// POST /api/artists
pub async fn create_artist(
    State(state): State<AppState>,
    Json(dto): Json<ArtistDto>,
) -> Result<(StatusCode, Json<ArtistDto>), ApiError> {
    let created = state.artists().create(&dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/artists/:id
pub async fn update_artist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<ArtistDto>,
) -> Result<StatusCode, ApiError> {
    if dto.id != id {
        return Err(id_mismatch(id, dto.id));
    }

    state.artists().update(&dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/artists/:id
pub async fn delete_artist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.artists().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
