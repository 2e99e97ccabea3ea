//! Song endpoints
//!
//! The listing is the catalog's main surface: sorted by one of the closed
//! sort keys, filtered by artist and/or genre, paginated at a fixed page
//! size.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tunelib_common::listing::{Page, SongFilter};

use crate::api::{default_page, id_mismatch, ApiError};
use crate::services::songs::SongDto;
use crate::AppState;

/// Query parameters for the song listing
#[derive(Debug, Deserialize)]
pub struct SongListQuery {
    /// Sort key (e.g. `ArtistNameDesc`); unrecognized values fall back to
    /// title order
    pub sort: Option<String>,

    /// Artist filter; 0 or absent selects all artists
    #[serde(default)]
    pub artist: i64,

    /// Genre filter; 0 or absent selects all genres
    #[serde(default)]
    pub genre: i64,

    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: i64,
}

/// GET /api/songs
pub async fn list_songs(
    State(state): State<AppState>,
    Query(query): Query<SongListQuery>,
) -> Result<Json<Page<SongDto>>, ApiError> {
    let filter = SongFilter {
        artist_id: query.artist,
        genre_id: query.genre,
    };

    let page = state
        .songs()
        .list(query.sort.as_deref(), &filter, query.page)
        .await?;

    Ok(Json(page))
}

/// GET /api/songs/:id
pub async fn get_song(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SongDto>, ApiError> {
    Ok(Json(state.songs().get(id).await?))
}

/// POST /api/songs
pub async fn create_song(
    State(state): State<AppState>,
    Json(dto): Json<SongDto>,
) -> Result<(StatusCode, Json<SongDto>), ApiError> {
    let created = state.songs().create(&dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/songs/:id
pub async fn update_song(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<SongDto>,
) -> Result<StatusCode, ApiError> {
    if dto.id != id {
        return Err(id_mismatch(id, dto.id));
    }

    state.songs().update(&dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/songs/:id
pub async fn delete_song(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.songs().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
