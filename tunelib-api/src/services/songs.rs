//! Song service

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tunelib_common::db::songs::{self, Song, SongWithNames};
use tunelib_common::listing::{self, Page, SongFilter, SongSort};
use tunelib_common::{Error, Result};

/// Song transfer shape, carrying joined display names alongside the keys
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SongDto {
    pub id: i64,
    pub title: Option<String>,
    pub release: Option<String>,
    pub youtube_link: Option<String>,
    pub genre_id: Option<i64>,
    pub genre: Option<String>,
    pub artist_id: Option<i64>,
    pub artist: Option<String>,
    pub audio_id: Option<i64>,
    pub audio: Option<String>,
}

#[derive(Clone)]
pub struct SongService {
    db: SqlitePool,
}

impl SongService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Create a song from its transfer shape, returning the stored row
    pub async fn create(&self, dto: &SongDto) -> Result<SongDto> {
        let id = songs::create(&self.db, &record_from_dto(0, dto)).await?;
        self.get(id).await
    }

    /// Fetch one song with display names; absent id is NotFound
    pub async fn get(&self, id: i64) -> Result<SongDto> {
        let row = songs::get_with_names(&self.db, id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("song {}", id)))?;

        Ok(dto_from_row(row))
    }

    /// Replace a song; absent id is NotFound
    pub async fn update(&self, dto: &SongDto) -> Result<()> {
        songs::update(&self.db, &record_from_dto(dto.id, dto)).await
    }

    /// Delete a song; absent id is tolerated
    pub async fn delete(&self, id: i64) -> Result<()> {
        songs::delete(&self.db, id).await
    }

    /// Sorted, filtered, paginated song listing
    pub async fn list(
        &self,
        sort: Option<&str>,
        filter: &SongFilter,
        page: i64,
    ) -> Result<Page<SongDto>> {
        let rows = songs::get_all_with_names(&self.db).await?;
        let page = listing::list_songs(rows, SongSort::parse(sort), filter, page);
        Ok(page.map(dto_from_row))
    }
}

fn record_from_dto(id: i64, dto: &SongDto) -> Song {
    Song {
        id,
        title: dto.title.clone(),
        release: dto.release.clone(),
        youtube_link: dto.youtube_link.clone(),
        genre_id: dto.genre_id,
        artist_id: dto.artist_id,
        audio_id: dto.audio_id,
    }
}

fn dto_from_row(row: SongWithNames) -> SongDto {
    SongDto {
        id: row.id,
        title: row.title,
        release: row.release,
        youtube_link: row.youtube_link,
        genre_id: row.genre_id,
        genre: row.genre_title,
        artist_id: row.artist_id,
        artist: row.artist_name,
        audio_id: row.audio_id,
        audio: row.audio_file_name,
    }
}
