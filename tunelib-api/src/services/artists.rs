//! Artist service

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tunelib_common::db::artists::{self, Artist};
use tunelib_common::listing::{self, FieldSort, Page};
use tunelib_common::{Error, Result};

/// Artist transfer shape
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtistDto {
    pub id: i64,
    pub name: Option<String>,
    pub birth_date: Option<String>,
}

#[derive(Clone)]
pub struct ArtistService {
    db: SqlitePool,
}

impl ArtistService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: &ArtistDto) -> Result<ArtistDto> {
        let id = artists::create(&self.db, &record_from_dto(0, dto)?).await?;
        self.get(id).await
    }

    pub async fn get(&self, id: i64) -> Result<ArtistDto> {
        let artist = artists::get(&self.db, id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("artist {}", id)))?;

        Ok(dto_from_record(artist))
    }

    pub async fn update(&self, dto: &ArtistDto) -> Result<()> {
        artists::update(&self.db, &record_from_dto(dto.id, dto)?).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        artists::delete(&self.db, id).await
    }

    /// Sorted, paginated artist listing (ordered by name)
    pub async fn list(&self, sort: Option<&str>, page: i64) -> Result<Page<ArtistDto>> {
        let all = artists::get_all(&self.db).await?;
        let page = listing::list_by_field(
            all,
            FieldSort::parse(sort),
            |a| Some(a.name.as_str()),
            page,
        );
        Ok(page.map(dto_from_record))
    }
}

fn record_from_dto(id: i64, dto: &ArtistDto) -> Result<Artist> {
    let name = dto
        .name
        .clone()
        .ok_or_else(|| Error::InvalidInput("artist name is required".to_string()))?;

    Ok(Artist {
        id,
        name,
        birth_date: dto.birth_date.clone(),
    })
}

fn dto_from_record(artist: Artist) -> ArtistDto {
    ArtistDto {
        id: artist.id,
        name: Some(artist.name),
        birth_date: artist.birth_date,
    }
}
