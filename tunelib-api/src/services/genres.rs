//! Genre service

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tunelib_common::db::genres::{self, Genre};
use tunelib_common::listing::{self, FieldSort, Page};
use tunelib_common::{Error, Result};

/// Genre transfer shape
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenreDto {
    pub id: i64,
    pub title: Option<String>,
}

#[derive(Clone)]
pub struct GenreService {
    db: SqlitePool,
}

impl GenreService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: &GenreDto) -> Result<GenreDto> {
        let id = genres::create(&self.db, &record_from_dto(0, dto)?).await?;
        self.get(id).await
    }

    pub async fn get(&self, id: i64) -> Result<GenreDto> {
        let genre = genres::get(&self.db, id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("genre {}", id)))?;

        Ok(dto_from_record(genre))
    }

    pub async fn update(&self, dto: &GenreDto) -> Result<()> {
        genres::update(&self.db, &record_from_dto(dto.id, dto)?).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        genres::delete(&self.db, id).await
    }

    /// Sorted, paginated genre listing (ordered by title)
    pub async fn list(&self, sort: Option<&str>, page: i64) -> Result<Page<GenreDto>> {
        let all = genres::get_all(&self.db).await?;
        let page = listing::list_by_field(
            all,
            FieldSort::parse(sort),
            |g| Some(g.title.as_str()),
            page,
        );
        Ok(page.map(dto_from_record))
    }
}

fn record_from_dto(id: i64, dto: &GenreDto) -> Result<Genre> {
    let title = dto
        .title
        .clone()
        .ok_or_else(|| Error::InvalidInput("genre title is required".to_string()))?;

    Ok(Genre { id, title })
}

fn dto_from_record(genre: Genre) -> GenreDto {
    GenreDto {
        id: genre.id,
        title: Some(genre.title),
    }
}
