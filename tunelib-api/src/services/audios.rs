//! Audio service
//!
//! Rows describe uploaded files; the bytes live behind the `FileStore`.
//! Deleting an audio row also removes its file, best effort.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tunelib_common::db::audios::{self, Audio};
use tunelib_common::listing::{self, FieldSort, Page};
use tunelib_common::{Error, Result};

use crate::storage::FileStore;

/// Audio transfer shape
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioDto {
    pub id: i64,
    pub file_name: Option<String>,
    pub path: Option<String>,
}

#[derive(Clone)]
pub struct AudioService {
    db: SqlitePool,
}

impl AudioService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Store an uploaded file and create its catalog row
    pub async fn create_from_upload(
        &self,
        file_name: &str,
        bytes: &[u8],
        store: &FileStore,
    ) -> Result<AudioDto> {
        let path = store.save(file_name, bytes)?;

        let audio = Audio {
            id: 0,
            file_name: file_name.to_string(),
            path,
        };
        let id = audios::create(&self.db, &audio).await?;

        self.get(id).await
    }

    pub async fn get(&self, id: i64) -> Result<AudioDto> {
        let audio = audios::get(&self.db, id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("audio {}", id)))?;

        Ok(dto_from_record(audio))
    }

    pub async fn update(&self, dto: &AudioDto) -> Result<()> {
        audios::update(&self.db, &record_from_dto(dto.id, dto)?).await
    }

    /// Delete the row and best-effort remove the stored file
    pub async fn delete(&self, id: i64, store: &FileStore) -> Result<()> {
        if let Some(audio) = audios::get(&self.db, id).await? {
            store.delete(&audio.path);
        }

        audios::delete(&self.db, id).await
    }

    /// Sorted, paginated audio listing (ordered by file name)
    pub async fn list(&self, sort: Option<&str>, page: i64) -> Result<Page<AudioDto>> {
        let all = audios::get_all(&self.db).await?;
        let page = listing::list_by_field(
            all,
            FieldSort::parse(sort),
            |a| Some(a.file_name.as_str()),
            page,
        );
        Ok(page.map(dto_from_record))
    }
}

fn record_from_dto(id: i64, dto: &AudioDto) -> Result<Audio> {
    let file_name = dto
        .file_name
        .clone()
        .ok_or_else(|| Error::InvalidInput("audio file name is required".to_string()))?;
    let path = dto
        .path
        .clone()
        .ok_or_else(|| Error::InvalidInput("audio path is required".to_string()))?;

    Ok(Audio {
        id,
        file_name,
        path,
    })
}

fn dto_from_record(audio: Audio) -> AudioDto {
    AudioDto {
        id: audio.id,
        file_name: Some(audio.file_name),
        path: Some(audio.path),
    }
}
