//! Audio file metadata operations
//!
//! Rows here only describe stored files; the bytes themselves live behind
//! the file store and are addressed by the relative `path`.

use sqlx::{Row, SqlitePool};

use crate::{Error, Result};

/// Audio record
#[derive(Debug, Clone, PartialEq)]
pub struct Audio {
    pub id: i64,
    pub file_name: String,
    pub path: String,
}

/// Insert an audio row, returning the generated id
pub async fn create(pool: &SqlitePool, audio: &Audio) -> Result<i64> {
    let result = sqlx::query("INSERT INTO audios (file_name, path) VALUES (?, ?)")
        .bind(&audio.file_name)
        .bind(&audio.path)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Load an audio row by id
pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Audio>> {
    let row = sqlx::query("SELECT id, file_name, path FROM audios WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| Audio {
        id: row.get("id"),
        file_name: row.get("file_name"),
        path: row.get("path"),
    }))
}

/// Load all audio rows in insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Audio>> {
    let rows = sqlx::query("SELECT id, file_name, path FROM audios ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .iter()
        .map(|row| Audio {
            id: row.get("id"),
            file_name: row.get("file_name"),
            path: row.get("path"),
        })
        .collect())
}

/// Replace all fields of an audio row
pub async fn update(pool: &SqlitePool, audio: &Audio) -> Result<()> {
    let result = sqlx::query("UPDATE audios SET file_name = ?, path = ? WHERE id = ?")
        .bind(&audio.file_name)
        .bind(&audio.path)
        .bind(audio.id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("audio {}", audio.id)));
    }

    Ok(())
}

/// Delete an audio row; a missing id is tolerated silently
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM audios WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
