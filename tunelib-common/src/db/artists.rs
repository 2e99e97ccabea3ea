//! Artist database operations

use sqlx::{Row, SqlitePool};

use crate::{Error, Result};

/// Artist record
///
/// `birth_date` is a free-form string; no calendar validation applies.
#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub birth_date: Option<String>,
}

/// Insert an artist, returning the generated id
pub async fn create(pool: &SqlitePool, artist: &Artist) -> Result<i64> {
    let result = sqlx::query("INSERT INTO artists (name, birth_date) VALUES (?, ?)")
        .bind(&artist.name)
        .bind(&artist.birth_date)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Load an artist by id
pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Artist>> {
    let row = sqlx::query("SELECT id, name, birth_date FROM artists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| Artist {
        id: row.get("id"),
        name: row.get("name"),
        birth_date: row.get("birth_date"),
    }))
}

/// Load all artists in insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let rows = sqlx::query("SELECT id, name, birth_date FROM artists ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .iter()
        .map(|row| Artist {
            id: row.get("id"),
            name: row.get("name"),
            birth_date: row.get("birth_date"),
        })
        .collect())
}

/// Replace all fields of an artist
pub async fn update(pool: &SqlitePool, artist: &Artist) -> Result<()> {
    let result = sqlx::query("UPDATE artists SET name = ?, birth_date = ? WHERE id = ?")
        .bind(&artist.name)
        .bind(&artist.birth_date)
        .bind(artist.id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("artist {}", artist.id)));
    }

    Ok(())
}

/// Delete an artist; a missing id is tolerated silently
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
