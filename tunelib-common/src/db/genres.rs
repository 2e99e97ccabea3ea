//! Genre database operations

use sqlx::{Row, SqlitePool};

use crate::{Error, Result};

/// Genre record
#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: i64,
    pub title: String,
}

/// Insert a genre, returning the generated id
pub async fn create(pool: &SqlitePool, genre: &Genre) -> Result<i64> {
    let result = sqlx::query("INSERT INTO genres (title) VALUES (?)")
        .bind(&genre.title)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Load a genre by id
pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Genre>> {
    let row = sqlx::query("SELECT id, title FROM genres WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| Genre {
        id: row.get("id"),
        title: row.get("title"),
    }))
}

/// Load all genres in insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Genre>> {
    let rows = sqlx::query("SELECT id, title FROM genres ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .iter()
        .map(|row| Genre {
            id: row.get("id"),
            title: row.get("title"),
        })
        .collect())
}

/// Replace all fields of a genre
pub async fn update(pool: &SqlitePool, genre: &Genre) -> Result<()> {
    let result = sqlx::query("UPDATE genres SET title = ? WHERE id = ?")
        .bind(&genre.title)
        .bind(genre.id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("genre {}", genre.id)));
    }

    Ok(())
}

/// Delete a genre; a missing id is tolerated silently
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM genres WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
