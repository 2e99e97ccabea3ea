//! Song database operations
//!
//! Songs carry three optional foreign keys (genre, artist, audio). The
//! `*_with_names` fetches join the display fields the listing engine sorts
//! on; the plain fetches stay on the songs table alone.

use sqlx::{Row, SqlitePool};

use crate::{Error, Result};

/// Song record
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub id: i64,
    pub title: Option<String>,
    pub release: Option<String>,
    pub youtube_link: Option<String>,
    pub genre_id: Option<i64>,
    pub artist_id: Option<i64>,
    pub audio_id: Option<i64>,
}

/// Song row joined with its display names
#[derive(Debug, Clone)]
pub struct SongWithNames {
    pub id: i64,
    pub title: Option<String>,
    pub release: Option<String>,
    pub youtube_link: Option<String>,
    pub genre_id: Option<i64>,
    pub genre_title: Option<String>,
    pub artist_id: Option<i64>,
    pub artist_name: Option<String>,
    pub audio_id: Option<i64>,
    pub audio_file_name: Option<String>,
}

const WITH_NAMES_SELECT: &str = "SELECT s.id, s.title, s.release, s.youtube_link,
        s.genre_id, g.title AS genre_title,
        s.artist_id, a.name AS artist_name,
        s.audio_id, au.file_name AS audio_file_name
 FROM songs s
 LEFT JOIN genres g ON g.id = s.genre_id
 LEFT JOIN artists a ON a.id = s.artist_id
 LEFT JOIN audios au ON au.id = s.audio_id";

/// Insert a song, returning the generated id
pub async fn create(pool: &SqlitePool, song: &Song) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO songs (title, release, youtube_link, genre_id, artist_id, audio_id)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&song.title)
    .bind(&song.release)
    .bind(&song.youtube_link)
    .bind(song.genre_id)
    .bind(song.artist_id)
    .bind(song.audio_id)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Load a song by id
pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Song>> {
    let row = sqlx::query(
        "SELECT id, title, release, youtube_link, genre_id, artist_id, audio_id
         FROM songs WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| Song {
        id: row.get("id"),
        title: row.get("title"),
        release: row.get("release"),
        youtube_link: row.get("youtube_link"),
        genre_id: row.get("genre_id"),
        artist_id: row.get("artist_id"),
        audio_id: row.get("audio_id"),
    }))
}

/// Load a song by id with its display names joined in
pub async fn get_with_names(pool: &SqlitePool, id: i64) -> Result<Option<SongWithNames>> {
    let sql = format!("{WITH_NAMES_SELECT} WHERE s.id = ?");
    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;

    Ok(row.map(song_with_names_from_row))
}

/// Load all songs with display names, in insertion order
///
/// Insertion order is the fixed input order the stable sort ties break on.
pub async fn get_all_with_names(pool: &SqlitePool) -> Result<Vec<SongWithNames>> {
    let sql = format!("{WITH_NAMES_SELECT} ORDER BY s.id");
    let rows = sqlx::query(&sql).fetch_all(pool).await?;

    Ok(rows.into_iter().map(song_with_names_from_row).collect())
}

/// Replace all fields of a song
pub async fn update(pool: &SqlitePool, song: &Song) -> Result<()> {
    let result = sqlx::query(
        "UPDATE songs
         SET title = ?, release = ?, youtube_link = ?, genre_id = ?, artist_id = ?, audio_id = ?
         WHERE id = ?",
    )
    .bind(&song.title)
    .bind(&song.release)
    .bind(&song.youtube_link)
    .bind(song.genre_id)
    .bind(song.artist_id)
    .bind(song.audio_id)
    .bind(song.id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("song {}", song.id)));
    }

    Ok(())
}

/// Delete a song; a missing id is tolerated silently
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

fn song_with_names_from_row(row: sqlx::sqlite::SqliteRow) -> SongWithNames {
    SongWithNames {
        id: row.get("id"),
        title: row.get("title"),
        release: row.get("release"),
        youtube_link: row.get("youtube_link"),
        genre_id: row.get("genre_id"),
        genre_title: row.get("genre_title"),
        artist_id: row.get("artist_id"),
        artist_name: row.get("artist_name"),
        audio_id: row.get("audio_id"),
        audio_file_name: row.get("audio_file_name"),
    }
}
