//! Role database operations

use sqlx::{Row, SqlitePool};

use crate::{Error, Result};

/// Role record
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub id: i64,
    pub title: String,
}

/// Insert a role, returning the generated id
pub async fn create(pool: &SqlitePool, role: &Role) -> Result<i64> {
    let result = sqlx::query("INSERT INTO roles (title) VALUES (?)")
        .bind(&role.title)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Load a role by id
pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Role>> {
    let row = sqlx::query("SELECT id, title FROM roles WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| Role {
        id: row.get("id"),
        title: row.get("title"),
    }))
}

/// Load all roles in insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Role>> {
    let rows = sqlx::query("SELECT id, title FROM roles ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .iter()
        .map(|row| Role {
            id: row.get("id"),
            title: row.get("title"),
        })
        .collect())
}

/// Replace all fields of a role
pub async fn update(pool: &SqlitePool, role: &Role) -> Result<()> {
    let result = sqlx::query("UPDATE roles SET title = ? WHERE id = ?")
        .bind(&role.title)
        .bind(role.id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("role {}", role.id)));
    }

    Ok(())
}

/// Delete a role; a missing id is tolerated silently
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM roles WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
