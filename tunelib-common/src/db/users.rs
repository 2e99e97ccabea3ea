//! User database operations
//!
//! Passwords are stored as opaque digest + salt strings; hashing lives in
//! `crate::auth`. Emails are intended-unique but not enforced by the
//! schema, so lookups by email pick the most recently created row.

use sqlx::{Row, SqlitePool};

use crate::{Error, Result};

/// User record
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub salt: String,
    pub role_id: Option<i64>,
}

/// User row joined with its role title
#[derive(Debug, Clone)]
pub struct UserWithRole {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub salt: String,
    pub role_id: Option<i64>,
    pub role_title: Option<String>,
}

/// Insert a user, returning the generated id
pub async fn create(pool: &SqlitePool, user: &User) -> Result<i64> {
    let result =
        sqlx::query("INSERT INTO users (email, password, salt, role_id) VALUES (?, ?, ?, ?)")
            .bind(&user.email)
            .bind(&user.password)
            .bind(&user.salt)
            .bind(user.role_id)
            .execute(pool)
            .await?;

    Ok(result.last_insert_rowid())
}

/// Load a user by id, with the role title joined in
pub async fn get_with_role(pool: &SqlitePool, id: i64) -> Result<Option<UserWithRole>> {
    let row = sqlx::query(
        "SELECT u.id, u.email, u.password, u.salt, u.role_id, r.title AS role_title
         FROM users u
         LEFT JOIN roles r ON r.id = u.role_id
         WHERE u.id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(user_with_role_from_row))
}

/// Load all users (role titles joined) in insertion order
pub async fn get_all_with_roles(pool: &SqlitePool) -> Result<Vec<UserWithRole>> {
    let rows = sqlx::query(
        "SELECT u.id, u.email, u.password, u.salt, u.role_id, r.title AS role_title
         FROM users u
         LEFT JOIN roles r ON r.id = u.role_id
         ORDER BY u.id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(user_with_role_from_row).collect())
}

/// Look a user up by email; newest row wins when duplicates exist
pub async fn get_by_email(pool: &SqlitePool, email: &str) -> Result<Option<UserWithRole>> {
    let row = sqlx::query(
        "SELECT u.id, u.email, u.password, u.salt, u.role_id, r.title AS role_title
         FROM users u
         LEFT JOIN roles r ON r.id = u.role_id
         WHERE u.email = ?
         ORDER BY u.id DESC
         LIMIT 1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(user_with_role_from_row))
}

/// Replace all fields of a user
pub async fn update(pool: &SqlitePool, user: &User) -> Result<()> {
    let result = sqlx::query(
        "UPDATE users SET email = ?, password = ?, salt = ?, role_id = ? WHERE id = ?",
    )
    .bind(&user.email)
    .bind(&user.password)
    .bind(&user.salt)
    .bind(user.role_id)
    .bind(user.id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("user {}", user.id)));
    }

    Ok(())
}

/// Delete a user; a missing id is tolerated silently
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

fn user_with_role_from_row(row: sqlx::sqlite::SqliteRow) -> UserWithRole {
    UserWithRole {
        id: row.get("id"),
        email: row.get("email"),
        password: row.get("password"),
        salt: row.get("salt"),
        role_id: row.get("role_id"),
        role_title: row.get("role_title"),
    }
}
