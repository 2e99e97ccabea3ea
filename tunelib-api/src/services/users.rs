//! User service
//!
//! Creation accepts either a plaintext password (no salt supplied: the
//! admin panel's path) or an opaque hash + salt pair passed through as-is
//! (the path edits take, carrying the stored credentials forward).

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tunelib_common::db::users::{self, User, UserWithRole};
use tunelib_common::listing::{self, FieldSort, Page};
use tunelib_common::{auth, Error, Result};

/// User transfer shape, carrying the joined role title
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDto {
    pub id: i64,
    pub email: Option<String>,
    pub password: Option<String>,
    pub salt: Option<String>,
    pub role_id: Option<i64>,
    pub role: Option<String>,
}

/// Login request body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone)]
pub struct UserService {
    db: SqlitePool,
}

impl UserService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: &UserDto) -> Result<UserDto> {
        let id = users::create(&self.db, &record_from_dto(0, dto)?).await?;
        self.get(id).await
    }

    pub async fn get(&self, id: i64) -> Result<UserDto> {
        let user = users::get_with_role(&self.db, id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("user {}", id)))?;

        Ok(dto_from_row(user))
    }

    pub async fn update(&self, dto: &UserDto) -> Result<()> {
        users::update(&self.db, &record_from_dto(dto.id, dto)?).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        users::delete(&self.db, id).await
    }

    /// Sorted, paginated user listing (ordered by email)
    pub async fn list(&self, sort: Option<&str>, page: i64) -> Result<Page<UserDto>> {
        let all = users::get_all_with_roles(&self.db).await?;
        let page = listing::list_by_field(
            all,
            FieldSort::parse(sort),
            |u| Some(u.email.as_str()),
            page,
        );
        Ok(page.map(dto_from_row))
    }

    /// Check credentials against the stored digest
    ///
    /// Returns the matching user, or `None` for an unknown email or a wrong
    /// password (indistinguishable to the caller).
    pub async fn login(&self, request: &LoginRequest) -> Result<Option<UserDto>> {
        let Some(user) = users::get_by_email(&self.db, &request.email).await? else {
            return Ok(None);
        };

        if auth::verify_password(&request.password, &user.salt, &user.password) {
            Ok(Some(dto_from_row(user)))
        } else {
            Ok(None)
        }
    }
}

fn record_from_dto(id: i64, dto: &UserDto) -> Result<User> {
    let email = dto
        .email
        .clone()
        .ok_or_else(|| Error::InvalidInput("user email is required".to_string()))?;
    let password = dto
        .password
        .clone()
        .ok_or_else(|| Error::InvalidInput("user password is required".to_string()))?;

    // No salt means the password arrived in plaintext and gets hashed here;
    // a salt means the pair is already a stored digest
    let (password, salt) = match dto.salt.clone().filter(|s| !s.is_empty()) {
        Some(salt) => (password, salt),
        None => {
            let salt = auth::generate_salt();
            (auth::hash_password(&password, &salt), salt)
        }
    };

    Ok(User {
        id,
        email,
        password,
        salt,
        role_id: dto.role_id,
    })
}

fn dto_from_row(user: UserWithRole) -> UserDto {
    UserDto {
        id: user.id,
        email: Some(user.email),
        password: Some(user.password),
        salt: Some(user.salt),
        role_id: user.role_id,
        role: user.role_title,
    }
}
