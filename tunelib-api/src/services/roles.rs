//! Role service

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tunelib_common::db::roles::{self, Role};
use tunelib_common::listing::{self, FieldSort, Page};
use tunelib_common::{Error, Result};

/// Role transfer shape
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoleDto {
    pub id: i64,
    pub title: Option<String>,
}

#[derive(Clone)]
pub struct RoleService {
    db: SqlitePool,
}

impl RoleService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: &RoleDto) -> Result<RoleDto> {
        let id = roles::create(&self.db, &record_from_dto(0, dto)?).await?;
        self.get(id).await
    }

    pub async fn get(&self, id: i64) -> Result<RoleDto> {
        let role = roles::get(&self.db, id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("role {}", id)))?;

        Ok(dto_from_record(role))
    }

    pub async fn update(&self, dto: &RoleDto) -> Result<()> {
        roles::update(&self.db, &record_from_dto(dto.id, dto)?).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        roles::delete(&self.db, id).await
    }

    /// Sorted, paginated role listing (ordered by title)
    pub async fn list(&self, sort: Option<&str>, page: i64) -> Result<Page<RoleDto>> {
        let all = roles::get_all(&self.db).await?;
        let page = listing::list_by_field(
            all,
            FieldSort::parse(sort),
            |r| Some(r.title.as_str()),
            page,
        );
        Ok(page.map(dto_from_record))
    }
}

fn record_from_dto(id: i64, dto: &RoleDto) -> Result<Role> {
    let title = dto
        .title
        .clone()
        .ok_or_else(|| Error::InvalidInput("role title is required".to_string()))?;

    Ok(Role { id, title })
}

fn dto_from_record(role: Role) -> RoleDto {
    RoleDto {
        id: role.id,
        title: Some(role.title),
    }
}
