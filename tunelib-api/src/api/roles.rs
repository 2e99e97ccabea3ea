//! Role endpoints

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tunelib_common::listing::Page;

use crate::api::{id_mismatch, ApiError, ListQuery};
use crate::services::roles::RoleDto;
use crate::AppState;

/// GET /api/roles
pub async fn list_roles(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<RoleDto>>, ApiError> {
    let page = state
        .roles()
        .list(query.sort.as_deref(), query.page)
        .await?;

    Ok(Json(page))
}

/// GET /api/roles/:id
pub async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RoleDto>, ApiError> {
    Ok(Json(state.roles().get(id).await?))
}

/// POST /api/roles
pub async fn create_role(
    State(state): State<AppState>,
    Json(dto): Json<RoleDto>,
) -> Result<(StatusCode, Json<RoleDto>), ApiError> {
    let created = state.roles().create(&dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/roles/:id
pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<RoleDto>,
) -> Result<StatusCode, ApiError> {
    if dto.id != id {
        return Err(id_mismatch(id, dto.id));
    }

    state.roles().update(&dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/roles/:id
pub async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.roles().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
