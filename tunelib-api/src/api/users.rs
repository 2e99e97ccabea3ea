//! User endpoints

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tunelib_common::listing::Page;

use crate::api::{id_mismatch, ApiError, ListQuery};
use crate::services::users::{LoginRequest, UserDto};
use crate::AppState;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<UserDto>>, ApiError> {
    let page = state
        .users()
        .list(query.sort.as_deref(), query.page)
        .await?;

    Ok(Json(page))
}

/// GET /api/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserDto>, ApiError> {
    Ok(Json(state.users().get(id).await?))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(dto): Json<UserDto>,
) -> Result<(StatusCode, Json<UserDto>), ApiError> {
    let created = state.users().create(&dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// POST /api/users/login
///
/// An unknown email and a wrong password answer identically.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    match state.users().login(&request).await? {
        Some(user) => Ok(Json(user).into_response()),
        None => Ok((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid email or password" })),
        )
            .into_response()),
    }
}

/// PUT /api/users/:id
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<UserDto>,
) -> Result<StatusCode, ApiError> {
    if dto.id != id {
        return Err(id_mismatch(id, dto.id));
    }

    state.users().update(&dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.users().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
