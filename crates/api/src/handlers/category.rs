//! Handlers for the `/categories` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bookshelf_core::audit;
use bookshelf_core::error::CoreError;
use bookshelf_core::types::DbId;
use bookshelf_db::models::category::CreateCategory;
use bookshelf_db::repositories::{BookRepo, CategoryRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{parse_id, ValidJson};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    })
}

/// GET /api/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(
        "Categories retrieved successfully",
        categories,
    )))
}

/// POST /api/categories
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    ValidJson(input): ValidJson<CreateCategory>,
) -> AppResult<(StatusCode, Json<ApiResponse>)> {
    let actor = audit::actor(Some(user.username.as_str()));
    let category = CategoryRepo::create(&state.pool, &input, actor).await?;

    tracing::info!(category_id = category.id, username = %user.username, "Category created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Category created successfully", category)),
    ))
}

/// GET /api/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<ApiResponse>> {
    let id = parse_id(&raw_id, "category")?;
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(ApiResponse::ok(
        "Category retrieved successfully",
        category,
    )))
}

/// DELETE /api/categories/{id}
///
/// Books in the category survive with their `category_id` cleared.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(raw_id): Path<String>,
) -> AppResult<Json<ApiResponse>> {
    let id = parse_id(&raw_id, "category")?;
    if !CategoryRepo::exists(&state.pool, id).await? {
        return Err(not_found(id));
    }

    // A concurrent delete between the check and here leaves nothing to remove.
    if !CategoryRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(category_id = id, username = %user.username, "Category deleted");

    Ok(Json(ApiResponse::message("Category deleted successfully")))
}

/// GET /api/categories/{id}/books
pub async fn list_books(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<ApiResponse>> {
    let id = parse_id(&raw_id, "category")?;
    if !CategoryRepo::exists(&state.pool, id).await? {
        return Err(not_found(id));
    }

    let books = BookRepo::list_by_category(&state.pool, id).await?;
    Ok(Json(ApiResponse::ok("Books retrieved successfully", books)))
}
