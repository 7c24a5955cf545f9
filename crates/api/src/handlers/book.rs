//! Handlers for the `/books` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use bookshelf_core::audit;
use bookshelf_core::error::CoreError;
use bookshelf_core::thickness::Thickness;
use bookshelf_core::types::DbId;
use bookshelf_db::models::book::CreateBook;
use bookshelf_db::repositories::{BookRepo, CategoryRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{parse_id, QueryParams, ValidJson};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Optional filters for `GET /books`.
#[derive(Debug, Default, Deserialize)]
pub struct BookFilter {
    pub category_id: Option<DbId>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Book", id })
}

/// GET /api/books
///
/// With `?category_id=` only that category's books are returned; an unknown
/// category is a 404.
pub async fn list(
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<BookFilter>,
) -> AppResult<Json<ApiResponse>> {
    let books = match filter.category_id {
        Some(category_id) => {
            if !CategoryRepo::exists(&state.pool, category_id).await? {
                return Err(AppError::Core(CoreError::NotFound {
                    entity: "Category",
                    id: category_id,
                }));
            }
            BookRepo::list_by_category(&state.pool, category_id).await?
        }
        None => BookRepo::list(&state.pool).await?,
    };
    Ok(Json(ApiResponse::ok("Books retrieved successfully", books)))
}

/// POST /api/books
///
/// `thickness` is derived from `total_page`. The category reference is
/// checked before the insert but not inside a transaction.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    ValidJson(input): ValidJson<CreateBook>,
) -> AppResult<(StatusCode, Json<ApiResponse>)> {
    if let Some(category_id) = input.category_id {
        if !CategoryRepo::exists(&state.pool, category_id).await? {
            return Err(AppError::Core(CoreError::InvalidReference {
                entity: "Category",
                id: category_id,
            }));
        }
    }

    let thickness = Thickness::from_total_pages(input.total_page);
    let actor = audit::actor(Some(user.username.as_str()));
    let mut book = BookRepo::create(&state.pool, &input, thickness, actor).await?;

    if let Some(category_id) = book.category_id {
        match CategoryRepo::find_name(&state.pool, category_id).await {
            Ok(name) => book.category_name = name,
            Err(e) => {
                tracing::warn!(
                    book_id = book.id,
                    category_id,
                    error = %e,
                    "Category name lookup failed"
                );
            }
        }
    }

    tracing::info!(
        book_id = book.id,
        thickness = %thickness,
        username = %user.username,
        "Book created"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Book created successfully", book)),
    ))
}

/// GET /api/books/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<ApiResponse>> {
    let id = parse_id(&raw_id, "book")?;
    let book = BookRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(ApiResponse::ok("Book retrieved successfully", book)))
}

/// DELETE /api/books/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(raw_id): Path<String>,
) -> AppResult<Json<ApiResponse>> {
    let id = parse_id(&raw_id, "book")?;
    if !BookRepo::exists(&state.pool, id).await? {
        return Err(not_found(id));
    }

    // A concurrent delete between the check and here leaves nothing to remove.
    if !BookRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(book_id = id, username = %user.username, "Book deleted");

    Ok(Json(ApiResponse::message("Book deleted successfully")))
}
