//! Book entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use bookshelf_core::types::{DbId, Timestamp};

use crate::models::validation::CheckedInput;

/// A book row from the `books` table.
///
/// `category_name` is not a column: it is filled from a `LEFT JOIN` on reads
/// and left as `None` when the book has no category (or the row came from a
/// query without the join).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Book {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub release_year: i32,
    pub price: i32,
    pub total_page: i32,
    /// `"thin"` or `"thick"`, see [`bookshelf_core::thickness::Thickness`].
    pub thickness: String,
    pub category_id: Option<DbId>,
    pub created_at: Timestamp,
    pub created_by: String,
    pub modified_at: Timestamp,
    pub modified_by: String,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

/// DTO for creating a new book.
///
/// Has no `thickness` field: it is computed from `total_page`, and a
/// client-sent value is dropped during deserialization.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[validate(range(
        min = 1980,
        max = 2024,
        message = "release_year must be between 1980 and 2024"
    ))]
    pub release_year: i32,
    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: i32,
    #[validate(range(min = 1, message = "total_page must be at least 1"))]
    pub total_page: i32,
    pub category_id: Option<DbId>,
}

impl CheckedInput for CreateBook {
    const FIELDS: &'static [&'static str] = &["title", "release_year", "price", "total_page"];
}
