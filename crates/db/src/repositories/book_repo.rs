//! Repository for the `books` table.

use sqlx::PgPool;
use bookshelf_core::thickness::Thickness;
use bookshelf_core::types::DbId;

use crate::models::book::{Book, CreateBook};

/// Column list used by `RETURNING` clauses (no join available there).
const COLUMNS: &str = "id, title, description, image_url, release_year, price, total_page, \
                       thickness, category_id, created_at, created_by, modified_at, modified_by";

/// Read projection joined with `categories` to fill `category_name`.
const JOINED_SELECT: &str = "SELECT b.id, b.title, b.description, b.image_url, b.release_year, \
                                    b.price, b.total_page, b.thickness, b.category_id, \
                                    b.created_at, b.created_by, b.modified_at, b.modified_by, \
                                    c.name AS category_name \
                             FROM books b \
                             LEFT JOIN categories c ON c.id = b.category_id";

/// Provides create / read / hard-delete operations for books.
pub struct BookRepo;

impl BookRepo {
    /// Insert a new book with a precomputed thickness, stamped with `actor`.
    ///
    /// The returned row has `category_name = None`; callers that want it
    /// look it up separately.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBook,
        thickness: Thickness,
        actor: &str,
    ) -> Result<Book, sqlx::Error> {
        let query = format!(
            "INSERT INTO books (title, description, image_url, release_year, price,
                                total_page, thickness, category_id, created_by, modified_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.release_year)
            .bind(input.price)
            .bind(input.total_page)
            .bind(thickness.as_str())
            .bind(input.category_id)
            .bind(actor)
            .fetch_one(pool)
            .await
    }

    /// Find a book by its ID, including its category name.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} WHERE b.id = $1");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all books ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} ORDER BY b.id ASC");
        sqlx::query_as::<_, Book>(&query).fetch_all(pool).await
    }

    /// List the books of one category ordered by ID ascending.
    ///
    /// Does not check that the category exists; an unknown ID yields an
    /// empty list.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} WHERE b.category_id = $1 ORDER BY b.id ASC");
        sqlx::query_as::<_, Book>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Check whether a book with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Permanently delete a book by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
