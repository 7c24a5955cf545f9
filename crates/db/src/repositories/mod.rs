//! Repository layer: one zero-sized struct per table with async query methods.
//!
//! Repositories take `&PgPool` and return `sqlx::Error` untouched; mapping to
//! HTTP status codes happens in the API crate.

pub mod book_repo;
pub mod category_repo;
pub mod user_repo;

pub use book_repo::BookRepo;
pub use category_repo::CategoryRepo;
pub use user_repo::UserRepo;
