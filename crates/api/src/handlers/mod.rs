//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `bookshelf_db`, map
//! errors via [`AppError`](crate::error::AppError), and wrap results in the
//! [`ApiResponse`](crate::response::ApiResponse) envelope.

pub mod book;
pub mod category;
pub mod user;
