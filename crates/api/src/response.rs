//! Shared response envelope for every API outcome.
//!
//! Successes and failures alike serialize as
//! `{ "success", "message", "data"?, "error"? }`. Use [`ApiResponse`]
//! instead of ad-hoc `serde_json::json!` bodies so the shape stays uniform.

use serde::Serialize;
use bookshelf_db::models::book::Book;
use bookshelf_db::models::category::Category;
use bookshelf_db::models::user::UserResponse;

use crate::handlers::user::LoginData;
use crate::routes::health::HealthData;

/// Payloads that may appear under `data`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    User(UserResponse),
    Login(LoginData),
    Book(Book),
    Books(Vec<Book>),
    Category(Category),
    Categories(Vec<Category>),
    Health(HealthData),
}

macro_rules! impl_response_data {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ResponseData {
                fn from(value: $ty) -> Self {
                    ResponseData::$variant(value)
                }
            }
        )*
    };
}

impl_response_data! {
    UserResponse => User,
    LoginData => Login,
    Book => Book,
    Vec<Book> => Books,
    Category => Category,
    Vec<Category> => Categories,
    HealthData => Health,
}

/// Standard response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    /// Successful outcome carrying a payload.
    pub fn ok(message: impl Into<String>, data: impl Into<ResponseData>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data.into()),
            error: None,
        }
    }

    /// Successful outcome with nothing to return (e.g. a delete).
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            error: None,
        }
    }

    /// Failed outcome: a short `message` plus the underlying `error` text.
    pub fn error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error: Some(error.into()),
        }
    }
}
