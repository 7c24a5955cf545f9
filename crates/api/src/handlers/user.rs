//! Handlers for the `/users` resource (login and admin bootstrap).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;
use bookshelf_core::audit::SYSTEM_ACTOR;
use bookshelf_core::error::CoreError;
use bookshelf_db::models::user::{CreateUser, UserResponse};
use bookshelf_db::models::validation::CheckedInput;
use bookshelf_db::repositories::UserRepo;

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_dummy, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Username of the bootstrap administrator.
pub const ADMIN_USERNAME: &str = "admin";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /users/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

impl CheckedInput for LoginRequest {
    const FIELDS: &'static [&'static str] = &["username", "password"];
}

/// Successful login payload.
#[derive(Debug, Serialize)]
pub struct LoginData {
    pub token: String,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/users/login
///
/// Unknown username and wrong password produce the same 401, and both run one
/// Argon2 verification.
pub async fn login(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<LoginRequest>,
) -> AppResult<Json<ApiResponse>> {
    let Some(user) = UserRepo::find_by_username(&state.pool, &input.username).await? else {
        verify_dummy(&input.password);
        tracing::warn!(username = %input.username, "Login failed: unknown user");
        return Err(AppError::InvalidCredentials);
    };

    if !verify_password(&input.password, &user.password_hash) {
        tracing::warn!(username = %input.username, "Login failed: wrong password");
        return Err(AppError::InvalidCredentials);
    }

    let token = generate_token(user.id, &user.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Failed to generate token: {e}")))?;

    tracing::info!(user_id = user.id, username = %user.username, "User logged in");

    Ok(Json(ApiResponse::ok(
        "Login successful",
        LoginData {
            token,
            user: user.into(),
        },
    )))
}

/// POST /api/users/seed-admin
///
/// Idempotent: an existing admin row is left untouched.
pub async fn seed_admin(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<ApiResponse>)> {
    if let Some(existing) = UserRepo::find_by_username(&state.pool, ADMIN_USERNAME).await? {
        return Ok((
            StatusCode::OK,
            Json(ApiResponse::ok(
                "Admin user already exists",
                UserResponse::from(existing),
            )),
        ));
    }

    let password_hash = hash_password(&state.config.admin.default_password)
        .map_err(|e| CoreError::Internal(format!("Failed to hash password: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: ADMIN_USERNAME.to_string(),
            password_hash,
            created_by: SYSTEM_ACTOR.to_string(),
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "Admin user seeded");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "Admin user created successfully",
            UserResponse::from(user),
        )),
    ))
}

/// POST /api/users/reset-admin-password
///
/// Restores the configured default password on the admin row.
pub async fn reset_admin_password(State(state): State<AppState>) -> AppResult<Json<ApiResponse>> {
    let password_hash = hash_password(&state.config.admin.default_password)
        .map_err(|e| CoreError::Internal(format!("Failed to hash password: {e}")))?;

    let updated =
        UserRepo::update_password(&state.pool, ADMIN_USERNAME, &password_hash, SYSTEM_ACTOR)
            .await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFoundByKey {
            entity: "User",
            key: ADMIN_USERNAME.to_string(),
        }));
    }

    tracing::info!("Admin password reset to default");

    Ok(Json(ApiResponse::message("Admin password reset successfully")))
}
