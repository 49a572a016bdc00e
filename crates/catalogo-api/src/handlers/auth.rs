//! Auth handlers for /autoriza/register and /autoriza/login.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use catalogo_core::AppError;
use catalogo_entity::user::NewUser;

use crate::dto::request::{check_shape, LoginRequest, RegisterRequest};
use crate::dto::response::{TokenResponse, UserDto};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /autoriza/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserDto>), ApiError> {
    check_shape(&req)?;

    let min_len = state.config.auth.min_password_length;
    if req.password.chars().count() < min_len {
        return Err(ApiError(AppError::validation(format!(
            "password must be at least {min_len} characters"
        ))));
    }

    let password_hash = state.password_hasher.hash_password(&req.password)?;
    let user = state
        .user_repo
        .create(&NewUser {
            email: req.email,
            password_hash,
        })
        .await?;

    info!(user_id = %user.id, "User registered");
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /autoriza/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    check_shape(&req)?;

    // Same error for unknown email and wrong password: no account probing.
    let user = state
        .user_repo
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;

    let verified = state
        .password_hasher
        .verify_password(&req.password, &user.password_hash)?;
    if !verified {
        return Err(ApiError(AppError::unauthorized("Invalid credentials")));
    }

    let issued = state.jwt_encoder.generate_token(user.id, &user.email)?;

    info!(user_id = %user.id, "User logged in");
    Ok(Json(TokenResponse {
        token: issued.token,
        expires_at: issued.expires_at,
        email: user.email,
    }))
}
