//! Handler for `POST /auth/login`.

use axum::extract::State;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::roles::ROLE_ADMIN;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

/// POST /api/v1/auth/login
///
/// Check the configured admin credentials and issue an access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let admin = &state.config.admin;

    // Verify even on a username mismatch so both failures cost the same.
    let password_valid = verify_password(&input.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if input.username != admin.username || !password_valid {
        tracing::warn!(username = %input.username, "Failed admin login");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    let access_token = generate_access_token(&admin.username, ROLE_ADMIN, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(username = %admin.username, "Admin logged in");

    Ok(Json(LoginResponse {
        access_token,
        token_type: "Bearer",
        expires_in: state.config.jwt.expires_in_secs(),
    }))
}
