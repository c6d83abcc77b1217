//! Admin-only gate for the `/admin` routes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use folio_core::error::CoreError;
use folio_core::roles::ROLE_ADMIN;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Extracts an [`AuthUser`] and insists on the `admin` role.
///
/// No token or a bad one is a 401; a valid token with another role is a 403.
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        if user.role != ROLE_ADMIN {
            tracing::warn!(
                username = %user.username,
                role = %user.role,
                token_id = %user.token_id,
                path = %parts.uri.path(),
                "Non-admin token on admin route"
            );
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }

        Ok(RequireAdmin(user))
    }
}
