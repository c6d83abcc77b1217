//! Domain errors raised below the HTTP layer.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No row of `entity` has this id.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// An admin write carried a field the content model rejects.
    #[error("Invalid field: {0}")]
    Validation(String),

    /// Missing, malformed or expired admin credentials.
    #[error("Not authenticated: {0}")]
    Unauthorized(String),

    /// Valid token, but not an admin one.
    #[error("Not permitted: {0}")]
    Forbidden(String),
}
