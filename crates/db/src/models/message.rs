//! Inbound contact-form messages.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Message {
    pub id: DbId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub created_at: Timestamp,
}

/// A contact-form submission. Stored exactly as received.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMessage {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}
