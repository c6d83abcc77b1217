//! Handlers for visitor contact submissions.
//!
//! Fields are optional and stored exactly as received.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect};
use axum::{Form, Json};
use folio_db::models::message::CreateMessage;
use folio_db::repositories::MessageRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/contact
///
/// Store a message from a JSON body. Returns 201 with the created row.
pub async fn submit_json(
    State(state): State<AppState>,
    Json(input): Json<CreateMessage>,
) -> AppResult<impl IntoResponse> {
    let message = MessageRepo::create(&state.pool, &input).await?;

    tracing::info!(id = message.id, "Contact message received");

    Ok((StatusCode::CREATED, Json(DataResponse { data: message })))
}

/// POST /contact
///
/// Store a message from an HTML form post, then send the browser back to the
/// page with a 303.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(input): Form<CreateMessage>,
) -> AppResult<impl IntoResponse> {
    let message = MessageRepo::create(&state.pool, &input).await?;

    tracing::info!(id = message.id, "Contact message received via form");

    Ok(Redirect::to("/"))
}
