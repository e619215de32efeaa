use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::error;

use crate::{
    error::AppError,
    message::{RelayRequest, RelayResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<RelayRequest>, JsonRejection>,
) -> Result<Json<RelayResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        error!(error = %rejection, "API route error");
        AppError::Internal
    })?;

    let text = state.relay.handle(&request).await?;
    Ok(Json(RelayResponse::success(text)))
}
