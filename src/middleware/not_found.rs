use axum::{extract::State, http::Uri};

use crate::{
    error::{ApiError, ErrorVerbosityProvider, NotFoundError},
    state::ApiState,
};

/// Fallback for unknown paths under `/api`.
pub async fn not_found(State(state): State<ApiState>, uri: Uri) -> ApiError {
    tracing::debug!(%uri, "No route");

    ApiError::NotFound(NotFoundError::new(state.error_verbosity()))
}
