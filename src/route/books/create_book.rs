use axum::extract::State;

use crate::{
    error::{ApiError, ErrorVerbosityProvider, InternalServerError},
    extractor::json::ApiJson,
    state::ApiState,
    store::book::NewBook,
};

use super::list_books::{all_books, ListBooksResponse};

/// Stores a new book and answers with the whole catalog, not just the created record.
#[tracing::instrument(skip_all)]
pub async fn create_book(
    State(state): State<ApiState>,
    ApiJson(new_book): ApiJson<NewBook>,
) -> Result<ListBooksResponse, ApiError> {
    let book = state
        .books()
        .insert_book(new_book)
        .await
        .map_err(|err| InternalServerError::from_store_error(state.error_verbosity(), err))?;

    tracing::info!(?book, "Book added successfully");

    all_books(&state).await
}
