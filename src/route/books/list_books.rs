use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    error::{ApiError, ErrorVerbosityProvider, InternalServerError},
    state::ApiState,
    store::book::Book,
};

/// Every book in the catalog, serialized as a bare JSON array.
#[derive(Debug)]
pub struct ListBooksResponse {
    pub books: Vec<Book>,
}

impl IntoResponse for ListBooksResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.books)).into_response()
    }
}

/// Loads the whole catalog.
///
/// Shared by the list and the create routes.
pub async fn all_books(state: &ApiState) -> Result<ListBooksResponse, ApiError> {
    let books = state
        .books()
        .list_books()
        .await
        .map_err(|err| InternalServerError::from_store_error(state.error_verbosity(), err))?;

    Ok(ListBooksResponse { books })
}

#[tracing::instrument(skip_all)]
pub async fn list_books(State(state): State<ApiState>) -> Result<ListBooksResponse, ApiError> {
    all_books(&state).await
}
