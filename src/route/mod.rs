use axum::{middleware, Router};

use crate::{
    middleware::{
        method_not_allowed::method_not_allowed, not_found::not_found,
        trace_response_body::trace_response_body,
    },
    state::ApiState,
};

pub mod books;
pub mod upload;

/// Everything served under `/api`.
pub fn api(state: ApiState, max_upload_bytes: usize) -> Router<ApiState> {
    Router::<ApiState>::new()
        .merge(books::app::app())
        .merge(upload::app::app(max_upload_bytes))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            method_not_allowed::<ApiState>,
        ))
        .layer(middleware::from_fn_with_state(state, trace_response_body))
}
