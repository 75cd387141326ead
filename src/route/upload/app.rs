use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::state::ApiState;

pub fn app(max_upload_bytes: usize) -> Router<ApiState> {
    Router::<ApiState>::new().route(
        "/upload",
        post(super::upload_file::upload_file).layer(DefaultBodyLimit::max(max_upload_bytes)),
    )
}
