use axum::{extract::State, http::StatusCode};

use crate::{
    error::{ApiError, ErrorVerbosityProvider, InternalServerError, UploadError},
    extractor::multipart::ApiMultipart,
    state::ApiState,
    store::upload::UploadedFile,
};

/// Name of the form field carrying the file.
pub const FILE_FIELD: &str = "file";

/// Accepts a `multipart/form-data` body with a `file` field and hands it to the upload store.
#[tracing::instrument(skip_all)]
pub async fn upload_file(
    State(state): State<ApiState>,
    ApiMultipart(mut multipart): ApiMultipart,
) -> Result<StatusCode, ApiError> {
    let verbosity = state.error_verbosity();

    let file = loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|err| {
                tracing::warn!(%err, "Malformed multipart body");

                UploadError::from_multipart_error(verbosity, err)
            })?
            .ok_or_else(|| {
                tracing::warn!("Missing `file` field");

                UploadError::new(verbosity, format!("Missing `{FILE_FIELD}` field"))
            })?;

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(ToOwned::to_owned).ok_or_else(|| {
            tracing::warn!("`file` field without filename");

            UploadError::new(verbosity, format!("`{FILE_FIELD}` field has no filename"))
        })?;
        let content_type = field.content_type().map(ToOwned::to_owned);

        let content = field.bytes().await.map_err(|err| {
            tracing::warn!(%err, "Failed to read file content");

            UploadError::from_multipart_error(verbosity, err)
        })?;

        break UploadedFile {
            file_name,
            content_type,
            content,
        };
    };

    state
        .uploads()
        .persist(file)
        .await
        .map_err(|err| {
            InternalServerError::new(verbosity, "Error storing the file", anyhow::anyhow!(err))
        })?;

    Ok(StatusCode::CREATED)
}
