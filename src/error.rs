use std::borrow::Cow;

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use derive_more::From;

use crate::store::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorVerbosity {
    /// Server returns only the appropriate status code.
    StatusCode,
    /// Server returns a short plain text message with the appropriate status code.
    Message,
    /// Server returns the message followed by the error details and the appropriate status code.
    Full,
}

impl ErrorVerbosity {
    pub fn should_generate_message(&self) -> bool {
        matches!(self, ErrorVerbosity::Message | ErrorVerbosity::Full)
    }

    pub fn should_generate_error_reason(&self) -> bool {
        matches!(self, ErrorVerbosity::Full)
    }
}

pub trait ErrorVerbosityProvider {
    fn error_verbosity(&self) -> ErrorVerbosity;
}

#[derive(Debug, From)]
/// API error
///
/// Rendered as a status code and a short `text/plain` body.
pub enum ApiError {
    /// A store operation failed. Details only go to the log unless [`ErrorVerbosity::Full`].
    InternalServerError(InternalServerError),
    /// The request body could not be decoded.
    Body(BodyError),
    /// The multipart form or its `file` field could not be read.
    Upload(UploadError),
    MethodNotAllowed(MethodNotAllowedError),
    NotFound(NotFoundError),
}

impl ApiError {
    fn verbosity(&self) -> ErrorVerbosity {
        match self {
            ApiError::InternalServerError(err) => err.verbosity,
            ApiError::Body(err) => err.verbosity,
            ApiError::Upload(err) => err.verbosity,
            ApiError::MethodNotAllowed(err) => err.verbosity,
            ApiError::NotFound(err) => err.verbosity,
        }
    }

    fn message(&self) -> Cow<'static, str> {
        match self {
            ApiError::InternalServerError(err) => Cow::Borrowed(err.message),
            ApiError::Body(err) => Cow::Owned(err.body_error_reason.clone()),
            ApiError::Upload(err) if err.status_code == StatusCode::PAYLOAD_TOO_LARGE => {
                Cow::Borrowed("File too large")
            }
            ApiError::Upload(_) => Cow::Borrowed("Error retrieving the file"),
            ApiError::MethodNotAllowed(_) => Cow::Borrowed("Method not allowed"),
            ApiError::NotFound(_) => Cow::Borrowed("Not found"),
        }
    }

    fn reason(&self) -> Option<&str> {
        match self {
            ApiError::InternalServerError(err) => err.internal_server_error.as_deref(),
            ApiError::Body(err) => err.body_expected_schema.as_deref(),
            ApiError::Upload(err) => err.upload_error_reason.as_deref(),
            ApiError::MethodNotAllowed(_) | ApiError::NotFound(_) => None,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Body(_) => StatusCode::BAD_REQUEST,
            ApiError::Upload(err) => err.status_code,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let verbosity = self.verbosity();

        if !verbosity.should_generate_message() {
            return status_code.into_response();
        }

        let message = self.message();

        match self.reason() {
            Some(reason) if verbosity.should_generate_error_reason() => {
                (status_code, format!("{message}\n\n{reason}")).into_response()
            }
            _ => (status_code, message.into_owned()).into_response(),
        }
    }
}

#[derive(Debug)]
pub struct InternalServerError {
    verbosity: ErrorVerbosity,
    message: &'static str,
    internal_server_error: Option<String>,
}

impl InternalServerError {
    pub fn new<E: Into<anyhow::Error>>(
        verbosity: ErrorVerbosity,
        message: &'static str,
        err: E,
    ) -> Self {
        let err: anyhow::Error = err.into();
        let err = format!("{err:#}");
        tracing::error!(%err, public_message = message, "Internal server error");

        let internal_server_error = verbosity.should_generate_error_reason().then_some(err);

        InternalServerError {
            verbosity,
            message,
            internal_server_error,
        }
    }

    pub fn from_store_error(verbosity: ErrorVerbosity, err: StoreError) -> Self {
        let message = err.message();

        Self::new(verbosity, message, err)
    }
}

#[derive(Debug)]
pub struct BodyError {
    verbosity: ErrorVerbosity,
    body_error_reason: String,
    body_expected_schema: Option<String>,
}

impl BodyError {
    pub fn new(
        verbosity: ErrorVerbosity,
        body_error_reason: String,
        body_expected_schema: String,
    ) -> Self {
        let body_expected_schema = verbosity
            .should_generate_error_reason()
            .then_some(body_expected_schema)
            .filter(|schema| !schema.is_empty());

        BodyError {
            verbosity,
            body_error_reason,
            body_expected_schema,
        }
    }
}

#[derive(Debug)]
pub struct UploadError {
    verbosity: ErrorVerbosity,
    status_code: StatusCode,
    upload_error_reason: Option<String>,
}

impl UploadError {
    pub fn new(verbosity: ErrorVerbosity, upload_error_reason: impl Into<String>) -> Self {
        Self::with_status(verbosity, StatusCode::BAD_REQUEST, upload_error_reason)
    }

    /// Keeps `413` for bodies over the limit, everything else is a `400`.
    pub fn from_multipart_error(verbosity: ErrorVerbosity, err: MultipartError) -> Self {
        let status_code = match err.status() {
            StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        };

        Self::with_status(verbosity, status_code, err.body_text())
    }

    fn with_status(
        verbosity: ErrorVerbosity,
        status_code: StatusCode,
        upload_error_reason: impl Into<String>,
    ) -> Self {
        let upload_error_reason = verbosity
            .should_generate_error_reason()
            .then(|| upload_error_reason.into());

        UploadError {
            verbosity,
            status_code,
            upload_error_reason,
        }
    }
}

#[derive(Debug)]
pub struct MethodNotAllowedError {
    verbosity: ErrorVerbosity,
}

impl MethodNotAllowedError {
    pub fn new(verbosity: ErrorVerbosity) -> Self {
        MethodNotAllowedError { verbosity }
    }
}

#[derive(Debug)]
pub struct NotFoundError {
    verbosity: ErrorVerbosity,
}

impl NotFoundError {
    pub fn new(verbosity: ErrorVerbosity) -> Self {
        NotFoundError { verbosity }
    }
}
