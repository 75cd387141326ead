use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::error::{ApiError, BodyError, ErrorVerbosityProvider, InternalServerError};

/// Decodes the whole request body as JSON and rejects with an [`ApiError`].
///
/// Unlike [`axum::extract::Json`] the `Content-Type` header is not inspected.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + JsonSchema + Debug + Send,
    S: Send + Sync + ErrorVerbosityProvider,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "json_extractor", skip_all)]
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let verbosity = state.error_verbosity();

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!(?rejection, "Rejection");

            BodyError::new(verbosity, rejection.body_text(), String::new())
        })?;

        match serde_json::from_slice::<T>(&bytes) {
            Ok(value) => {
                tracing::trace!(json=?value, "Extracted");

                Ok(ApiJson(value))
            }
            Err(err) => {
                tracing::warn!(%err, "Rejection");

                let body_expected_schema = serde_yaml::to_string(&schema_for!(T))
                    .map_err(|err| InternalServerError::new(verbosity, "Error decoding body", err))?;

                Err(BodyError::new(verbosity, err.to_string(), body_expected_schema).into())
            }
        }
    }
}
