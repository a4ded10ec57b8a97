use axum::async_trait;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use service_core::error::AppError;
use validator::Validate;

/// JSON body extractor that also runs the payload's `Validate` rules.
///
/// Malformed bodies and failed presence checks are rejected with 422 and a
/// `{detail}` body before the handler runs.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::InvalidPayload(rejection.body_text()))?;

        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
