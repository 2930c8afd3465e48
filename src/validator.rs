//! Request extractors that turn every malformed input into a 422.

use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use casting_core::AppError;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

fn format_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(msg) => msg.to_string(),
                None => format!("{} is invalid ({})", field, error.code),
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn validate<T: Validate>(value: &T) -> Result<(), AppError> {
    value
        .validate()
        .map_err(|errors| AppError::unprocessable(anyhow!("{}", format_errors(&errors))))
}

/// JSON body that is deserialized and then validated.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::unprocessable(anyhow!(rejection.body_text())))?;

        validate(&value)?;

        Ok(ValidatedJson(value))
    }
}

/// Deserializes and validates a raw JSON body. Used where the body must be read
/// only after other checks have passed.
pub fn parse_json_body<T>(body: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_slice(body)
        .map_err(|e| AppError::unprocessable(anyhow!("invalid request body: {e}")))?;

    validate(&value)?;

    Ok(value)
}

/// Integer id from a `/{id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId(pub i64);

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::unprocessable(anyhow!(rejection.body_text())))?;

        Ok(ResourceId(id))
    }
}
