use axum::{
    body::HttpBody,
    extract::{FromRequest, FromRequestParts, Path},
    http::{request::Parts, Request},
    BoxError, Json,
};
use serde::de::DeserializeOwned;

use crate::errors::{RequestError, ValidationError};

/// The `:article_id` path segment, parsed as an integer before any query runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        raw.parse::<i64>()
            .map(ArticleId)
            .map_err(|_| ValidationError::InvalidId(raw.to_string()))
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for ArticleId
where
    S: Send + Sync,
{
    type Rejection = RequestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ValidationError::InvalidId(rejection.body_text()))?;
        Ok(ArticleId::parse(&raw)?)
    }
}

/// `axum::Json`, except that a body which fails to parse is answered with the
/// API's own `400 {"msg": "Bad request"}`.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

#[axum::async_trait]
impl<S, B, T> FromRequest<S, B> for ValidJson<T>
where
    T: DeserializeOwned,
    B: HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
    S: Send + Sync,
{
    type Rejection = RequestError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidJson(value)),
            Err(rejection) => Err(ValidationError::MalformedBody(rejection.body_text()).into()),
        }
    }
}
