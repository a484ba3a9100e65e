use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::JsonResponse;

/// Why a request was rejected before it reached the database.
///
/// Every variant surfaces as the same `400 Bad request`; the distinction only
/// shows up in logs and tests.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("article id `{0}` is not an integer")]
    InvalidId(String),
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{0}` has the wrong type")]
    WrongType(&'static str),
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    #[error("invalid query parameter `{0}`")]
    InvalidQuery(&'static str),
    #[error("malformed query string: {0}")]
    MalformedQuery(String),
    #[error("field `{0}` would push the vote tally out of range")]
    OutOfRange(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("bad request: {0}")]
    BadRequest(#[from] ValidationError),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("database error: {0}")]
    DatabaseError(sqlx::Error),
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct RequestErrorJson {
    pub msg: String,
}

impl RequestErrorJson {
    pub fn new(msg: &str) -> RequestErrorJson {
        RequestErrorJson {
            msg: msg.to_string(),
        }
    }
}

impl From<sqlx::Error> for RequestError {
    fn from(value: sqlx::Error) -> Self {
        if let sqlx::Error::Database(e) = &value {
            // Referenced article or user vanished between the pre-check and the insert.
            if e.message().contains("FOREIGN KEY constraint failed") {
                return Self::NotFound("Referenced row not found");
            }
        }
        Self::DatabaseError(value)
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> axum::response::Response {
        self.to_json_response().into_response()
    }
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RequestError::NotFound(_) => StatusCode::NOT_FOUND,
            RequestError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_json_response(&self) -> JsonResponse<RequestErrorJson> {
        let json = match self {
            RequestError::BadRequest(reason) => {
                tracing::debug!(%reason, "rejecting request");
                RequestErrorJson::new("Bad request")
            }
            RequestError::NotFound(what) => {
                tracing::debug!(what, "resource not found");
                RequestErrorJson::new("Not found")
            }
            RequestError::DatabaseError(e) => {
                tracing::error!(error = %e, "database error");
                RequestErrorJson::new("Internal server error")
            }
        };
        (self.status_code(), Json(json))
    }
}
