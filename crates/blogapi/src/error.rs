use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use blogapi_core::store::StoreError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        Error::NotFound(err.to_string())
    }
}

// Extractor failures all mean the client sent something we could not parse.
macro_rules! impl_bad_request {
    ( $( $type:ty ),* $(,)? ) => {
        $(
        impl From<$type> for Error {
            fn from(err: $type) -> Self {
                Error::BadRequest(err.body_text())
            }
        }
        )*
    };
}
impl_bad_request!(PathRejection, QueryRejection, JsonRejection);

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        log::warn!("rejecting request with {status}: {self}");
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
