//! Conversion of album store failures into HTTP responses.

use super::IndentedJson;
use crate::album_store::AlbumStoreError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{debug, error};

pub const MESSAGE_DUPLICATE_ID: &str = "ID already exists.";
pub const MESSAGE_DUPLICATE_TITLE: &str = "Album already exists.";
pub const MESSAGE_EMPTY_ID: &str = "ID must not be empty.";
pub const MESSAGE_ID_MISMATCH: &str = "Album ID does not match path ID.";
pub const MESSAGE_INTERNAL_ERROR: &str = "Internal server error";

#[derive(Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> ApiError {
        ApiError {
            status,
            message: message.into(),
        }
    }

    /// Maps a store error to a response. Each route reports a missing album
    /// with its own wording, hence `not_found_message`.
    pub fn from_store_error(err: AlbumStoreError, not_found_message: &str) -> ApiError {
        match err {
            AlbumStoreError::NotFound(_) => ApiError::new(StatusCode::NOT_FOUND, not_found_message),
            AlbumStoreError::DuplicateId(_) => {
                ApiError::new(StatusCode::BAD_REQUEST, MESSAGE_DUPLICATE_ID)
            }
            AlbumStoreError::DuplicateTitle(_) => {
                ApiError::new(StatusCode::BAD_REQUEST, MESSAGE_DUPLICATE_TITLE)
            }
            AlbumStoreError::EmptyId => ApiError::new(StatusCode::BAD_REQUEST, MESSAGE_EMPTY_ID),
            AlbumStoreError::IdMismatch { .. } => {
                ApiError::new(StatusCode::BAD_REQUEST, MESSAGE_ID_MISMATCH)
            }
            AlbumStoreError::LockPoisoned => {
                error!("Album store lock poisoned, cannot serve request");
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, MESSAGE_INTERNAL_ERROR)
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!("Rejected album body: {}", rejection.body_text());
        ApiError::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = MessageBody {
            message: &self.message,
        };
        (self.status, IndentedJson(body)).into_response()
    }
}
