use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Like `axum::Json`, but pretty-printed with two-space indentation.
pub struct IndentedJson<T>(pub T);

impl<T: Serialize> IntoResponse for IndentedJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(bytes) => (
                [
                    (
                        header::CONTENT_TYPE,
                        HeaderValue::from_static("application/json; charset=utf-8"),
                    ),
                    (header::CONTENT_LENGTH, HeaderValue::from(bytes.len())),
                ],
                bytes,
            )
                .into_response(),
            Err(err) => {
                error!("Failed to serialize response body: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
