//! The fixed `{message, data|errors, status}` response wrapper.
//!
//! Every JSON body carries a short outcome message, either a `data` payload
//! or per-field `errors`, and the HTTP status code duplicated inside the
//! body. This shape is an external contract and must not drift.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;

use causeway_core::error::FieldErrors;

/// A success body: `{message, data, status}`.
pub fn success<T: Serialize>(status: StatusCode, message: &str, data: &T) -> Response {
    let body = json!({
        "message": message,
        "data": data,
        "status": status.as_u16(),
    });
    (status, Json(body)).into_response()
}

/// A validation-failure body: `{message, errors, status}`.
pub fn failure(status: StatusCode, message: &str, errors: &FieldErrors) -> Response {
    let body = json!({
        "message": message,
        "errors": errors,
        "status": status.as_u16(),
    });
    (status, Json(body)).into_response()
}

/// A payload-less body: `{message, status}`. Used for not-found and server
/// errors.
pub fn message_only(status: StatusCode, message: &str) -> Response {
    let body = json!({
        "message": message,
        "status": status.as_u16(),
    });
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_success_envelope_shape() {
        let response = success(StatusCode::CREATED, "Cause created", &json!({"id": "x"}));

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_of(response).await;
        assert_eq!(
            body,
            json!({"message": "Cause created", "data": {"id": "x"}, "status": 201})
        );
    }

    #[tokio::test]
    async fn test_failure_envelope_shape() {
        let errors = FieldErrors::single("title", "This field is required.");
        let response = failure(StatusCode::BAD_REQUEST, "Cause create failed", &errors);

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_of(response).await;
        assert_eq!(
            body,
            json!({
                "message": "Cause create failed",
                "errors": {"title": ["This field is required."]},
                "status": 400,
            })
        );
    }

    #[tokio::test]
    async fn test_message_only_envelope_shape() {
        let response = message_only(StatusCode::NOT_FOUND, "Cause Not Found");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_of(response).await;
        assert_eq!(body, json!({"message": "Cause Not Found", "status": 404}));
    }
}
