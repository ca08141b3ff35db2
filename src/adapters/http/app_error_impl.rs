use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        tracing::error!(error = ?self, "Request failed");

        match self {
            AppError::InvalidInput(msg) => error_resp(StatusCode::BAD_REQUEST, msg),
            AppError::DuplicateEmail => error_resp(
                StatusCode::CONFLICT,
                "This email is already on the waitlist!".into(),
            ),
            // Store internals were already logged where they occurred; clients
            // only ever see the generic message.
            AppError::Database(_) => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong. Please try again.".into(),
            ),
        }
    }
}

fn error_resp(status: StatusCode, message: String) -> Response {
    let body = serde_json::json!({ "error": message });
    (status, Json(body)).into_response()
}
