//! Waitlist signup route.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
    routing::post,
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    use_cases::waitlist::{JoinOutcome, WaitlistSubmission},
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JoinWaitlistPayload {
    email: Option<String>,
    monthly_revenue: Option<String>,
    platform: Option<String>,
    biggest_pain: Option<String>,
    honeypot: Option<String>,
}

#[derive(Serialize)]
struct JoinWaitlistResponse {
    success: bool,
    message: &'static str,
}

/// POST /api/waitlist
/// Validates the submission and writes one row; duplicate emails get a 409.
/// Without a configured database the submission is logged and still succeeds.
async fn join_waitlist(
    State(app_state): State<AppState>,
    payload: Result<Json<JoinWaitlistPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    // Malformed or non-JSON bodies fail at the parsing boundary.
    let Json(payload) = payload.map_err(|_| AppError::InvalidInput("Invalid request".into()))?;

    let submission = WaitlistSubmission {
        email: payload.email,
        monthly_revenue: payload.monthly_revenue,
        platform: payload.platform,
        biggest_pain: payload.biggest_pain,
        honeypot: payload.honeypot,
    };

    let outcome = app_state.waitlist_use_cases.join(submission).await?;

    let message = match outcome {
        JoinOutcome::Joined => "Successfully joined the waitlist!",
        JoinOutcome::LoggedOnly => "Waitlist joined (dev mode: database not configured)",
    };

    Ok(Json(JoinWaitlistResponse {
        success: true,
        message,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(join_waitlist))
}
