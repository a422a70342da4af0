//! Screening HTTP Routes
//!
//! - `GET /` renders the empty form
//! - `POST /` takes the form submission and renders the result page
//! - `POST /api/screen` takes a JSON feature vector and returns the report

use std::sync::Arc;

use axum::{
    extract::{Form, Json, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;

use super::page::{render_page, PageOutcome};
use crate::features::FeatureVector;
use crate::screening::{ScreeningError, ScreeningHandler, ScreeningReport};

/// Shared screening state
#[derive(Debug, Clone)]
pub struct ScreeningState {
    pub handler: ScreeningHandler,
}

impl ScreeningState {
    pub fn new(handler: ScreeningHandler) -> Self {
        Self { handler }
    }
}

/// Screening routes with shared state
pub fn screening_routes(state: Arc<ScreeningState>) -> Router {
    Router::new()
        .route("/", get(form_handler).post(submit_handler))
        .route("/api/screen", post(api_screen_handler))
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub status: u16,
}

impl From<&ScreeningError> for ErrorResponse {
    fn from(err: &ScreeningError) -> Self {
        Self {
            error: err.to_string(),
            code: err.code().to_string(),
            status: err.status_code(),
        }
    }
}

fn status_of(err: &ScreeningError) -> StatusCode {
    StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Empty form with default inputs
async fn form_handler() -> Html<String> {
    Html(render_page(&FeatureVector::form_defaults(), PageOutcome::Prompt))
}

/// Form submission. Inputs are clamped to the widget bounds first.
async fn submit_handler(
    State(state): State<Arc<ScreeningState>>,
    Form(submitted): Form<FeatureVector>,
) -> Response {
    let inputs = submitted.clamped();

    match state.handler.screen(&inputs) {
        Ok(report) => Html(render_page(&inputs, PageOutcome::Report(&report))).into_response(),
        Err(e) => (
            status_of(&e),
            Html(render_page(&inputs, PageOutcome::Error(&e))),
        )
            .into_response(),
    }
}

/// JSON screening. Values are scored as submitted, without clamping.
async fn api_screen_handler(
    State(state): State<Arc<ScreeningState>>,
    Json(vector): Json<FeatureVector>,
) -> Result<Json<ScreeningReport>, (StatusCode, Json<ErrorResponse>)> {
    state
        .handler
        .screen(&vector)
        .map(Json)
        .map_err(|e| (status_of(&e), Json(ErrorResponse::from(&e))))
}
