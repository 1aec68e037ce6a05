//! HTTP surface: the input form, the rendered result and a JSON endpoint.

mod form;
mod render;

pub use form::parse_form;
pub use render::{form_page, result_page};

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::core::MarketDataService;
use crate::report::{Report, ReportRequest, RequestError, build_report};
use crate::series::Lookback;

/// Shared, read-only state of the web handlers.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn MarketDataService>,
    /// Fixed year windows; `None` anchors every request at the current year.
    pub lookback: Option<Lookback>,
}

impl AppState {
    pub fn new(source: Arc<dyn MarketDataService>) -> Self {
        Self {
            source,
            lookback: None,
        }
    }

    #[must_use]
    pub fn with_lookback(mut self, lookback: Lookback) -> Self {
        self.lookback = Some(lookback);
        self
    }

    fn lookback(&self) -> Lookback {
        self.lookback.unwrap_or_else(Lookback::current)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/result", post(result))
        .route("/api/report", post(api_report))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<String> {
    Html(form_page())
}

async fn result(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Html<String>, BadRequest> {
    let request = parse_form(&form)?;
    let report = build_report(state.source.as_ref(), &request, state.lookback()).await?;
    Ok(Html(result_page(&report)))
}

async fn api_report(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<Json<Report>, Response> {
    build_report(state.source.as_ref(), &request, state.lookback())
        .await
        .map(Json)
        .map_err(|e| {
            tracing::warn!(error = %e, "rejected report request");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        })
}

async fn healthz() -> &'static str {
    "ok"
}

struct BadRequest(RequestError);

impl From<RequestError> for BadRequest {
    fn from(e: RequestError) -> Self {
        Self(e)
    }
}

impl IntoResponse for BadRequest {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self.0, "rejected form submission");
        (StatusCode::BAD_REQUEST, self.0.to_string()).into_response()
    }
}
