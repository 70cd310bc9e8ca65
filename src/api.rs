//! JSON API for the web frontend

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::config::TripPlannerConfig;
use crate::gemini::GeminiClient;
use crate::models::TripPlan;
use crate::planner::TravelPlanner;

/// Planning request body: one block of free-text preferences
#[derive(Serialize, Deserialize)]
pub struct PlanRequest {
    pub text: String,
}

/// Generic error body; never carries operator detail
#[derive(Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

pub fn router(config: Arc<TripPlannerConfig>) -> Router {
    Router::new()
        .route("/plan", post(plan))
        .route("/health", get(health))
        .with_state(config)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn plan(
    State(config): State<Arc<TripPlannerConfig>>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<TripPlan>, (StatusCode, Json<ApiError>)> {
    if request.text.trim().is_empty() {
        warn!("Rejecting planning request with empty text");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError {
                error: "Please enter your travel preferences to generate a plan.".to_string(),
            }),
        ));
    }

    // Each planning request gets its own client; nothing is shared
    // between requests.
    let client = GeminiClient::new(&config.gemini).map_err(|e| {
        error!("Failed to construct generation client: {e}");
        generic_failure()
    })?;
    let planner = TravelPlanner::new(client);

    match planner.plan_trip(&request.text).await {
        Some(trip_plan) => Ok(Json(trip_plan)),
        None => Err(generic_failure()),
    }
}

fn generic_failure() -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::BAD_GATEWAY,
        Json(ApiError {
            error: "Failed to generate travel plan. Please check your API key and try again."
                .to_string(),
        }),
    )
}
