pub mod config;

use std::time::Instant;

use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use http::{HeaderValue, StatusCode};
use serde::{Deserialize, Serialize};
use tone_core::{GRID_SIZE, Grid, evaluate_grid, tone_field};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::ServerConfig;

const READY_MESSAGE: &str = "Tone Field Physics Engine Ready";

/// Router with the default configuration.
pub fn app() -> Router {
    router(&ServerConfig::default())
}

pub fn router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(ready))
        .route("/api/field", get(field))
        .layer(cors_layer(&config.allowed_origins))
}

// Credentialed CORS forbids `*`, so methods and headers mirror the preflight.
fn cors_layer(origins: &[HeaderValue]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins.iter().cloned()))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[derive(Debug)]
struct FieldQuery {
    tension: f64,
    frequency: f64,
}

impl FieldQuery {
    /// Repeated keys keep their last value.
    fn from_pairs(pairs: &[(String, String)]) -> Result<Self, ApiError> {
        Ok(Self {
            tension: required_f64(pairs, "tension")?,
            frequency: required_f64(pairs, "frequency")?,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct FieldResponse {
    z_values: Vec<f64>,
    size: usize,
    tension: f64,
    frequency: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct ReadyResponse {
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

async fn ready() -> Json<ReadyResponse> {
    Json(ReadyResponse {
        message: READY_MESSAGE.to_string(),
    })
}

async fn field(
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<FieldResponse>, ApiError> {
    let Query(pairs) = query.map_err(|err| {
        log::debug!("rejected field query: {}", err.body_text());
        ApiError::unprocessable(format!("invalid query: {}", err.body_text()))
    })?;
    let FieldQuery { tension, frequency } = FieldQuery::from_pairs(&pairs)?;

    let start = Instant::now();
    let grid = Grid::square(GRID_SIZE);
    let z_values = evaluate_grid(&tone_field(tension, frequency), &grid);
    // `frequency * r * PI` can overflow for large finite inputs.
    if z_values.iter().any(|value| !value.is_finite()) {
        return Err(ApiError::unprocessable(format!(
            "field is not finite for tension={tension}, frequency={frequency}"
        )));
    }
    log::debug!(
        "evaluated {}x{} field (tension={tension}, frequency={frequency}) in {:.3}ms",
        grid.size(),
        grid.size(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(Json(FieldResponse {
        z_values,
        size: grid.size(),
        tension,
        frequency,
    }))
}

fn required_f64(pairs: &[(String, String)], name: &str) -> Result<f64, ApiError> {
    let raw = pairs
        .iter()
        .rev()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
        .ok_or_else(|| ApiError::unprocessable(format!("invalid query: missing field `{name}`")))?;
    let value = raw.trim().parse::<f64>().map_err(|err| {
        ApiError::unprocessable(format!("invalid query: invalid float for `{name}`: {err}"))
    })?;
    require_finite(name, value)
}

// JSON has no representation for NaN or infinities.
fn require_finite(name: &str, value: f64) -> Result<f64, ApiError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ApiError::unprocessable(format!(
            "{name} must be a finite number, got {value}"
        )))
    }
}
