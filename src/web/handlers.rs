use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::analysis::{EconomicParameter, Scenario};
use crate::config::ScenarioConfig;
use crate::error::CstrError;
use crate::models::{EconomicParameters, ReactorParameters, VolumeRange};

use super::state::{AppState, SliderSpec};

// ---------------------------------------------------------------------------
// Error wrapper
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    details: String,
}

#[derive(Debug)]
pub(crate) enum WebError {
    Core(CstrError),
    Blocking(actix_web::error::BlockingError),
}

impl From<CstrError> for WebError {
    fn from(e: CstrError) -> Self {
        WebError::Core(e)
    }
}

impl From<actix_web::error::BlockingError> for WebError {
    fn from(e: actix_web::error::BlockingError) -> Self {
        WebError::Blocking(e)
    }
}

impl std::fmt::Display for WebError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WebError::Core(e) => write!(f, "{e}"),
            WebError::Blocking(e) => write!(f, "Worker pool error: {e}"),
        }
    }
}

impl actix_web::ResponseError for WebError {
    fn error_response(&self) -> HttpResponse {
        let (status, error_type) = match self {
            WebError::Core(
                CstrError::Validation(_)
                | CstrError::ParseError(_)
                | CstrError::InvalidRange(_)
                | CstrError::DivisionByZero(_),
            ) => (actix_web::http::StatusCode::BAD_REQUEST, "Bad Request"),
            WebError::Core(CstrError::NumericDomain(_)) => (
                actix_web::http::StatusCode::UNPROCESSABLE_ENTITY,
                "Unprocessable Entity",
            ),
            _ => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
            ),
        };
        tracing::warn!(status = status.as_u16(), error = %self, "request failed");
        HttpResponse::build(status).json(ErrorBody {
            error: error_type.to_string(),
            details: self.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

/// Parameter snapshot sent by the page. Missing parts fall back to the
/// server's configured defaults.
#[derive(Debug, Default, Deserialize)]
pub struct ScenarioRequest {
    reactor: Option<ReactorParameters>,
    economics: Option<EconomicParameters>,
    v_max: Option<f64>,
}

impl ScenarioRequest {
    fn into_scenario(self, defaults: &ScenarioConfig) -> Scenario {
        Scenario::new(
            self.reactor.unwrap_or(defaults.reactor),
            self.economics.unwrap_or(defaults.economics),
            VolumeRange::up_to(self.v_max.unwrap_or(defaults.range.v_max)),
        )
    }
}

#[derive(Serialize)]
struct DefaultsResponse {
    scenario: ScenarioConfig,
    sliders: Vec<SliderSpec>,
}

#[derive(Deserialize)]
pub struct EvaluateRequest {
    volume: f64,
    #[serde(flatten)]
    scenario: ScenarioRequest,
}

#[derive(Deserialize)]
pub struct SweepRequest {
    parameter: EconomicParameter,
    from: Option<f64>,
    to: Option<f64>,
    steps: Option<usize>,
    #[serde(flatten)]
    scenario: ScenarioRequest,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

pub async fn defaults(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(DefaultsResponse {
        scenario: state.defaults,
        sliders: state.sliders(),
    })
}

pub async fn optimize(
    state: web::Data<AppState>,
    body: web::Json<ScenarioRequest>,
) -> Result<HttpResponse, WebError> {
    let scenario = body.into_inner().into_scenario(&state.defaults);
    let report = web::block(move || scenario.optimize()).await??;
    Ok(HttpResponse::Ok().json(report))
}

pub async fn evaluate(
    state: web::Data<AppState>,
    body: web::Json<EvaluateRequest>,
) -> Result<HttpResponse, WebError> {
    let request = body.into_inner();
    let scenario = request.scenario.into_scenario(&state.defaults);
    let breakdown = scenario.breakdown(request.volume)?;
    Ok(HttpResponse::Ok().json(breakdown))
}

pub async fn sweep(
    state: web::Data<AppState>,
    body: web::Json<SweepRequest>,
) -> Result<HttpResponse, WebError> {
    let request = body.into_inner();
    let (lo, hi) = request.parameter.slider_bounds();
    let scenario = request.scenario.into_scenario(&state.defaults);
    let parameter = request.parameter;
    let (from, to) = (request.from.unwrap_or(lo), request.to.unwrap_or(hi));
    let steps = request.steps.unwrap_or(11);
    let points =
        web::block(move || scenario.sweep(parameter, from, to, steps)).await??;
    Ok(HttpResponse::Ok().json(points))
}

// ---------------------------------------------------------------------------
// Static file handlers
// ---------------------------------------------------------------------------

pub async fn index_html() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../../static/index.html"))
}

pub async fn app_js() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(include_str!("../../static/app.js"))
}
