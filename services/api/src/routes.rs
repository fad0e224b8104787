use crate::infra::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use ventalms::directory::{Company, CompanyDirectory, CompanyUpdate, NewCompany};
use ventalms::error::AppError;
use ventalms::program::{
    self, Milestone, ProgramId, ProgramType, Resource, ScoringCriterion, TARGET_WEIGHT_SUM,
};

#[derive(Debug, Deserialize)]
pub(crate) struct ScoringValidationRequest {
    pub(crate) criteria: Vec<ScoringCriterion>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoringValidationResponse {
    pub(crate) total: u32,
    pub(crate) criteria_count: usize,
}

pub(crate) fn api_router(directory: Arc<CompanyDirectory>) -> Router {
    Router::new()
        .route(
            "/api/v1/companies",
            get(list_companies).post(create_company),
        )
        .route(
            "/api/v1/companies/:company_id",
            get(get_company).put(update_company),
        )
        .with_state(directory)
        .route("/api/v1/programs/:program_id", get(program_endpoint))
        .route(
            "/api/v1/programs/:program_id/milestones",
            get(milestones_endpoint),
        )
        .route("/api/v1/resources", get(resources_endpoint))
        .route(
            "/api/v1/scoring/validate",
            post(validate_scoring_endpoint),
        )
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn list_companies(
    State(directory): State<Arc<CompanyDirectory>>,
) -> Json<Vec<Company>> {
    Json(directory.list().await)
}

pub(crate) async fn get_company(
    State(directory): State<Arc<CompanyDirectory>>,
    Path(company_id): Path<u32>,
) -> Result<Json<Company>, AppError> {
    let company = directory.get(company_id).await?;
    Ok(Json(company))
}

pub(crate) async fn create_company(
    State(directory): State<Arc<CompanyDirectory>>,
    Json(draft): Json<NewCompany>,
) -> Result<(StatusCode, Json<Company>), AppError> {
    let company = directory.create(draft).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

pub(crate) async fn update_company(
    State(directory): State<Arc<CompanyDirectory>>,
    Path(company_id): Path<u32>,
    Json(update): Json<CompanyUpdate>,
) -> Result<Json<Company>, AppError> {
    let company = directory.update(company_id, update).await?;
    Ok(Json(company))
}

pub(crate) async fn program_endpoint(
    Path(program_id): Path<String>,
) -> Result<Json<ProgramType>, AppError> {
    let id: ProgramId = program_id.parse()?;
    Ok(Json(program::program_type(id)))
}

pub(crate) async fn milestones_endpoint(
    Path(program_id): Path<String>,
) -> Result<Json<&'static [Milestone]>, AppError> {
    let id: ProgramId = program_id.parse()?;
    Ok(Json(program::milestones(id)))
}

pub(crate) async fn resources_endpoint() -> Json<&'static [Resource]> {
    Json(program::resource_catalog())
}

pub(crate) async fn validate_scoring_endpoint(
    Json(payload): Json<ScoringValidationRequest>,
) -> Result<Json<ScoringValidationResponse>, AppError> {
    program::validate_weights(&payload.criteria)?;
    Ok(Json(ScoringValidationResponse {
        total: TARGET_WEIGHT_SUM,
        criteria_count: payload.criteria.len(),
    }))
}
