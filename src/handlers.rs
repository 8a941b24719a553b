use crate::catalog::{Catalog, catalog};
use crate::design::{GatewayClient, generate_design};
use crate::error::{AppError, AppResult};
use crate::models::{DesignRequest, DesignResponse, HealthResponse};
use crate::resources::{ResourceRequest, ResourceSummary, estimate};
use axum::{
    Extension,
    extract::{Json, rejection::JsonRejection},
    response::Json as ResponseJson,
};
use tracing::{debug, info};

/// Health check handler
/// Returns the service status and health information
pub async fn health_check() -> AppResult<ResponseJson<HealthResponse>> {
    debug!("Health check endpoint called");

    let response = HealthResponse::ok();

    info!("Health check successful");
    Ok(ResponseJson(response))
}

/// Habitat designer handler
/// Forwards the request to the AI gateway and returns a normalized design
pub async fn design_handler(
    Extension(gateway): Extension<GatewayClient>,
    payload: Result<Json<DesignRequest>, JsonRejection>,
) -> AppResult<ResponseJson<DesignResponse>> {
    let Json(request) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;

    info!(
        "Received habitat design request: planet={} residents={} size={} shape={}",
        request.planet, request.residents, request.size, request.shape
    );

    let design = generate_design(&gateway, &request).await?;

    let response = DesignResponse::new(design, request.input_parameters());
    info!("Successfully generated habitat design");
    Ok(ResponseJson(response))
}

/// Catalog handler
/// Returns the locations, module library, crew roles and form options
pub async fn catalog_handler() -> ResponseJson<Catalog> {
    debug!("Catalog endpoint called");
    ResponseJson(catalog())
}

/// Resource estimate handler
/// Sums module upkeep and crew life-support needs for a layout
pub async fn resources_handler(
    payload: Result<Json<ResourceRequest>, JsonRejection>,
) -> AppResult<ResponseJson<ResourceSummary>> {
    let Json(request) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;

    let summary = estimate(&request);
    info!(
        "Estimated resources: power={} crew={} unknown={}",
        summary.power,
        summary.crew_total,
        summary.unknown.len()
    );
    Ok(ResponseJson(summary))
}
