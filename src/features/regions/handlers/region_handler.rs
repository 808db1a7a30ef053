use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::regions::dtos::{AddRegionRequestDto, RegionDto, UpdateRegionRequestDto};
use crate::features::regions::services::RegionService;
use crate::shared::types::ErrorResponse;

/// 200 with the region, or a bare 404
fn found_or_404(region: Option<RegionDto>) -> Response {
    match region {
        Some(dto) => Json(dto).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// List all regions
#[utoipa::path(
    get,
    path = "/regions",
    responses(
        (status = 200, description = "List of regions", body = Vec<RegionDto>)
    ),
    tag = "regions"
)]
pub async fn list_regions(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<Vec<RegionDto>>> {
    let regions = service.list().await?;
    Ok(Json(regions))
}

/// Get a region by id
#[utoipa::path(
    get,
    path = "/regions/{id}",
    params(
        ("id" = Uuid, Path, description = "Region ID")
    ),
    responses(
        (status = 200, description = "Region details", body = RegionDto),
        (status = 400, description = "Invalid region ID", body = ErrorResponse),
        (status = 404, description = "Region not found")
    ),
    tag = "regions"
)]
pub async fn get_region(
    State(service): State<Arc<RegionService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Response> {
    let region = service.get(id).await?;
    Ok(found_or_404(region))
}

/// Create a region
///
/// The repository assigns the id; the `Location` header points at the new resource.
#[utoipa::path(
    post,
    path = "/regions",
    request_body = AddRegionRequestDto,
    responses(
        (status = 201, description = "Region created", body = RegionDto,
            headers(("location" = String, description = "URL of the created region"))),
        (status = 400, description = "Invalid request body", body = ErrorResponse)
    ),
    tag = "regions"
)]
pub async fn add_region(
    State(service): State<Arc<RegionService>>,
    AppJson(dto): AppJson<AddRegionRequestDto>,
) -> Result<Response> {
    let region = service.create(dto.into()).await?;
    let location = format!("/regions/{}", region.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(region),
    )
        .into_response())
}

/// Replace a region's fields
#[utoipa::path(
    put,
    path = "/regions/{id}",
    params(
        ("id" = Uuid, Path, description = "Region ID")
    ),
    request_body = UpdateRegionRequestDto,
    responses(
        (status = 200, description = "Region updated", body = RegionDto),
        (status = 400, description = "Invalid region ID or request body", body = ErrorResponse),
        (status = 404, description = "Region not found")
    ),
    tag = "regions"
)]
pub async fn update_region(
    State(service): State<Arc<RegionService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateRegionRequestDto>,
) -> Result<Response> {
    let region = service.update(id, dto.into()).await?;
    Ok(found_or_404(region))
}

/// Delete a region, returning what was removed
#[utoipa::path(
    delete,
    path = "/regions/{id}",
    params(
        ("id" = Uuid, Path, description = "Region ID")
    ),
    responses(
        (status = 200, description = "Region deleted", body = RegionDto),
        (status = 400, description = "Invalid region ID", body = ErrorResponse),
        (status = 404, description = "Region not found")
    ),
    tag = "regions"
)]
pub async fn delete_region(
    State(service): State<Arc<RegionService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Response> {
    let region = service.delete(id).await?;
    Ok(found_or_404(region))
}
