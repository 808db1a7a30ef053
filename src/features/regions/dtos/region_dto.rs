use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::regions::models::{Region, RegionAttributes};

/// Response DTO for region data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RegionDto {
    pub id: Uuid,
    #[schema(example = "WLG")]
    pub code: String,
    #[schema(example = "Wellington")]
    pub name: String,
    #[schema(example = 227755.0)]
    pub area: f64,
    pub lat: f64,
    #[schema(example = 174.77)]
    pub long: f64,
    #[schema(example = 212700)]
    pub population: i64,
}

impl From<Region> for RegionDto {
    fn from(region: Region) -> Self {
        Self {
            id: region.id,
            code: region.code,
            name: region.name,
            area: region.area,
            lat: region.lat,
            long: region.long,
            population: region.population,
        }
    }
}

/// Request DTO for creating a region
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddRegionRequestDto {
    #[schema(example = "WLG")]
    pub code: String,
    #[schema(example = "Wellington")]
    pub name: String,
    #[schema(example = 227755.0)]
    pub area: f64,
    pub lat: f64,
    #[schema(example = 174.77)]
    pub long: f64,
    #[schema(example = 212700)]
    pub population: i64,
}

impl From<AddRegionRequestDto> for RegionAttributes {
    fn from(dto: AddRegionRequestDto) -> Self {
        Self {
            code: dto.code,
            name: dto.name,
            area: dto.area,
            lat: dto.lat,
            long: dto.long,
            population: dto.population,
        }
    }
}

/// Request DTO for replacing a region's fields
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateRegionRequestDto {
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

impl From<UpdateRegionRequestDto> for RegionAttributes {
    fn from(dto: UpdateRegionRequestDto) -> Self {
        Self {
            code: dto.code,
            name: dto.name,
            area: dto.area,
            lat: dto.lat,
            long: dto.long,
            population: dto.population,
        }
    }
}
