mod region_dto;

pub use region_dto::{AddRegionRequestDto, RegionDto, UpdateRegionRequestDto};
