use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::regions::dtos::RegionDto;
use crate::features::regions::models::RegionAttributes;
use crate::features::regions::repositories::RegionRepository;
use crate::features::regions::validation::validate_region;

/// Service for managing regions
pub struct RegionService {
    repository: Arc<dyn RegionRepository>,
    validation_enabled: bool,
}

impl RegionService {
    pub fn new(repository: Arc<dyn RegionRepository>, validation_enabled: bool) -> Self {
        Self {
            repository,
            validation_enabled,
        }
    }

    pub async fn list(&self) -> Result<Vec<RegionDto>> {
        let regions = self.repository.get_all().await?;
        Ok(regions.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<RegionDto>> {
        let region = self.repository.get(id).await?;
        Ok(region.map(Into::into))
    }

    pub async fn create(&self, attributes: RegionAttributes) -> Result<RegionDto> {
        self.check(&attributes)?;

        let region = self.repository.add(attributes).await?;
        tracing::info!("Region created: id={}, code={}", region.id, region.code);

        Ok(region.into())
    }

    pub async fn update(&self, id: Uuid, attributes: RegionAttributes) -> Result<Option<RegionDto>> {
        self.check(&attributes)?;

        let region = self.repository.update(id, attributes).await?;
        match &region {
            Some(r) => tracing::info!("Region updated: id={}, code={}", r.id, r.code),
            None => tracing::debug!("Region update skipped, id={} not found", id),
        }

        Ok(region.map(Into::into))
    }

    pub async fn delete(&self, id: Uuid) -> Result<Option<RegionDto>> {
        let region = self.repository.delete(id).await?;
        if let Some(r) = &region {
            tracing::info!("Region deleted: id={}, code={}", r.id, r.code);
        }

        Ok(region.map(Into::into))
    }

    fn check(&self, attributes: &RegionAttributes) -> Result<()> {
        if !self.validation_enabled {
            return Ok(());
        }

        let errors = validate_region(attributes);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}
