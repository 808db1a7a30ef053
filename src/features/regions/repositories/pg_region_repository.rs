use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{Region, RegionAttributes};
use crate::features::regions::repositories::RegionRepository;

/// `RegionRepository` backed by the `regions` table
pub struct PgRegionRepository {
    pool: PgPool,
}

impl PgRegionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegionRepository for PgRegionRepository {
    async fn get_all(&self) -> Result<Vec<Region>> {
        let regions = sqlx::query_as::<_, Region>(
            r#"
            SELECT id, code, name, area, lat, long, population
            FROM regions
            ORDER BY code ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch regions: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(regions)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Region>> {
        let region = sqlx::query_as::<_, Region>(
            r#"
            SELECT id, code, name, area, lat, long, population
            FROM regions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch region {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(region)
    }

    async fn add(&self, attributes: RegionAttributes) -> Result<Region> {
        let region = sqlx::query_as::<_, Region>(
            r#"
            INSERT INTO regions (id, code, name, area, lat, long, population)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, code, name, area, lat, long, population
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&attributes.code)
        .bind(&attributes.name)
        .bind(attributes.area)
        .bind(attributes.lat)
        .bind(attributes.long)
        .bind(attributes.population)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert region {}: {:?}", attributes.code, e);
            AppError::Database(e)
        })?;

        Ok(region)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Region>> {
        let region = sqlx::query_as::<_, Region>(
            r#"
            DELETE FROM regions
            WHERE id = $1
            RETURNING id, code, name, area, lat, long, population
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete region {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(region)
    }

    async fn update(&self, id: Uuid, attributes: RegionAttributes) -> Result<Option<Region>> {
        let region = sqlx::query_as::<_, Region>(
            r#"
            UPDATE regions
            SET code = $2, name = $3, area = $4, lat = $5, long = $6, population = $7
            WHERE id = $1
            RETURNING id, code, name, area, lat, long, population
            "#,
        )
        .bind(id)
        .bind(&attributes.code)
        .bind(&attributes.name)
        .bind(attributes.area)
        .bind(attributes.lat)
        .bind(attributes.long)
        .bind(attributes.population)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update region {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(region)
    }
}
