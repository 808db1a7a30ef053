use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::regions::models::{Region, RegionAttributes};

/// Storage for regions.
///
/// Implementations own id generation and ordering; callers only ever see
/// `Region`s the store has accepted.
#[async_trait]
pub trait RegionRepository: Send + Sync {
    /// All regions, in the store's natural order
    async fn get_all(&self) -> Result<Vec<Region>>;

    async fn get(&self, id: Uuid) -> Result<Option<Region>>;

    /// Persist a new region under a freshly generated id
    async fn add(&self, attributes: RegionAttributes) -> Result<Region>;

    /// Remove a region, returning it if it existed
    async fn delete(&self, id: Uuid) -> Result<Option<Region>>;

    /// Overwrite every field except `id`; `None` if the id is unknown
    async fn update(&self, id: Uuid, attributes: RegionAttributes) -> Result<Option<Region>>;
}
