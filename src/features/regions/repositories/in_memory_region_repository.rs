use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::regions::models::{Region, RegionAttributes};
use crate::features::regions::repositories::RegionRepository;

/// Process-local `RegionRepository`; lists regions in insertion order
#[derive(Default)]
pub struct InMemoryRegionRepository {
    regions: RwLock<Vec<Region>>,
}

impl InMemoryRegionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RegionRepository for InMemoryRegionRepository {
    async fn get_all(&self) -> Result<Vec<Region>> {
        Ok(self.regions.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Region>> {
        let regions = self.regions.read().await;
        Ok(regions.iter().find(|r| r.id == id).cloned())
    }

    async fn add(&self, attributes: RegionAttributes) -> Result<Region> {
        let region = Region::new(Uuid::new_v4(), attributes);
        self.regions.write().await.push(region.clone());
        Ok(region)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Region>> {
        let mut regions = self.regions.write().await;
        let removed = regions
            .iter()
            .position(|r| r.id == id)
            .map(|index| regions.remove(index));
        Ok(removed)
    }

    async fn update(&self, id: Uuid, attributes: RegionAttributes) -> Result<Option<Region>> {
        let mut regions = self.regions.write().await;
        let Some(region) = regions.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        region.apply(attributes);
        Ok(Some(region.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(code: &str, name: &str) -> RegionAttributes {
        RegionAttributes {
            code: code.to_string(),
            name: name.to_string(),
            area: 100.0,
            lat: -40.0,
            long: 175.0,
            population: 1000,
        }
    }

    #[tokio::test]
    async fn test_add_assigns_unique_ids() {
        let repo = InMemoryRegionRepository::new();
        let a = repo.add(attrs("AKL", "Auckland")).await.unwrap();
        let b = repo.add(attrs("AKL", "Auckland")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert!(!a.id.is_nil());
        assert_eq!(repo.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_all_preserves_insertion_order() {
        let repo = InMemoryRegionRepository::new();
        for (code, name) in [("WLG", "Wellington"), ("AKL", "Auckland"), ("NSN", "Nelson")] {
            repo.add(attrs(code, name)).await.unwrap();
        }

        let codes: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.code)
            .collect();
        assert_eq!(codes, vec!["WLG", "AKL", "NSN"]);
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_overwrites_fields() {
        let repo = InMemoryRegionRepository::new();
        let created = repo.add(attrs("WLG", "Wellington")).await.unwrap();

        let updated = repo
            .update(created.id, attrs("NTL", "Northland"))
            .await
            .unwrap()
            .expect("region should exist");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.code, "NTL");
        assert_eq!(updated.name, "Northland");
        assert_eq!(repo.get(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_missing_ids_return_none() {
        let repo = InMemoryRegionRepository::new();
        let id = Uuid::new_v4();

        assert_eq!(repo.get(id).await.unwrap(), None);
        assert_eq!(repo.delete(id).await.unwrap(), None);
        assert_eq!(repo.update(id, attrs("X", "Y")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_removes_region() {
        let repo = InMemoryRegionRepository::new();
        let keep = repo.add(attrs("AKL", "Auckland")).await.unwrap();
        let gone = repo.add(attrs("WLG", "Wellington")).await.unwrap();

        let deleted = repo.delete(gone.id).await.unwrap();
        assert_eq!(deleted, Some(gone.clone()));
        assert_eq!(repo.get(gone.id).await.unwrap(), None);
        assert_eq!(repo.get_all().await.unwrap(), vec![keep]);
    }
}
