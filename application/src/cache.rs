use tokio::sync::{RwLock, RwLockReadGuard};

use kernel::prelude::entity::{Catalog, Vehicle, VehicleId};

/// The one in-memory catalog every read path goes through.
#[derive(Debug, Default)]
pub struct CatalogCache(RwLock<Catalog>);

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps the whole catalog and rebuilds its keyword index.
    pub async fn replace(&self, vehicles: Vec<Vehicle>) {
        *self.0.write().await = Catalog::new(vehicles);
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.0.read().await
    }

    pub async fn find(&self, id: &VehicleId) -> Option<Vehicle> {
        self.0.read().await.find(id).cloned()
    }

    pub async fn vehicles(&self) -> Vec<Vehicle> {
        self.0.read().await.vehicles().to_vec()
    }

    pub async fn set_availability(&self, id: &VehicleId, available: bool) -> bool {
        self.0.write().await.set_availability(id, available)
    }
}

pub trait DependOnCatalogCache: 'static + Sync + Send {
    fn catalog_cache(&self) -> &CatalogCache;
}
