use crate::entity::Vehicle;
use crate::KernelError;

/// Read-only origin of the catalog, consulted only while no valid persisted catalog exists.
#[async_trait::async_trait]
pub trait SeedSource: 'static + Sync + Send {
    async fn fetch(&self) -> error_stack::Result<Vec<Vehicle>, KernelError>;
}

pub trait DependOnSeedSource: 'static + Sync + Send {
    type SeedSource: SeedSource;
    fn seed_source(&self) -> &Self::SeedSource;
}
