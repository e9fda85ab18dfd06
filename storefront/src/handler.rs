use std::ops::Deref;
use std::path::PathBuf;
use std::sync::Arc;

use application::cache::{CatalogCache, DependOnCatalogCache};
use driver::clock::SystemClock;
use driver::database::{
    LocalCatalogRepository, LocalDraftRepository, LocalOrderRepository, LocalSelectionRepository,
    LocalStorage,
};
use driver::seed::CatalogSeed;
use kernel::interface::clock::DependOnClock;
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::query::{
    DependOnCatalogQuery, DependOnDraftQuery, DependOnOrderQuery, DependOnSelectionQuery,
};
use kernel::interface::seed::DependOnSeedSource;
use kernel::interface::update::{
    DependOnCatalogModifier, DependOnDraftModifier, DependOnOrderModifier,
    DependOnSelectionModifier,
};
use kernel::KernelError;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    /// `storage` and `seed` override the environment.
    pub async fn new(
        storage: Option<PathBuf>,
        seed: Option<String>,
        clock: SystemClock,
    ) -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init(storage, seed, clock).await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

pub struct Handler {
    storage: LocalStorage,
    seed: CatalogSeed,
    clock: SystemClock,
    cache: CatalogCache,
}

impl Handler {
    pub async fn init(
        storage: Option<PathBuf>,
        seed: Option<String>,
        clock: SystemClock,
    ) -> error_stack::Result<Self, KernelError> {
        let storage = LocalStorage::from_env(storage).await?;
        let seed = CatalogSeed::from_env(seed)?;

        Ok(Self {
            storage,
            seed,
            clock,
            cache: CatalogCache::new(),
        })
    }
}

impl DependOnDatabaseConnection for Handler {
    type DatabaseConnection = LocalStorage;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        &self.storage
    }
}

impl DependOnCatalogQuery for Handler {
    type CatalogQuery = LocalCatalogRepository;
    fn catalog_query(&self) -> &Self::CatalogQuery {
        &LocalCatalogRepository
    }
}

impl DependOnCatalogModifier for Handler {
    type CatalogModifier = LocalCatalogRepository;
    fn catalog_modifier(&self) -> &Self::CatalogModifier {
        &LocalCatalogRepository
    }
}

impl DependOnSelectionQuery for Handler {
    type SelectionQuery = LocalSelectionRepository;
    fn selection_query(&self) -> &Self::SelectionQuery {
        &LocalSelectionRepository
    }
}

impl DependOnSelectionModifier for Handler {
    type SelectionModifier = LocalSelectionRepository;
    fn selection_modifier(&self) -> &Self::SelectionModifier {
        &LocalSelectionRepository
    }
}

impl DependOnDraftQuery for Handler {
    type DraftQuery = LocalDraftRepository;
    fn draft_query(&self) -> &Self::DraftQuery {
        &LocalDraftRepository
    }
}

impl DependOnDraftModifier for Handler {
    type DraftModifier = LocalDraftRepository;
    fn draft_modifier(&self) -> &Self::DraftModifier {
        &LocalDraftRepository
    }
}

impl DependOnOrderQuery for Handler {
    type OrderQuery = LocalOrderRepository;
    fn order_query(&self) -> &Self::OrderQuery {
        &LocalOrderRepository
    }
}

impl DependOnOrderModifier for Handler {
    type OrderModifier = LocalOrderRepository;
    fn order_modifier(&self) -> &Self::OrderModifier {
        &LocalOrderRepository
    }
}

impl DependOnSeedSource for Handler {
    type SeedSource = CatalogSeed;
    fn seed_source(&self) -> &Self::SeedSource {
        &self.seed
    }
}

impl DependOnClock for Handler {
    type Clock = SystemClock;
    fn clock(&self) -> &Self::Clock {
        &self.clock
    }
}

impl DependOnCatalogCache for Handler {
    fn catalog_cache(&self) -> &CatalogCache {
        &self.cache
    }
}
