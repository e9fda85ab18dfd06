use std::sync::atomic::{AtomicUsize, Ordering};

use error_stack::Report;
use rust_decimal::Decimal;
use time::macros::datetime;
use time::OffsetDateTime;

use driver::database::{
    LocalCatalogRepository, LocalDraftRepository, LocalOrderRepository, LocalSelectionRepository,
    LocalStorage,
};
use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::query::{
    DependOnCatalogQuery, DependOnDraftQuery, DependOnOrderQuery, DependOnSelectionQuery,
};
use kernel::interface::seed::{DependOnSeedSource, SeedSource};
use kernel::interface::update::{
    DependOnCatalogModifier, DependOnDraftModifier, DependOnOrderModifier,
    DependOnSelectionModifier,
};
use kernel::prelude::entity::{
    DailyRate, FuelType, ImageUrl, Mileage, ModelYear, Vehicle, VehicleDescription, VehicleId,
    VehicleMake, VehicleModel, VehicleType,
};
use kernel::KernelError;

use crate::cache::{CatalogCache, DependOnCatalogCache};
use crate::transfer::ReservationFormDto;

pub const NOW: OffsetDateTime = datetime!(2026-03-10 12:00:00 UTC);

pub fn vehicle(id: i64, make: &str, model: &str, kind: &str, price: i64, available: bool) -> Vehicle {
    Vehicle::new(
        VehicleId::new(id),
        VehicleMake::new(make),
        VehicleModel::new(model),
        ModelYear::new(2022),
        VehicleType::new(kind),
        DailyRate::new(Decimal::from(price)),
        Some(Mileage::new(15000)),
        Some(FuelType::new("Petrol")),
        VehicleDescription::new("Reliable and efficient for daily driving"),
        ImageUrl::new(format!("images/{id}.jpg")),
        available,
        None,
    )
}

pub fn seed() -> Vec<Vehicle> {
    vec![
        vehicle(1, "Toyota", "Corolla", "Sedan", 50, true),
        vehicle(2, "Honda", "Civic", "Sedan", 55, true),
        vehicle(3, "Ford", "Ranger", "Truck", 75, false),
    ]
}

pub fn valid_form() -> ReservationFormDto {
    ReservationFormDto {
        name: "Jane Doe".to_string(),
        phone: "555-123-4567".to_string(),
        email: "jane@example.com".to_string(),
        license: "D1234567".to_string(),
        start_date: "2026-03-12".to_string(),
        days: "3".to_string(),
    }
}

pub struct StaticSeed {
    vehicles: Option<Vec<Vehicle>>,
    fetched: AtomicUsize,
}

#[async_trait::async_trait]
impl SeedSource for StaticSeed {
    async fn fetch(&self) -> error_stack::Result<Vec<Vehicle>, KernelError> {
        self.fetched.fetch_add(1, Ordering::SeqCst);
        match &self.vehicles {
            Some(vehicles) => Ok(vehicles.clone()),
            None => Err(Report::new(KernelError::Fetch).attach_printable("seed unreachable")),
        }
    }
}

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        NOW
    }
}

/// One browser tab: its own in-memory catalog over a possibly shared store.
pub struct TestModule {
    storage: LocalStorage,
    seed: StaticSeed,
    cache: CatalogCache,
}

impl TestModule {
    pub fn new(seed: Option<Vec<Vehicle>>) -> Self {
        Self::with_storage(LocalStorage::in_memory(), seed)
    }

    pub fn with_storage(storage: LocalStorage, seed: Option<Vec<Vehicle>>) -> Self {
        Self {
            storage,
            seed: StaticSeed {
                vehicles: seed,
                fetched: AtomicUsize::new(0),
            },
            cache: CatalogCache::new(),
        }
    }

    /// Another tab over the same store.
    pub fn open_tab(&self) -> Self {
        Self::with_storage(self.storage.clone(), self.seed.vehicles.clone())
    }

    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    pub fn fetch_count(&self) -> usize {
        self.seed.fetched.load(Ordering::SeqCst)
    }
}

impl DependOnDatabaseConnection for TestModule {
    type DatabaseConnection = LocalStorage;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        &self.storage
    }
}

impl DependOnCatalogQuery for TestModule {
    type CatalogQuery = LocalCatalogRepository;
    fn catalog_query(&self) -> &Self::CatalogQuery {
        &LocalCatalogRepository
    }
}

impl DependOnCatalogModifier for TestModule {
    type CatalogModifier = LocalCatalogRepository;
    fn catalog_modifier(&self) -> &Self::CatalogModifier {
        &LocalCatalogRepository
    }
}

impl DependOnSelectionQuery for TestModule {
    type SelectionQuery = LocalSelectionRepository;
    fn selection_query(&self) -> &Self::SelectionQuery {
        &LocalSelectionRepository
    }
}

impl DependOnSelectionModifier for TestModule {
    type SelectionModifier = LocalSelectionRepository;
    fn selection_modifier(&self) -> &Self::SelectionModifier {
        &LocalSelectionRepository
    }
}

impl DependOnDraftQuery for TestModule {
    type DraftQuery = LocalDraftRepository;
    fn draft_query(&self) -> &Self::DraftQuery {
        &LocalDraftRepository
    }
}

impl DependOnDraftModifier for TestModule {
    type DraftModifier = LocalDraftRepository;
    fn draft_modifier(&self) -> &Self::DraftModifier {
        &LocalDraftRepository
    }
}

impl DependOnOrderQuery for TestModule {
    type OrderQuery = LocalOrderRepository;
    fn order_query(&self) -> &Self::OrderQuery {
        &LocalOrderRepository
    }
}

impl DependOnOrderModifier for TestModule {
    type OrderModifier = LocalOrderRepository;
    fn order_modifier(&self) -> &Self::OrderModifier {
        &LocalOrderRepository
    }
}

impl DependOnSeedSource for TestModule {
    type SeedSource = StaticSeed;
    fn seed_source(&self) -> &Self::SeedSource {
        &self.seed
    }
}

impl DependOnClock for TestModule {
    type Clock = FixedClock;
    fn clock(&self) -> &Self::Clock {
        &FixedClock
    }
}

impl DependOnCatalogCache for TestModule {
    fn catalog_cache(&self) -> &CatalogCache {
        &self.cache
    }
}
