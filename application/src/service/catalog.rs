use tracing::{debug, error, info, warn};

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{CatalogQuery, DependOnCatalogQuery};
use kernel::interface::seed::{DependOnSeedSource, SeedSource};
use kernel::interface::update::{CatalogModifier, DependOnCatalogModifier};
use kernel::prelude::entity::{Vehicle, VehicleFilter, VehicleId, DEFAULT_SUGGESTION_LIMIT};
use kernel::KernelError;

use crate::cache::DependOnCatalogCache;
use crate::transfer::{
    CatalogFiltersDto, CatalogListingDto, GetVehicleDto, SearchVehiclesDto, SuggestKeywordsDto,
    UpdateAvailabilityDto, VehicleDto,
};

#[async_trait::async_trait]
pub trait CatalogService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnCatalogQuery
    + DependOnCatalogModifier
    + DependOnSeedSource
    + DependOnCatalogCache
{
    /// Persisted copy wins once seeded. The seed source is consulted only when
    /// nothing usable is stored, and a failed fetch degrades to an empty catalog.
    #[tracing::instrument(skip_all)]
    async fn load_catalog(&self) -> error_stack::Result<Vec<VehicleDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let vehicles = match self.catalog_query().find_all(&mut connection).await? {
            Some(vehicles) if !vehicles.is_empty() => {
                debug!("Loaded {} cars from local storage", vehicles.len());
                vehicles
            }
            _ => match self.seed_source().fetch().await {
                Ok(vehicles) => {
                    info!("Seeding local storage with {} cars", vehicles.len());
                    if let Err(report) = self
                        .catalog_modifier()
                        .replace_all(&mut connection, &vehicles)
                        .await
                    {
                        warn!("Fetched catalog could not be persisted: {report:?}");
                    }
                    vehicles
                }
                Err(report) => {
                    error!("Failed to fetch catalog: {report:?}");
                    Vec::new()
                }
            },
        };
        connection.commit().await?;

        self.catalog_cache().replace(vehicles.clone()).await;
        Ok(vehicles.into_iter().map(VehicleDto::from).collect())
    }

    #[tracing::instrument(skip_all, fields(id = dto.id, available = dto.available))]
    async fn update_availability(
        &self,
        dto: UpdateAvailabilityDto,
    ) -> error_stack::Result<bool, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let id = VehicleId::new(dto.id);
        let updated = self
            .flip_availability(&mut connection, &id, dto.available)
            .await?;
        connection.commit().await?;
        Ok(updated)
    }

    /// Writes the persisted list (or the in-memory one when nothing is stored)
    /// and mirrors the change in memory. An unknown id is logged, not raised.
    async fn flip_availability(
        &self,
        con: &mut <Self::DatabaseConnection as DatabaseConnection>::Transaction,
        id: &VehicleId,
        available: bool,
    ) -> error_stack::Result<bool, KernelError> {
        let mut vehicles = match self.catalog_query().find_all(con).await? {
            Some(vehicles) => vehicles,
            None => self.catalog_cache().vehicles().await,
        };
        let Some(vehicle) = vehicles.iter_mut().find(|vehicle| vehicle.id() == id) else {
            warn!("Car with id {id} not found, availability left unchanged");
            return Ok(false);
        };
        vehicle.substitute(|vehicle| *vehicle.availability = available);

        self.catalog_modifier().replace_all(con, &vehicles).await?;
        self.catalog_cache().set_availability(id, available).await;
        info!("Car {id} availability set to {available}");
        Ok(true)
    }

    async fn find_vehicle(
        &self,
        dto: GetVehicleDto,
    ) -> error_stack::Result<Option<VehicleDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let vehicle = self
            .lookup_vehicle(&mut connection, &VehicleId::new(dto.id))
            .await?;
        connection.commit().await?;
        Ok(vehicle.map(VehicleDto::from))
    }

    /// In-memory catalog first, then the persisted one.
    async fn lookup_vehicle(
        &self,
        con: &mut <Self::DatabaseConnection as DatabaseConnection>::Transaction,
        id: &VehicleId,
    ) -> error_stack::Result<Option<Vehicle>, KernelError> {
        if let Some(vehicle) = self.catalog_cache().find(id).await {
            return Ok(Some(vehicle));
        }
        self.catalog_query().find_by_id(con, id).await
    }

    async fn list_vehicles(
        &self,
        dto: SearchVehiclesDto,
    ) -> error_stack::Result<CatalogListingDto, KernelError> {
        let filter = VehicleFilter::from(dto);
        let vehicles = self
            .catalog_cache()
            .read()
            .await
            .search(&filter)
            .into_iter()
            .cloned()
            .map(VehicleDto::from)
            .collect::<Vec<_>>();
        let count_text = match vehicles.len() {
            1 => String::from("1 car found"),
            count => format!("{count} cars found"),
        };
        Ok(CatalogListingDto {
            heading: filter.describe(),
            count_text,
            vehicles,
        })
    }

    async fn filters(&self) -> error_stack::Result<CatalogFiltersDto, KernelError> {
        let catalog = self.catalog_cache().read().await;
        Ok(CatalogFiltersDto {
            types: catalog
                .types()
                .into_iter()
                .map(|vehicle_type| vehicle_type.as_ref().clone())
                .collect(),
            makes: catalog
                .makes()
                .into_iter()
                .map(|make| make.as_ref().clone())
                .collect(),
        })
    }

    async fn suggest(
        &self,
        dto: SuggestKeywordsDto,
    ) -> error_stack::Result<Vec<String>, KernelError> {
        let limit = dto.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT);
        let catalog = self.catalog_cache().read().await;
        Ok(catalog
            .keywords()
            .suggest(&dto.query, limit)
            .into_iter()
            .map(String::from)
            .collect())
    }
}

impl<T> CatalogService for T where
    T: DependOnDatabaseConnection
        + DependOnCatalogQuery
        + DependOnCatalogModifier
        + DependOnSeedSource
        + DependOnCatalogCache
{
}
