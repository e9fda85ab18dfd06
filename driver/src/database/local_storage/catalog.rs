use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use kernel::interface::query::CatalogQuery;
use kernel::interface::update::CatalogModifier;
use kernel::prelude::entity::{
    DailyRate, DestructVehicle, FuelType, ImageUrl, Mileage, ModelYear, Vehicle,
    VehicleDescription, VehicleId, VehicleMake, VehicleModel, VehicleType, Vin,
};
use kernel::KernelError;

use crate::database::local_storage::{LocalStorageTransaction, CARS_KEY};
use crate::error::{ConvertError, DriverError};

pub struct LocalCatalogRepository;

#[async_trait::async_trait]
impl CatalogQuery for LocalCatalogRepository {
    type Transaction = LocalStorageTransaction;

    async fn find_all(
        &self,
        con: &mut LocalStorageTransaction,
    ) -> error_stack::Result<Option<Vec<Vehicle>>, KernelError> {
        LocalCatalogInternal::find_all(con).await
    }

    async fn find_by_id(
        &self,
        con: &mut LocalStorageTransaction,
        id: &VehicleId,
    ) -> error_stack::Result<Option<Vehicle>, KernelError> {
        let found = LocalCatalogInternal::find_all(con)
            .await?
            .and_then(|vehicles| vehicles.into_iter().find(|vehicle| vehicle.id() == id));
        Ok(found)
    }
}

#[async_trait::async_trait]
impl CatalogModifier for LocalCatalogRepository {
    type Transaction = LocalStorageTransaction;

    async fn replace_all(
        &self,
        con: &mut LocalStorageTransaction,
        vehicles: &[Vehicle],
    ) -> error_stack::Result<(), KernelError> {
        LocalCatalogInternal::replace_all(con, vehicles).await
    }
}

/// Record layout shared by the `cars` slot, the `selectedCar` slot, orders and the seed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct VehicleRow {
    id: i64,
    make: String,
    model: String,
    year: i32,
    #[serde(rename = "type")]
    vehicle_type: String,
    #[serde(with = "rust_decimal::serde::float")]
    price_per_day: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mileage: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fuel_type: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image_url: String,
    availability: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vin: Option<String>,
}

impl From<VehicleRow> for Vehicle {
    fn from(value: VehicleRow) -> Self {
        Vehicle::new(
            VehicleId::new(value.id),
            VehicleMake::new(value.make),
            VehicleModel::new(value.model),
            ModelYear::new(value.year),
            VehicleType::new(value.vehicle_type),
            DailyRate::new(value.price_per_day),
            value.mileage.map(Mileage::new),
            value.fuel_type.map(FuelType::new),
            VehicleDescription::new(value.description),
            ImageUrl::new(value.image_url),
            value.availability,
            value.vin.map(Vin::new),
        )
    }
}

impl From<Vehicle> for VehicleRow {
    fn from(value: Vehicle) -> Self {
        let DestructVehicle {
            id,
            make,
            model,
            year,
            vehicle_type,
            price_per_day,
            mileage,
            fuel_type,
            description,
            image_url,
            availability,
            vin,
        } = value.into_destruct();
        Self {
            id: id.into(),
            make: make.into(),
            model: model.into(),
            year: year.into(),
            vehicle_type: vehicle_type.into(),
            price_per_day: price_per_day.into(),
            mileage: mileage.map(Into::into),
            fuel_type: fuel_type.map(Into::into),
            description: description.into(),
            image_url: image_url.into(),
            availability,
            vin: vin.map(Into::into),
        }
    }
}

pub(in crate::database) struct LocalCatalogInternal;

impl LocalCatalogInternal {
    async fn find_all(
        con: &mut LocalStorageTransaction,
    ) -> error_stack::Result<Option<Vec<Vehicle>>, KernelError> {
        let Some(raw) = con.get_item(CARS_KEY).await else {
            return Ok(None);
        };
        let rows = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(rows) => rows,
            Err(error) => {
                warn!("Stored `{CARS_KEY}` is not a list of cars, ignoring it: {error}");
                return Ok(None);
            }
        };
        let vehicles = rows
            .into_iter()
            .enumerate()
            .filter_map(|(index, row)| {
                let id = row.get("id").cloned().unwrap_or(Value::Null);
                match serde_json::from_value::<VehicleRow>(row) {
                    Ok(row) => Some(Vehicle::from(row)),
                    Err(error) => {
                        warn!("Skipping unreadable car #{index} (id {id}) in `{CARS_KEY}`: {error}");
                        None
                    }
                }
            })
            .collect();
        Ok(Some(vehicles))
    }

    async fn replace_all(
        con: &mut LocalStorageTransaction,
        vehicles: &[Vehicle],
    ) -> error_stack::Result<(), KernelError> {
        let rows = vehicles
            .iter()
            .cloned()
            .map(VehicleRow::from)
            .collect::<Vec<_>>();
        let raw = serde_json::to_string(&rows)
            .map_err(DriverError::from)
            .convert_error()?;
        con.set_item(CARS_KEY, raw).await
    }
}

#[cfg(test)]
mod test {
    use rust_decimal::Decimal;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::CatalogQuery;
    use kernel::interface::update::CatalogModifier;
    use kernel::prelude::entity::{Vehicle, VehicleId};
    use kernel::KernelError;

    use crate::database::local_storage::CARS_KEY;
    use crate::database::{LocalCatalogRepository, LocalStorage};

    const SEED: &str = r#"[
        {"id": 1, "make": "Toyota", "model": "Corolla", "year": 2022, "type": "Sedan",
         "price_per_day": 49.99, "mileage": 15000, "fuel_type": "Petrol",
         "description": "Reliable compact sedan", "image_url": "images/corolla.jpg",
         "availability": true, "vin": "JT2BF22K1W0123456"},
        {"id": 2, "make": "Ford", "model": "Ranger", "year": 2021, "type": "Truck",
         "price_per_day": 75, "description": "Mid-size pickup", "image_url": "images/ranger.jpg",
         "availability": false}
    ]"#;

    #[tokio::test]
    async fn reads_seed_shaped_records() -> error_stack::Result<(), KernelError> {
        let storage = LocalStorage::in_memory();
        let mut con = storage.transact().await?;
        con.set_item(CARS_KEY, SEED.to_string()).await?;

        let vehicles = LocalCatalogRepository
            .find_all(&mut con)
            .await?
            .expect("catalog is stored");
        assert_eq!(vehicles.len(), 2);
        assert_eq!(
            vehicles[0].price_per_day().as_ref(),
            &Decimal::new(4999, 2)
        );
        assert!(vehicles[1].mileage().is_none());

        let ranger = LocalCatalogRepository
            .find_by_id(&mut con, &VehicleId::new(2))
            .await?;
        assert!(ranger.is_some_and(|ranger| !ranger.is_available()));
        Ok(())
    }

    #[tokio::test]
    async fn replace_then_read_keeps_vehicles() -> error_stack::Result<(), KernelError> {
        let storage = LocalStorage::in_memory();
        let mut con = storage.transact().await?;
        con.set_item(CARS_KEY, SEED.to_string()).await?;
        let vehicles = LocalCatalogRepository
            .find_all(&mut con)
            .await?
            .unwrap_or_default();

        let vehicles = vehicles
            .into_iter()
            .map(|vehicle| vehicle.reconstruct(|vehicle| vehicle.availability = true))
            .collect::<Vec<Vehicle>>();
        LocalCatalogRepository
            .replace_all(&mut con, &vehicles)
            .await?;

        let found = LocalCatalogRepository.find_all(&mut con).await?;
        assert_eq!(found, Some(vehicles));
        Ok(())
    }

    #[tokio::test]
    async fn malformed_record_is_skipped() -> error_stack::Result<(), KernelError> {
        let storage = LocalStorage::in_memory();
        let mut con = storage.transact().await?;
        let stored = SEED.replacen('[', r#"[{"id": 7, "make": "Kia"},"#, 1);
        con.set_item(CARS_KEY, stored).await?;

        let vehicles = LocalCatalogRepository
            .find_all(&mut con)
            .await?
            .expect("catalog is stored");
        let ids = vehicles
            .iter()
            .map(|vehicle| vehicle.id().clone())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![VehicleId::new(1), VehicleId::new(2)]);
        assert!(vehicles[0].is_available());
        assert!(!vehicles[1].is_available());
        Ok(())
    }

    #[tokio::test]
    async fn non_list_value_reads_as_absent() -> error_stack::Result<(), KernelError> {
        let storage = LocalStorage::in_memory();
        let mut con = storage.transact().await?;
        con.set_item(CARS_KEY, "\"not an array\"".to_string()).await?;

        assert!(LocalCatalogRepository.find_all(&mut con).await?.is_none());
        assert_eq!(
            con.get_item(CARS_KEY).await,
            Some("\"not an array\"".to_string())
        );
        Ok(())
    }
}
