use rust_decimal::Decimal;

use kernel::prelude::entity::{DestructVehicle, Vehicle, VehicleSnapshot};

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleDto {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vehicle_type: String,
    pub price_per_day: Decimal,
    pub mileage: Option<i64>,
    pub fuel_type: Option<String>,
    pub description: String,
    pub image_url: String,
    pub availability: bool,
    pub vin: Option<String>,
}

impl From<Vehicle> for VehicleDto {
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

impl From<VehicleSnapshot> for VehicleDto {
    fn from(value: VehicleSnapshot) -> Self {
        Self::from(Vehicle::from(value))
    }
}

pub struct GetVehicleDto {
    pub id: i64,
}

pub struct SelectVehicleDto {
    pub id: i64,
}

pub struct UpdateAvailabilityDto {
    pub id: i64,
    pub available: bool,
}
