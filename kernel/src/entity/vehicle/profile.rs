use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, Fromln, AsRefln)]
pub struct VehicleMake(String);

impl VehicleMake {
    pub fn new(make: impl Into<String>) -> Self {
        Self(make.into())
    }
}

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct VehicleModel(String);

impl VehicleModel {
    pub fn new(model: impl Into<String>) -> Self {
        Self(model.into())
    }
}

#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, Fromln, AsRefln)]
pub struct VehicleType(String);

impl VehicleType {
    pub fn new(vehicle_type: impl Into<String>) -> Self {
        Self(vehicle_type.into())
    }
}

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct ModelYear(i32);

impl ModelYear {
    pub fn new(year: impl Into<i32>) -> Self {
        Self(year.into())
    }
}

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct Mileage(i64);

impl Mileage {
    pub fn new(miles: impl Into<i64>) -> Self {
        Self(miles.into())
    }
}

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct FuelType(String);

impl FuelType {
    pub fn new(fuel_type: impl Into<String>) -> Self {
        Self(fuel_type.into())
    }
}

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct VehicleDescription(String);

impl VehicleDescription {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }
}

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct ImageUrl(String);

impl ImageUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }
}

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct Vin(String);

impl Vin {
    pub fn new(vin: impl Into<String>) -> Self {
        Self(vin.into())
    }
}
