mod filter;
mod keyword;

pub use self::{filter::*, keyword::*};
use std::collections::BTreeSet;

use crate::entity::{Vehicle, VehicleId, VehicleMake, VehicleType};

/// In-memory view of the vehicle list together with its derived keyword index.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Catalog {
    vehicles: Vec<Vehicle>,
    keywords: KeywordIndex,
}

impl Catalog {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        let keywords = KeywordIndex::build(&vehicles);
        Self { vehicles, keywords }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn keywords(&self) -> &KeywordIndex {
        &self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn find(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| vehicle.id() == id)
    }

    /// Returns `false` when no vehicle carries `id`.
    /// The keyword index does not depend on availability and is left as is.
    pub fn set_availability(&mut self, id: &VehicleId, available: bool) -> bool {
        match self.vehicles.iter_mut().find(|vehicle| vehicle.id() == id) {
            Some(vehicle) => {
                vehicle.substitute(|vehicle| *vehicle.availability = available);
                true
            }
            None => false,
        }
    }

    pub fn search(&self, filter: &VehicleFilter) -> Vec<&Vehicle> {
        self.vehicles
            .iter()
            .filter(|vehicle| filter.matches(vehicle))
            .collect()
    }

    pub fn types(&self) -> Vec<&VehicleType> {
        self.vehicles
            .iter()
            .map(Vehicle::vehicle_type)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn makes(&self) -> Vec<&VehicleMake> {
        self.vehicles
            .iter()
            .map(Vehicle::make)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
