use vodca::{AsRefln, Fromln};

use crate::entity::{Catalog, Vehicle, VehicleId};

/// Points at a catalog entry by id. Always resolved against the current catalog.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct VehicleRef(VehicleId);

impl VehicleRef {
    pub fn new(id: impl Into<VehicleId>) -> Self {
        Self(id.into())
    }

    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Option<&'a Vehicle> {
        catalog.find(&self.0)
    }
}

/// Frozen copy of a vehicle as it was when captured. Never re-resolved.
#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct VehicleSnapshot(Vehicle);

impl VehicleSnapshot {
    pub fn new(vehicle: Vehicle) -> Self {
        Self(vehicle)
    }

    pub fn reference(&self) -> VehicleRef {
        self.0.reference()
    }
}
