use vodca::References;

use crate::entity::{Vehicle, VehicleMake, VehicleType};

/// Listing criteria. Blank values are treated as "no constraint".
#[derive(Debug, Clone, Default, Eq, PartialEq, References)]
pub struct VehicleFilter {
    keyword: Option<String>,
    vehicle_type: Option<VehicleType>,
    make: Option<VehicleMake>,
}

impl VehicleFilter {
    pub fn new(
        keyword: Option<String>,
        vehicle_type: Option<String>,
        make: Option<String>,
    ) -> Self {
        fn present(value: Option<String>) -> Option<String> {
            value
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        }
        Self {
            keyword: present(keyword),
            vehicle_type: present(vehicle_type).map(VehicleType::new),
            make: present(make).map(VehicleMake::new),
        }
    }

    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        if let Some(vehicle_type) = &self.vehicle_type {
            if vehicle.vehicle_type() != vehicle_type {
                return false;
            }
        }
        if let Some(make) = &self.make {
            if vehicle.make() != make {
                return false;
            }
        }
        match &self.keyword {
            Some(keyword) => vehicle.mentions(&keyword.to_lowercase()),
            None => true,
        }
    }

    /// Listing heading for this filter, without the result count.
    pub fn describe(&self) -> String {
        let vehicle_type = self.vehicle_type.as_ref().map(AsRef::<String>::as_ref);
        let make = self.make.as_ref().map(AsRef::<String>::as_ref);
        match (vehicle_type, make, self.keyword.as_deref()) {
            (Some(t), Some(m), Some(k)) => format!("{m} {t} matching \"{k}\""),
            (Some(t), Some(m), None) => format!("{m} {t} Cars"),
            (Some(t), None, Some(k)) => format!("{t} matching \"{k}\""),
            (None, Some(m), Some(k)) => format!("{m} matching \"{k}\""),
            (Some(t), None, None) => format!("{t} Cars"),
            (None, Some(m), None) => format!("{m} Cars"),
            (None, None, Some(k)) => format!("Search Results for \"{k}\""),
            (None, None, None) => String::from("All Cars"),
        }
    }
}
