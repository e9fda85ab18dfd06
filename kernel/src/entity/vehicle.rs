mod id;
mod price;
mod profile;
mod reference;

pub use self::{id::*, price::*, profile::*, reference::*};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Vehicle {
    id: VehicleId,
    make: VehicleMake,
    model: VehicleModel,
    year: ModelYear,
    vehicle_type: VehicleType,
    price_per_day: DailyRate,
    mileage: Option<Mileage>,
    fuel_type: Option<FuelType>,
    description: VehicleDescription,
    image_url: ImageUrl,
    availability: bool,
    vin: Option<Vin>,
}

impl Vehicle {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: VehicleId,
        make: VehicleMake,
        model: VehicleModel,
        year: ModelYear,
        vehicle_type: VehicleType,
        price_per_day: DailyRate,
        mileage: Option<Mileage>,
        fuel_type: Option<FuelType>,
        description: VehicleDescription,
        image_url: ImageUrl,
        availability: bool,
        vin: Option<Vin>,
    ) -> Self {
        Self {
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
        }
    }

    pub fn is_available(&self) -> bool {
        self.availability
    }

    pub fn reference(&self) -> VehicleRef {
        VehicleRef::new(self.id.clone())
    }

    pub fn snapshot(&self) -> VehicleSnapshot {
        VehicleSnapshot::new(self.clone())
    }

    pub fn quote(&self, days: u32) -> PriceQuote {
        PriceQuote::new(self.price_per_day.clone(), days)
    }

    /// `lowercase_term` must already be lowercased.
    pub fn mentions(&self, lowercase_term: &str) -> bool {
        self.make.as_ref().to_lowercase().contains(lowercase_term)
            || self.model.as_ref().to_lowercase().contains(lowercase_term)
            || self.vehicle_type.as_ref().to_lowercase().contains(lowercase_term)
            || self.year.as_ref().to_string().contains(lowercase_term)
            || self.description.as_ref().to_lowercase().contains(lowercase_term)
    }
}
