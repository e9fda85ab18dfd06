use std::fmt::{Display, Formatter};

use application::transfer::{CatalogFiltersDto, CatalogListingDto, VehicleDto};

use crate::controller::Exhaust;

pub struct VehicleCard<'a>(pub &'a VehicleDto);

impl Display for VehicleCard<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let vehicle = self.0;
        let mileage = match vehicle.mileage {
            Some(mileage) => format!("{mileage} miles"),
            None => "Mileage N/A".to_string(),
        };
        let fuel = vehicle.fuel_type.as_deref().unwrap_or("Fuel N/A");
        let availability = if vehicle.availability {
            "Available"
        } else {
            "Unavailable"
        };
        writeln!(f, "[{}] {}", vehicle.id, vehicle.model)?;
        writeln!(
            f,
            "    {} | {} | {}",
            vehicle.make, vehicle.vehicle_type, vehicle.year
        )?;
        writeln!(f, "    {mileage} | {fuel}")?;
        write!(
            f,
            "    ${}/day | {availability}",
            vehicle.price_per_day.normalize()
        )
    }
}

pub struct ListingView {
    heading: String,
    count_text: String,
    vehicles: Vec<VehicleDto>,
}

impl Display for ListingView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} ({})", self.heading, self.count_text)?;
        if self.vehicles.is_empty() {
            return write!(
                f,
                "No cars found matching your criteria. Please try different search terms or filters."
            );
        }
        for vehicle in &self.vehicles {
            writeln!(f)?;
            writeln!(f, "{}", VehicleCard(vehicle))?;
        }
        write!(f, "\nRent an available car with `storefront select <id>`.")
    }
}

pub struct FiltersView {
    types: Vec<String>,
    makes: Vec<String>,
}

impl Display for FiltersView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Types: {}", self.types.join(", "))?;
        write!(f, "Makes: {}", self.makes.join(", "))
    }
}

pub struct SuggestionsView(Vec<String>);

impl Display for SuggestionsView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("\n"))
    }
}

pub struct CatalogPresenter;

impl Exhaust<CatalogListingDto> for CatalogPresenter {
    type To = ListingView;
    fn emit(&self, input: CatalogListingDto) -> Self::To {
        ListingView {
            heading: input.heading,
            count_text: input.count_text,
            vehicles: input.vehicles,
        }
    }
}

impl Exhaust<CatalogFiltersDto> for CatalogPresenter {
    type To = FiltersView;
    fn emit(&self, input: CatalogFiltersDto) -> Self::To {
        FiltersView {
            types: input.types,
            makes: input.makes,
        }
    }
}

impl Exhaust<Vec<String>> for CatalogPresenter {
    type To = SuggestionsView;
    fn emit(&self, input: Vec<String>) -> Self::To {
        SuggestionsView(input)
    }
}

#[cfg(test)]
pub(crate) mod test {
    use rust_decimal::Decimal;

    use application::transfer::{CatalogListingDto, VehicleDto};

    use crate::controller::Exhaust;

    use super::{CatalogPresenter, VehicleCard};

    pub fn corolla() -> VehicleDto {
        VehicleDto {
            id: 1,
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2022,
            vehicle_type: "Sedan".to_string(),
            price_per_day: Decimal::new(5000, 2),
            mileage: Some(15000),
            fuel_type: None,
            description: "Reliable and efficient for daily driving".to_string(),
            image_url: "images/corolla.jpg".to_string(),
            availability: true,
            vin: None,
        }
    }

    #[test]
    fn missing_mileage_is_labelled() {
        let vehicle = VehicleDto {
            mileage: None,
            ..corolla()
        };
        assert!(VehicleCard(&vehicle).to_string().contains("Mileage N/A | Fuel N/A"));
    }

    #[test]
    fn card_shows_listing_details() {
        let card = VehicleCard(&corolla()).to_string();
        assert!(card.starts_with("[1] Corolla"));
        assert!(card.contains("Toyota | Sedan | 2022"));
        assert!(card.contains("15000 miles | Fuel N/A"));
        assert!(card.contains("$50/day | Available"));
    }

    #[test]
    fn empty_listing_says_so() {
        let view = CatalogPresenter
            .emit(CatalogListingDto {
                heading: "Search results for \"zz\"".to_string(),
                count_text: "0 cars found".to_string(),
                vehicles: Vec::new(),
            })
            .to_string();
        assert!(view.starts_with("Search results for \"zz\" (0 cars found)"));
        assert!(view.contains("No cars found matching your criteria"));
    }
}
