use kernel::prelude::entity::VehicleFilter;

use crate::transfer::VehicleDto;

#[derive(Debug, Clone, Default)]
pub struct SearchVehiclesDto {
    pub keyword: Option<String>,
    pub vehicle_type: Option<String>,
    pub make: Option<String>,
}

impl From<SearchVehiclesDto> for VehicleFilter {
    fn from(value: SearchVehiclesDto) -> Self {
        VehicleFilter::new(value.keyword, value.vehicle_type, value.make)
    }
}

pub struct SuggestKeywordsDto {
    pub query: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct CatalogListingDto {
    pub heading: String,
    pub count_text: String,
    pub vehicles: Vec<VehicleDto>,
}

#[derive(Debug, Clone)]
pub struct CatalogFiltersDto {
    pub types: Vec<String>,
    pub makes: Vec<String>,
}
