use clap::Args;

use application::transfer::{SearchVehiclesDto, SuggestKeywordsDto};

use crate::controller::Intake;

#[derive(Debug, Default, Args)]
pub struct ListRequest {
    /// Matches make, model or type
    #[arg(long, short)]
    keyword: Option<String>,
    #[arg(long = "type")]
    vehicle_type: Option<String>,
    #[arg(long)]
    make: Option<String>,
}

#[derive(Debug, Args)]
pub struct SuggestRequest {
    query: String,
    #[arg(long)]
    limit: Option<usize>,
}

pub struct CatalogTransformer;

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

impl Intake<ListRequest> for CatalogTransformer {
    type To = SearchVehiclesDto;
    fn emit(&self, input: ListRequest) -> Self::To {
        SearchVehiclesDto {
            keyword: non_blank(input.keyword),
            vehicle_type: non_blank(input.vehicle_type),
            make: non_blank(input.make),
        }
    }
}

impl Intake<SuggestRequest> for CatalogTransformer {
    type To = SuggestKeywordsDto;
    fn emit(&self, input: SuggestRequest) -> Self::To {
        SuggestKeywordsDto {
            query: input.query,
            limit: input.limit,
        }
    }
}
