mod file;
mod http;

pub use self::{file::*, http::*};

use kernel::interface::seed::SeedSource;
use kernel::prelude::entity::Vehicle;
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

static STOREFRONT_SEED: &str = "STOREFRONT_SEED";
const DEFAULT_SEED: &str = "./data/cars.json";

/// Seed picked from its location: `http(s)://` URLs are fetched, anything else is a file path.
#[derive(Debug, Clone)]
pub enum CatalogSeed {
    File(FileSeedSource),
    Http(HttpSeedSource),
}

impl CatalogSeed {
    pub fn new(location: impl Into<String>) -> Self {
        let location = location.into();
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Http(HttpSeedSource::new(location))
        } else {
            Self::File(FileSeedSource::new(location))
        }
    }

    /// Uses `STOREFRONT_SEED`. `location` overrides it.
    pub fn from_env(location: Option<String>) -> error_stack::Result<Self, KernelError> {
        let location = match location {
            Some(location) => location,
            None => env(STOREFRONT_SEED)
                .convert_error()?
                .unwrap_or_else(|| DEFAULT_SEED.to_string()),
        };
        Ok(Self::new(location))
    }
}

#[async_trait::async_trait]
impl SeedSource for CatalogSeed {
    async fn fetch(&self) -> error_stack::Result<Vec<Vehicle>, KernelError> {
        match self {
            CatalogSeed::File(source) => source.fetch().await,
            CatalogSeed::Http(source) => source.fetch().await,
        }
    }
}

#[cfg(test)]
mod test {
    use super::CatalogSeed;

    #[test]
    fn location_picks_the_source() {
        assert!(matches!(
            CatalogSeed::new("https://example.com/data/cars.json"),
            CatalogSeed::Http(_)
        ));
        assert!(matches!(
            CatalogSeed::new("./data/cars.json"),
            CatalogSeed::File(_)
        ));
    }
}
