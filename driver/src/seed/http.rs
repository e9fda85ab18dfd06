use error_stack::ResultExt;
use tracing::debug;

use kernel::interface::seed::SeedSource;
use kernel::prelude::entity::Vehicle;
use kernel::KernelError;

use crate::database::VehicleRow;
use crate::error::DriverError;

#[derive(Debug, Clone)]
pub struct HttpSeedSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSeedSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait::async_trait]
impl SeedSource for HttpSeedSource {
    async fn fetch(&self) -> error_stack::Result<Vec<Vehicle>, KernelError> {
        debug!("Fetching catalog seed from {}", self.url);
        let rows = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(DriverError::from)
            .change_context(KernelError::Fetch)
            .attach_printable_lazy(|| format!("GET {} failed", self.url))?
            .json::<Vec<VehicleRow>>()
            .await
            .map_err(DriverError::from)
            .change_context(KernelError::Fetch)
            .attach_printable_lazy(|| format!("{} did not return a list of cars", self.url))?;
        Ok(rows.into_iter().map(Vehicle::from).collect())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::seed::SeedSource;
    use kernel::KernelError;

    use crate::seed::HttpSeedSource;

    #[test_with::env(STOREFRONT_SEED_URL_TEST)]
    #[tokio::test]
    async fn fetches_remote_seed() -> error_stack::Result<(), KernelError> {
        let url = std::env::var("STOREFRONT_SEED_URL_TEST").expect("gated by test_with");
        let vehicles = HttpSeedSource::new(url).fetch().await?;
        assert!(!vehicles.is_empty());
        Ok(())
    }
}
