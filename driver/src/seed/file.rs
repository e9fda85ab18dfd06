use std::path::PathBuf;

use error_stack::ResultExt;
use tracing::debug;

use kernel::interface::seed::SeedSource;
use kernel::prelude::entity::Vehicle;
use kernel::KernelError;

use crate::database::VehicleRow;
use crate::error::DriverError;

#[derive(Debug, Clone)]
pub struct FileSeedSource {
    path: PathBuf,
}

impl FileSeedSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl SeedSource for FileSeedSource {
    async fn fetch(&self) -> error_stack::Result<Vec<Vehicle>, KernelError> {
        debug!("Reading catalog seed from {}", self.path.display());
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(DriverError::from)
            .change_context(KernelError::Fetch)
            .attach_printable_lazy(|| format!("Seed file {} unreadable", self.path.display()))?;
        let rows = serde_json::from_str::<Vec<VehicleRow>>(&raw)
            .map_err(DriverError::from)
            .change_context(KernelError::Fetch)
            .attach_printable_lazy(|| {
                format!("Seed file {} is not a list of cars", self.path.display())
            })?;
        Ok(rows.into_iter().map(Vehicle::from).collect())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::seed::SeedSource;
    use kernel::KernelError;

    use crate::seed::FileSeedSource;

    #[tokio::test]
    async fn reads_vehicle_list() -> error_stack::Result<(), KernelError> {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("cars.json");
        std::fs::write(
            &path,
            r#"[{"id": 3, "make": "Honda", "model": "Civic", "year": 2023, "type": "Sedan",
                 "price_per_day": 55, "availability": true}]"#,
        )
        .expect("write seed");

        let vehicles = FileSeedSource::new(&path).fetch().await?;
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].make().as_ref(), "Honda");
        Ok(())
    }

    #[tokio::test]
    async fn non_list_is_a_fetch_failure() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("cars.json");
        std::fs::write(&path, r#"{"cars": []}"#).expect("write seed");

        let result = FileSeedSource::new(&path).fetch().await;
        assert!(result.is_err_and(|report| report.current_context() == &KernelError::Fetch));

        let missing = FileSeedSource::new(dir.path().join("missing.json")).fetch().await;
        assert!(missing.is_err_and(|report| report.current_context() == &KernelError::Fetch));
    }
}
