use tracing::warn;

use kernel::interface::query::SelectionQuery;
use kernel::interface::update::SelectionModifier;
use kernel::prelude::entity::{Vehicle, VehicleSnapshot};
use kernel::KernelError;

use crate::database::local_storage::{LocalStorageTransaction, SELECTED_CAR_KEY};
use crate::database::VehicleRow;
use crate::error::{ConvertError, DriverError};

pub struct LocalSelectionRepository;

#[async_trait::async_trait]
impl SelectionQuery for LocalSelectionRepository {
    type Transaction = LocalStorageTransaction;

    async fn find(
        &self,
        con: &mut LocalStorageTransaction,
    ) -> error_stack::Result<Option<VehicleSnapshot>, KernelError> {
        let Some(raw) = con.get_item(SELECTED_CAR_KEY).await else {
            return Ok(None);
        };
        match serde_json::from_str::<VehicleRow>(&raw) {
            Ok(row) => Ok(Some(VehicleSnapshot::new(Vehicle::from(row)))),
            Err(error) => {
                warn!("Discarding unreadable `{SELECTED_CAR_KEY}`: {error}");
                con.remove_item(SELECTED_CAR_KEY).await?;
                Ok(None)
            }
        }
    }
}

#[async_trait::async_trait]
impl SelectionModifier for LocalSelectionRepository {
    type Transaction = LocalStorageTransaction;

    async fn save(
        &self,
        con: &mut LocalStorageTransaction,
        snapshot: &VehicleSnapshot,
    ) -> error_stack::Result<(), KernelError> {
        let row = VehicleRow::from(Vehicle::from(snapshot.clone()));
        let raw = serde_json::to_string(&row)
            .map_err(DriverError::from)
            .convert_error()?;
        con.set_item(SELECTED_CAR_KEY, raw).await
    }

    async fn clear(&self, con: &mut LocalStorageTransaction) -> error_stack::Result<(), KernelError> {
        con.remove_item(SELECTED_CAR_KEY).await
    }
}
