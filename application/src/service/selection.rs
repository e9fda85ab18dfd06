use error_stack::Report;
use tracing::info;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnSelectionQuery, SelectionQuery};
use kernel::interface::update::{DependOnSelectionModifier, SelectionModifier};
use kernel::prelude::entity::{Vehicle, VehicleId, VehicleSnapshot};
use kernel::KernelError;

use crate::service::CatalogService;
use crate::transfer::{SelectVehicleDto, VehicleDto};

/// Outcome of re-resolving the stored selection against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    Absent,
    /// The vehicle stopped being available. The stored selection has been cleared.
    Invalidated(VehicleSnapshot),
    Active(Vehicle),
}

#[async_trait::async_trait]
pub trait SelectionService:
    'static + Sync + Send + CatalogService + DependOnSelectionQuery + DependOnSelectionModifier
{
    #[tracing::instrument(skip_all, fields(id = dto.id))]
    async fn select_vehicle(
        &self,
        dto: SelectVehicleDto,
    ) -> error_stack::Result<VehicleDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let id = VehicleId::new(dto.id);

        let Some(vehicle) = self.lookup_vehicle(&mut connection, &id).await? else {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("Car with id {id} not found")));
        };
        if !vehicle.is_available() {
            return Err(Report::new(KernelError::Unavailable)
                .attach_printable(format!("Car with id {id} is no longer available")));
        }

        self.selection_modifier()
            .save(&mut connection, &vehicle.snapshot())
            .await?;
        connection.commit().await?;
        Ok(VehicleDto::from(vehicle))
    }

    /// Latest known state of the selected vehicle, or `None` when nothing is
    /// selected or the selection was just invalidated.
    async fn resolve_selection(&self) -> error_stack::Result<Option<VehicleDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let state = self.inspect_selection(&mut connection).await?;
        connection.commit().await?;
        match state {
            SelectionState::Active(vehicle) => Ok(Some(VehicleDto::from(vehicle))),
            SelectionState::Absent | SelectionState::Invalidated(_) => Ok(None),
        }
    }

    async fn inspect_selection(
        &self,
        con: &mut <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    ) -> error_stack::Result<SelectionState, KernelError> {
        let Some(snapshot) = self.selection_query().find(con).await? else {
            return Ok(SelectionState::Absent);
        };
        let id = snapshot.as_ref().id().clone();
        match self.lookup_vehicle(con, &id).await? {
            Some(latest) if latest.is_available() => Ok(SelectionState::Active(latest)),
            Some(_) => {
                info!("Selected car {id} is no longer available, clearing selection");
                self.selection_modifier().clear(con).await?;
                Ok(SelectionState::Invalidated(snapshot))
            }
            None => Ok(SelectionState::Active(snapshot.into())),
        }
    }
}

impl<T> SelectionService for T where
    T: CatalogService + DependOnSelectionQuery + DependOnSelectionModifier
{
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::KernelError;

    use crate::mock::{seed, TestModule};
    use crate::service::{CatalogService, SelectionService};
    use crate::transfer::{SelectVehicleDto, UpdateAvailabilityDto};

    #[tokio::test]
    async fn selecting_stores_snapshot() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new(Some(seed()));
        module.load_catalog().await?;

        let selected = module.select_vehicle(SelectVehicleDto { id: 2 }).await?;
        assert_eq!(selected.model, "Civic");
        let resolved = module.resolve_selection().await?;
        assert_eq!(resolved, Some(selected));
        Ok(())
    }

    #[tokio::test]
    async fn unavailable_vehicle_is_never_selected() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new(Some(seed()));
        module.load_catalog().await?;

        for _ in 0..2 {
            let error = module
                .select_vehicle(SelectVehicleDto { id: 3 })
                .await
                .expect_err("car 3 is unavailable");
            assert_eq!(error.current_context(), &KernelError::Unavailable);
            assert_eq!(module.resolve_selection().await?, None);
        }
        Ok(())
    }

    #[tokio::test]
    async fn unknown_vehicle_is_not_found() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new(Some(seed()));
        module.load_catalog().await?;
        let error = module
            .select_vehicle(SelectVehicleDto { id: 99 })
            .await
            .expect_err("car 99 does not exist");
        assert_eq!(error.current_context(), &KernelError::NotFound);
        Ok(())
    }

    #[tokio::test]
    async fn selection_heals_when_vehicle_is_taken() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new(Some(seed()));
        module.load_catalog().await?;
        module.select_vehicle(SelectVehicleDto { id: 1 }).await?;

        module
            .update_availability(UpdateAvailabilityDto {
                id: 1,
                available: false,
            })
            .await?;

        assert_eq!(module.resolve_selection().await?, None);
        let con = module.storage().transact().await?;
        assert_eq!(con.get_item("selectedCar").await, None);
        Ok(())
    }

    #[tokio::test]
    async fn selection_prefers_fresh_catalog_state() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new(Some(seed()));
        module.load_catalog().await?;
        module.select_vehicle(SelectVehicleDto { id: 1 }).await?;

        let other_tab = module.open_tab();
        other_tab.load_catalog().await?;
        other_tab
            .update_availability(UpdateAvailabilityDto {
                id: 1,
                available: false,
            })
            .await?;

        // The first tab still holds its own copy until it reloads.
        assert!(module.resolve_selection().await?.is_some());
        module.load_catalog().await?;
        assert_eq!(module.resolve_selection().await?, None);
        Ok(())
    }
}
