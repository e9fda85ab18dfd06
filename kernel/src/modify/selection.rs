use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::VehicleSnapshot;
use crate::KernelError;

#[async_trait::async_trait]
pub trait SelectionModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn save(
        &self,
        con: &mut Self::Transaction,
        snapshot: &VehicleSnapshot,
    ) -> error_stack::Result<(), KernelError>;
    async fn clear(&self, con: &mut Self::Transaction) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnSelectionModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type SelectionModifier: SelectionModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn selection_modifier(&self) -> &Self::SelectionModifier;
}
