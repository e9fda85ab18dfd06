use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::VehicleSnapshot;
use crate::KernelError;

#[async_trait::async_trait]
pub trait SelectionQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Option<VehicleSnapshot>, KernelError>;
}

pub trait DependOnSelectionQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type SelectionQuery: SelectionQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn selection_query(&self) -> &Self::SelectionQuery;
}
