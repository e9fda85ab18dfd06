use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Vehicle, VehicleId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CatalogQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    /// `None` when nothing is persisted or the persisted value is not a vehicle sequence.
    async fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Option<Vec<Vehicle>>, KernelError>;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &VehicleId,
    ) -> error_stack::Result<Option<Vehicle>, KernelError>;
}

pub trait DependOnCatalogQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type CatalogQuery: CatalogQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn catalog_query(&self) -> &Self::CatalogQuery;
}
