use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::Vehicle;
use crate::KernelError;

#[async_trait::async_trait]
pub trait CatalogModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn replace_all(
        &self,
        con: &mut Self::Transaction,
        vehicles: &[Vehicle],
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnCatalogModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type CatalogModifier: CatalogModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn catalog_modifier(&self) -> &Self::CatalogModifier;
}
