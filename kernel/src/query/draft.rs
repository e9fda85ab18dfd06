use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::Draft;
use crate::KernelError;

#[async_trait::async_trait]
pub trait DraftQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Option<Draft>, KernelError>;
    async fn is_cancelled(&self, con: &mut Self::Transaction)
        -> error_stack::Result<bool, KernelError>;
}

pub trait DependOnDraftQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type DraftQuery: DraftQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn draft_query(&self) -> &Self::DraftQuery;
}
