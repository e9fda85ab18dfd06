use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::Draft;
use crate::KernelError;

#[async_trait::async_trait]
pub trait DraftModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn save(
        &self,
        con: &mut Self::Transaction,
        draft: &Draft,
    ) -> error_stack::Result<(), KernelError>;
    async fn delete(&self, con: &mut Self::Transaction) -> error_stack::Result<(), KernelError>;
    async fn set_cancelled(
        &self,
        con: &mut Self::Transaction,
        cancelled: bool,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnDraftModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type DraftModifier: DraftModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn draft_modifier(&self) -> &Self::DraftModifier;
}
