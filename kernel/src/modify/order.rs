use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Order, OrderId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait OrderModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn append(
        &self,
        con: &mut Self::Transaction,
        order: &Order,
    ) -> error_stack::Result<(), KernelError>;
    /// Replaces the entry with the same id in place.
    async fn update(
        &self,
        con: &mut Self::Transaction,
        order: &Order,
    ) -> error_stack::Result<(), KernelError>;
    async fn set_latest_id(
        &self,
        con: &mut Self::Transaction,
        id: &OrderId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnOrderModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type OrderModifier: OrderModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn order_modifier(&self) -> &Self::OrderModifier;
}
