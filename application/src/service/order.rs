use error_stack::Report;
use tracing::info;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnOrderQuery, OrderQuery};
use kernel::interface::update::{DependOnOrderModifier, OrderModifier};
use kernel::prelude::entity::{Order, OrderId, OrderStatus};
use kernel::KernelError;

use crate::transfer::{GetOrderDto, OrderDto, SetOrderStatusDto};

#[async_trait::async_trait]
pub trait OrderLedgerService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnOrderQuery + DependOnOrderModifier
{
    async fn list_orders(&self) -> error_stack::Result<Vec<OrderDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let orders = self.order_query().find_all(&mut connection).await?;
        connection.commit().await?;
        Ok(orders.into_iter().map(OrderDto::from).collect())
    }

    async fn find_order(
        &self,
        dto: GetOrderDto,
    ) -> error_stack::Result<Option<OrderDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let order = self
            .order_query()
            .find_by_id(&mut connection, &OrderId::new(dto.order_id))
            .await?;
        connection.commit().await?;
        Ok(order.map(OrderDto::from))
    }

    /// Order referenced by the advisory `latestOrderId` slot, if it still exists.
    async fn latest_order(&self) -> error_stack::Result<Option<OrderDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let order = match self.order_query().find_latest_id(&mut connection).await? {
            Some(id) => self.order_query().find_by_id(&mut connection, &id).await?,
            None => None,
        };
        connection.commit().await?;
        Ok(order.map(OrderDto::from))
    }

    #[tracing::instrument(skip_all, fields(order_id = %dto.order_id, status = %dto.status))]
    async fn set_order_status(
        &self,
        dto: SetOrderStatusDto,
    ) -> error_stack::Result<OrderDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let order = self
            .transition_order(&mut connection, &OrderId::new(dto.order_id), dto.status)
            .await?;
        connection.commit().await?;
        Ok(OrderDto::from(order))
    }

    /// Appends to the ledger. Order ids must be unique.
    async fn record_order(
        &self,
        con: &mut <Self::DatabaseConnection as DatabaseConnection>::Transaction,
        order: &Order,
    ) -> error_stack::Result<(), KernelError> {
        if self.order_query().find_by_id(con, order.id()).await?.is_some() {
            return Err(Report::new(KernelError::Concurrency)
                .attach_printable(format!("Order {} already exists", order.id())));
        }
        self.order_modifier().append(con, order).await
    }

    async fn transition_order(
        &self,
        con: &mut <Self::DatabaseConnection as DatabaseConnection>::Transaction,
        id: &OrderId,
        status: OrderStatus,
    ) -> error_stack::Result<Order, KernelError> {
        let Some(mut order) = self.order_query().find_by_id(con, id).await? else {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("Order {id} not found")));
        };
        let current = *order.status();
        if !current.can_transition_to(&status) {
            let message = match (current, status) {
                (OrderStatus::Confirmed, OrderStatus::Confirmed) => {
                    String::from("Order already confirmed")
                }
                (current, status) => format!("Order {id} cannot move from {current} to {status}"),
            };
            return Err(Report::new(KernelError::InvalidTransition).attach_printable(message));
        }

        order.substitute(|order| *order.status = status);
        self.order_modifier().update(con, &order).await?;
        info!("Order {id} is now {status}");
        Ok(order)
    }
}

impl<T> OrderLedgerService for T where
    T: DependOnDatabaseConnection + DependOnOrderQuery + DependOnOrderModifier
{
}
