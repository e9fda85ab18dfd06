use error_stack::Report;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::{Date, OffsetDateTime};
use tracing::warn;

use kernel::interface::query::OrderQuery;
use kernel::interface::update::OrderModifier;
use kernel::prelude::entity::{
    ConfirmationCode, Customer, DestructOrder, Order, OrderId, OrderStatus, OrderedAt,
    RentalDays, RentalDetails, TotalPrice, Vehicle, VehicleSnapshot,
};
use kernel::KernelError;

use crate::database::local_storage::{LocalStorageTransaction, LATEST_ORDER_ID_KEY, ORDERS_KEY};
use crate::database::VehicleRow;
use crate::error::{ConvertError, DriverError};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

pub struct LocalOrderRepository;

#[async_trait::async_trait]
impl OrderQuery for LocalOrderRepository {
    type Transaction = LocalStorageTransaction;

    async fn find_all(
        &self,
        con: &mut LocalStorageTransaction,
    ) -> error_stack::Result<Vec<Order>, KernelError> {
        LocalOrderInternal::find_all(con).await
    }

    async fn find_by_id(
        &self,
        con: &mut LocalStorageTransaction,
        id: &OrderId,
    ) -> error_stack::Result<Option<Order>, KernelError> {
        let found = LocalOrderInternal::find_all(con)
            .await?
            .into_iter()
            .find(|order| order.id() == id);
        Ok(found)
    }

    async fn find_latest_id(
        &self,
        con: &mut LocalStorageTransaction,
    ) -> error_stack::Result<Option<OrderId>, KernelError> {
        Ok(con.get_item(LATEST_ORDER_ID_KEY).await.map(OrderId::new))
    }
}

#[async_trait::async_trait]
impl OrderModifier for LocalOrderRepository {
    type Transaction = LocalStorageTransaction;

    async fn append(
        &self,
        con: &mut LocalStorageTransaction,
        order: &Order,
    ) -> error_stack::Result<(), KernelError> {
        let mut rows = LocalOrderInternal::read_rows(con).await?;
        rows.push(LocalOrderInternal::encode(order)?);
        LocalOrderInternal::write_rows(con, rows).await
    }

    async fn update(
        &self,
        con: &mut LocalStorageTransaction,
        order: &Order,
    ) -> error_stack::Result<(), KernelError> {
        let mut rows = LocalOrderInternal::read_rows(con).await?;
        let id = order.id().as_ref().as_str();
        let Some(stored) = rows
            .iter_mut()
            .find(|row| row.get("orderId").and_then(Value::as_str) == Some(id))
        else {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("Order {} not found", order.id())));
        };
        *stored = LocalOrderInternal::encode(order)?;
        LocalOrderInternal::write_rows(con, rows).await
    }

    async fn set_latest_id(
        &self,
        con: &mut LocalStorageTransaction,
        id: &OrderId,
    ) -> error_stack::Result<(), KernelError> {
        con.set_item(LATEST_ORDER_ID_KEY, id.to_string()).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderRow {
    order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    car_vin: Option<String>,
    car: VehicleRow,
    customer: CustomerRow,
    rental_details: RentalRow,
    status: OrderStatus,
    confirmation_code: String,
    /// Unix millis. Missing in ledgers written before it was recorded.
    #[serde(default)]
    order_date: i64,
}

#[derive(Debug, Serialize, Deserialize)]
struct CustomerRow {
    name: String,
    phone: String,
    email: String,
    license: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RentalRow {
    #[serde(with = "iso_date")]
    start_date: Date,
    days: u32,
    #[serde(with = "rust_decimal::serde::float")]
    total_price: Decimal,
}

impl From<OrderRow> for Order {
    fn from(value: OrderRow) -> Self {
        let ordered_at =
            OffsetDateTime::from_unix_timestamp_nanos(i128::from(value.order_date) * 1_000_000)
                .unwrap_or(OffsetDateTime::UNIX_EPOCH);
        Order::new(
            OrderId::new(value.order_id),
            VehicleSnapshot::new(Vehicle::from(value.car)),
            Customer::new(
                value.customer.name,
                value.customer.phone,
                value.customer.email,
                value.customer.license,
            ),
            RentalDetails::new(
                value.rental_details.start_date,
                RentalDays::new(value.rental_details.days),
                TotalPrice::new(value.rental_details.total_price),
            ),
            value.status,
            ConfirmationCode::new(value.confirmation_code),
            OrderedAt::new(ordered_at),
        )
    }
}

impl From<Order> for OrderRow {
    fn from(value: Order) -> Self {
        let DestructOrder {
            id,
            car,
            customer,
            rental,
            status,
            confirmation_code,
            ordered_at,
        } = value.into_destruct();
        let car = Vehicle::from(car);
        Self {
            order_id: id.into(),
            car_vin: car.vin().as_ref().map(|vin| vin.as_ref().clone()),
            order_date: ordered_at.unix_millis(),
            car: VehicleRow::from(car),
            customer: CustomerRow {
                name: customer.name().clone(),
                phone: customer.phone().clone(),
                email: customer.email().clone(),
                license: customer.license().clone(),
            },
            rental_details: RentalRow {
                start_date: *rental.start_date(),
                days: (*rental.days()).into(),
                total_price: rental.total_price().clone().into(),
            },
            status,
            confirmation_code: confirmation_code.into(),
        }
    }
}

/// The ledger is kept as raw JSON rows so that a row this build cannot read
/// survives later writes untouched.
pub(in crate::database) struct LocalOrderInternal;

impl LocalOrderInternal {
    async fn read_rows(
        con: &mut LocalStorageTransaction,
    ) -> error_stack::Result<Vec<Value>, KernelError> {
        let Some(raw) = con.get_item(ORDERS_KEY).await else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(rows) => Ok(rows),
            Err(error) => {
                warn!("Stored `{ORDERS_KEY}` is not a list, the next order replaces it: {error}");
                Ok(Vec::new())
            }
        }
    }

    async fn find_all(
        con: &mut LocalStorageTransaction,
    ) -> error_stack::Result<Vec<Order>, KernelError> {
        let orders = Self::read_rows(con)
            .await?
            .into_iter()
            .enumerate()
            .filter_map(|(index, row)| match serde_json::from_value::<OrderRow>(row) {
                Ok(row) => Some(Order::from(row)),
                Err(error) => {
                    warn!("Skipping unreadable order #{index} in `{ORDERS_KEY}`: {error}");
                    None
                }
            })
            .collect();
        Ok(orders)
    }

    fn encode(order: &Order) -> error_stack::Result<Value, KernelError> {
        serde_json::to_value(OrderRow::from(order.clone()))
            .map_err(DriverError::from)
            .convert_error()
    }

    async fn write_rows(
        con: &mut LocalStorageTransaction,
        rows: Vec<Value>,
    ) -> error_stack::Result<(), KernelError> {
        let raw = serde_json::to_string(&rows)
            .map_err(DriverError::from)
            .convert_error()?;
        con.set_item(ORDERS_KEY, raw).await
    }
}
