use rust_decimal::Decimal;
use time::{Date, OffsetDateTime};

use kernel::prelude::entity::{DestructOrder, Order, OrderStatus};

use crate::transfer::VehicleDto;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderDto {
    pub order_id: String,
    pub car: VehicleDto,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub customer_license: String,
    pub start_date: Date,
    pub days: u32,
    pub total_price: Decimal,
    pub status: OrderStatus,
    pub confirmation_code: String,
    pub ordered_at: OffsetDateTime,
}

impl From<Order> for OrderDto {
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
        Self {
            order_id: id.into(),
            car: car.into(),
            customer_name: customer.name().clone(),
            customer_phone: customer.phone().clone(),
            customer_email: customer.email().clone(),
            customer_license: customer.license().clone(),
            start_date: *rental.start_date(),
            days: (*rental.days()).into(),
            total_price: rental.total_price().clone().into(),
            status,
            confirmation_code: confirmation_code.into(),
            ordered_at: ordered_at.into(),
        }
    }
}

pub struct GetOrderDto {
    pub order_id: String,
}

pub struct SetOrderStatusDto {
    pub order_id: String,
    pub status: OrderStatus,
}

pub struct ConfirmOrderDto {
    pub order_id: String,
    /// When present it must equal the code issued at submit time.
    pub confirmation_code: Option<String>,
}
