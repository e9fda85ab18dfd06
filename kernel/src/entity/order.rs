mod confirmation;
mod customer;
mod id;
mod rental;
mod status;

pub use self::{confirmation::*, customer::*, id::*, rental::*, status::*};
use destructure::{Destructure, Mutation};
use vodca::References;

use crate::entity::VehicleSnapshot;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Order {
    id: OrderId,
    car: VehicleSnapshot,
    customer: Customer,
    rental: RentalDetails,
    status: OrderStatus,
    confirmation_code: ConfirmationCode,
    ordered_at: OrderedAt,
}

impl Order {
    pub fn new(
        id: OrderId,
        car: VehicleSnapshot,
        customer: Customer,
        rental: RentalDetails,
        status: OrderStatus,
        confirmation_code: ConfirmationCode,
        ordered_at: OrderedAt,
    ) -> Self {
        Self {
            id,
            car,
            customer,
            rental,
            status,
            confirmation_code,
            ordered_at,
        }
    }
}
