use clap::Args;

use application::transfer::{ConfirmOrderDto, GetOrderDto};

use crate::controller::Intake;

#[derive(Debug, Args)]
pub struct ConfirmRequest {
    order_id: String,
    /// Confirmation code handed out when the order was placed
    #[arg(long)]
    code: Option<String>,
}

#[derive(Debug, Args)]
pub struct OrdersRequest {
    /// Show a single order
    #[arg(long)]
    id: Option<String>,
    /// Show the most recently placed order
    #[arg(long, conflicts_with = "id")]
    latest: bool,
}

impl OrdersRequest {
    pub fn latest(&self) -> bool {
        self.latest
    }

    pub fn id(self) -> Option<String> {
        self.id
    }
}

pub struct OrderTransformer;

impl Intake<ConfirmRequest> for OrderTransformer {
    type To = ConfirmOrderDto;
    fn emit(&self, input: ConfirmRequest) -> Self::To {
        ConfirmOrderDto {
            order_id: input.order_id,
            confirmation_code: input.code,
        }
    }
}

impl Intake<String> for OrderTransformer {
    type To = GetOrderDto;
    fn emit(&self, input: String) -> Self::To {
        GetOrderDto { order_id: input }
    }
}
