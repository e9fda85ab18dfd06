use rust_decimal::Decimal;

use kernel::prelude::entity::{FieldIssue, FormReport, PriceQuote};

use crate::transfer::{OrderDto, ReservationFormDto, VehicleDto};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssueDto {
    pub field: &'static str,
    pub message: &'static str,
}

impl From<&FieldIssue> for FieldIssueDto {
    fn from(value: &FieldIssue) -> Self {
        Self {
            field: value.field().key(),
            message: *value.message(),
        }
    }
}

pub(crate) fn issues_of(report: &FormReport) -> Vec<FieldIssueDto> {
    report.issues().iter().map(FieldIssueDto::from).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuoteDto {
    pub price_per_day: Decimal,
    pub days: u32,
    pub total_price: Decimal,
}

impl From<PriceQuote> for PriceQuoteDto {
    fn from(value: PriceQuote) -> Self {
        Self {
            price_per_day: value.daily_rate().clone().into(),
            days: *value.days(),
            total_price: value.total().clone().into(),
        }
    }
}

/// Where the reservation workflow stands after an operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ReservationStateDto {
    NoSelection,
    /// The chosen vehicle can no longer be booked. Requires a fresh selection.
    Unavailable { vehicle: VehicleDto },
    FormActive {
        vehicle: VehicleDto,
        form: ReservationFormDto,
        issues: Vec<FieldIssueDto>,
        quote: Option<PriceQuoteDto>,
    },
    Pending { order: OrderDto },
    Confirmed { order: OrderDto },
    Cancelled,
}
