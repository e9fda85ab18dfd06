use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln, References};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct DailyRate(Decimal);

impl DailyRate {
    pub fn new(rate: impl Into<Decimal>) -> Self {
        Self(rate.into())
    }
}

impl Display for DailyRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// Rate times day count. No rounding is applied; two decimals only on display.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct TotalPrice(Decimal);

impl TotalPrice {
    pub fn new(total: impl Into<Decimal>) -> Self {
        Self(total.into())
    }
}

impl Display for TotalPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct PriceQuote {
    daily_rate: DailyRate,
    days: u32,
    total: TotalPrice,
}

impl PriceQuote {
    pub fn new(daily_rate: DailyRate, days: u32) -> Self {
        let total = TotalPrice::new(*daily_rate.as_ref() * Decimal::from(days));
        Self {
            daily_rate,
            days,
            total,
        }
    }
}
