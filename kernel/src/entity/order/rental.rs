use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use vodca::{AsRefln, Fromln, References};

use crate::entity::TotalPrice;

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct RentalDays(u32);

impl RentalDays {
    pub fn new(days: impl Into<u32>) -> Self {
        Self(days.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct RentalDetails {
    start_date: Date,
    days: RentalDays,
    total_price: TotalPrice,
}

impl RentalDetails {
    pub fn new(start_date: Date, days: RentalDays, total_price: TotalPrice) -> Self {
        Self {
            start_date,
            days,
            total_price,
        }
    }
}

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct OrderedAt(OffsetDateTime);

impl OrderedAt {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into())
    }

    pub fn unix_millis(&self) -> i64 {
        (self.0.unix_timestamp_nanos() / 1_000_000) as i64
    }
}
