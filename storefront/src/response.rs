mod catalog;
mod order;
mod reservation;

pub use self::{catalog::*, order::*, reservation::*};
