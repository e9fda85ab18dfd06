mod catalog;
mod draft;
mod order;
mod reservation;
mod selection;

pub use self::{catalog::*, draft::*, order::*, reservation::*, selection::*};
