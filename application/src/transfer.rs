mod catalog;
mod draft;
mod order;
mod reservation;
mod vehicle;

pub use self::{catalog::*, draft::*, order::*, reservation::*, vehicle::*};
