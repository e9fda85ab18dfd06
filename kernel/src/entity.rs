mod catalog;
mod draft;
mod order;
mod vehicle;

pub use self::{catalog::*, draft::*, order::*, vehicle::*};
