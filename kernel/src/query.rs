mod catalog;
mod draft;
mod order;
mod selection;

pub use self::{catalog::*, draft::*, order::*, selection::*};
