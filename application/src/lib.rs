pub mod cache;
pub mod service;
pub mod transfer;

#[cfg(test)]
mod mock;
