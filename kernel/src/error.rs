use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// The external catalog seed was unreachable or malformed.
    Fetch,
    /// A persisted slot held JSON that could not be decoded.
    Parse,
    NotFound,
    /// The vehicle exists but can no longer be booked.
    Unavailable,
    Validation,
    InvalidTransition,
    /// One half of a commit was applied and the other could not be verified.
    Consistency,
    Concurrency,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Fetch => write!(f, "Failed to fetch catalog seed"),
            KernelError::Parse => write!(f, "Persisted data could not be parsed"),
            KernelError::NotFound => write!(f, "Entity not found"),
            KernelError::Unavailable => write!(f, "Vehicle is unavailable"),
            KernelError::Validation => write!(f, "Validation failed"),
            KernelError::InvalidTransition => write!(f, "Invalid status transition"),
            KernelError::Consistency => write!(f, "Critical data consistency error"),
            KernelError::Concurrency => write!(f, "Concurrency error"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
