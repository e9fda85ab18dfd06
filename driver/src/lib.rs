use crate::error::DriverError;

pub mod clock;
pub mod database;
pub mod error;
pub mod seed;

/// `None` when the variable is not set. A `.env` file is honored.
pub(crate) fn env(key: &str) -> Result<Option<String>, DriverError> {
    match dotenvy::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(error) => Err(DriverError::from(error)),
    }
}
