use rand::Rng;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Shared between the submit and confirm steps. Not a security token.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct ConfirmationCode(String);

impl ConfirmationCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn issue(rng: &mut impl Rng) -> Self {
        Self(format!("CONF{}", rng.gen_range(0..100_000)))
    }

    /// Exact, case-sensitive comparison.
    pub fn matches(&self, supplied: &str) -> bool {
        self.0 == supplied
    }
}
