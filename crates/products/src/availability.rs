//! Availability for sale.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use prodreg_core::{DomainError, ValueObject};

/// Whether a product is available for sale.
///
/// Defaults to `Yes`, the option pre-selected on the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    #[default]
    Yes,
    No,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Yes => "yes",
            Availability::No => "no",
        }
    }

    pub fn is_available(&self) -> bool {
        *self == Availability::Yes
    }
}

impl ValueObject for Availability {}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Availability {
    type Err = DomainError;

    /// Only the exact option values are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Availability::Yes),
            "no" => Ok(Availability::No),
            other => Err(DomainError::validation(format!("unknown availability: {other:?}"))),
        }
    }
}
