//! Raw form submission, exactly as collected from the user.

use serde::{Deserialize, Serialize};

/// Unvalidated product form input.
///
/// `available` is `None` when the availability control was never presented to
/// the user; validation then falls back to the pre-selected option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<String>,
}

impl ProductSubmission {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            value: value.into(),
            available: None,
        }
    }

    pub fn with_available(mut self, available: impl Into<String>) -> Self {
        self.available = Some(available.into());
        self
    }
}
