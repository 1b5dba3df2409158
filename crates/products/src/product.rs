use serde::Serialize;

use prodreg_core::ValueObject;

use crate::availability::Availability;
use crate::price::Price;

/// A validated product.
///
/// Only [`crate::validate`] constructs products, so every instance has passed
/// all field rules. Products are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    name: String,
    description: String,
    value: Price,
    available: Availability,
}

impl Product {
    pub(crate) fn new(
        name: String,
        description: String,
        value: Price,
        available: Availability,
    ) -> Self {
        Self {
            name,
            description,
            value,
            available,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn value(&self) -> Price {
        self.value
    }

    pub fn available(&self) -> Availability {
        self.available
    }
}

impl ValueObject for Product {}
