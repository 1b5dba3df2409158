//! Field-level validation of product submissions.
//!
//! Every field is checked independently; a rejected submission reports all of
//! its invalid fields at once and never yields a partial product.

use core::fmt;
use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::availability::Availability;
use crate::price::Price;
use crate::product::Product;
use crate::submission::ProductSubmission;

/// Form field identifier, ordered as the fields appear on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Description,
    Value,
    Available,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Description, Field::Value, Field::Available];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Value => "value",
            Field::Available => "available",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a single field was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    #[error("required field")]
    Required,

    #[error("enter a valid value")]
    InvalidValue,

    #[error("choose an option")]
    ChooseOption,
}

/// All field errors of one rejected submission.
#[derive(Debug, Error, Clone, Default, PartialEq, Eq, Serialize)]
#[error("{}", summarize(.errors))]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    fn record<T>(&mut self, field: Field, outcome: &Result<T, FieldError>) {
        if let Err(error) = outcome {
            self.errors.insert(field, *error);
        }
    }
}

fn summarize(errors: &BTreeMap<Field, FieldError>) -> String {
    errors
        .iter()
        .map(|(field, error)| format!("{field}: {error}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate a raw submission into a [`Product`].
pub fn validate(submission: &ProductSubmission) -> Result<Product, ValidationErrors> {
    let name = required(&submission.name);
    let description = required(&submission.description);
    let value = Price::parse(&submission.value).map_err(|_| FieldError::InvalidValue);
    let available = match submission.available.as_deref() {
        None => Ok(Availability::default()),
        Some(text) => text.parse::<Availability>().map_err(|_| FieldError::ChooseOption),
    };

    match (name, description, value, available) {
        (Ok(name), Ok(description), Ok(value), Ok(available)) => {
            Ok(Product::new(name, description, value, available))
        }
        (name, description, value, available) => {
            let mut errors = ValidationErrors::default();
            errors.record(Field::Name, &name);
            errors.record(Field::Description, &description);
            errors.record(Field::Value, &value);
            errors.record(Field::Available, &available);
            Err(errors)
        }
    }
}

/// Blank text is missing; anything else is kept exactly as entered.
fn required(text: &str) -> Result<String, FieldError> {
    if text.trim().is_empty() {
        Err(FieldError::Required)
    } else {
        Ok(text.to_string())
    }
}
