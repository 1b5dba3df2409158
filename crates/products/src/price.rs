//! Price value object: an exact, non-negative amount in minor units (centavos).

use core::fmt;
use core::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use prodreg_core::{DomainError, DomainResult, ValueObject};

/// Minor units per whole currency unit.
pub const MINOR_UNITS_PER_UNIT: u64 = 100;

/// Digits, optionally followed by `.` or `,` and one or two digits.
static PRICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+([.,][0-9]{1,2})?$").expect("price pattern is a valid regex")
});

/// Product price, stored in the smallest currency unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn from_minor_units(minor_units: u64) -> Self {
        Self(minor_units)
    }

    pub fn minor_units(self) -> u64 {
        self.0
    }

    /// Whether `text` has the shape of a price as typed into the form.
    ///
    /// The text is checked as entered; surrounding whitespace does not match.
    pub fn matches_pattern(text: &str) -> bool {
        PRICE_PATTERN.is_match(text)
    }

    /// Parse price text accepting either `.` or `,` as the decimal separator.
    pub fn parse(text: &str) -> DomainResult<Self> {
        if !Self::matches_pattern(text) {
            return Err(DomainError::validation(format!("malformed price: {text:?}")));
        }
        Self::from_normalized(&text.replace(',', "."))
    }

    fn from_normalized(text: &str) -> DomainResult<Self> {
        let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
        let whole = parse_digits(whole)?;
        let fraction = match fraction.len() {
            0 => 0,
            1 => parse_digits(fraction)? * 10,
            2 => parse_digits(fraction)?,
            _ => {
                return Err(DomainError::validation(format!(
                    "too many fractional digits: {text:?}"
                )));
            }
        };

        whole
            .checked_mul(MINOR_UNITS_PER_UNIT)
            .and_then(|minor| minor.checked_add(fraction))
            .map(Self)
            .ok_or_else(|| DomainError::validation(format!("price out of range: {text:?}")))
    }

    /// Render as Brazilian real, e.g. `R$ 12.345,67`.
    pub fn to_brl(self) -> String {
        let whole = (self.0 / MINOR_UNITS_PER_UNIT).to_string();
        let cents = self.0 % MINOR_UNITS_PER_UNIT;

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }

        format!("R$ {grouped},{cents:02}")
    }
}

fn parse_digits(digits: &str) -> DomainResult<u64> {
    digits
        .parse()
        .map_err(|e| DomainError::validation(format!("price out of range: {digits:?} ({e})")))
}

impl ValueObject for Price {}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / MINOR_UNITS_PER_UNIT,
            self.0 % MINOR_UNITS_PER_UNIT
        )
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
