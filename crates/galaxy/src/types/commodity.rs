use rust_decimal::Decimal;
use serde::Serialize;

/// A traded good and its derived price per unit, in Credits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commodity {
    name: String,
    per_unit_value: Decimal,
    exact: bool,
}

impl Commodity {
    /// A commodity whose unit price is exactly `per_unit_value`.
    pub fn new(name: impl Into<String>, per_unit_value: Decimal) -> Self {
        Self {
            name: name.into(),
            per_unit_value,
            exact: true,
        }
    }

    /// Mark the unit price as the rounded result of a non-terminating
    /// division.
    pub fn inexact(mut self) -> Self {
        self.exact = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price of a single unit. May be fractional (e.g. `195.5`).
    pub fn per_unit_value(&self) -> Decimal {
        self.per_unit_value
    }

    /// Whether `per_unit_value` times the quantity reproduces the sampled
    /// total. Inexact prices are rounded when quoted.
    pub fn is_exact(&self) -> bool {
        self.exact
    }
}
