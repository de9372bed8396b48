//! Commodity registry deriving unit prices from sample transactions.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::interpreter::{BuildError, CurrencyRegistry, Expression};
use crate::parser::{CREDITS, IS, Record, RecordKind};
use crate::types::Commodity;

/// Unit prices per commodity, in first-seen order.
#[derive(Debug, Default, Clone)]
pub struct CommodityRegistry {
    commodities: Vec<Commodity>,
    index: HashMap<String, usize>,
}

impl CommodityRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a commodity from every transaction record among `records`.
    ///
    /// A later transaction for the same commodity replaces the earlier price.
    pub fn from_records<'a>(
        records: impl IntoIterator<Item = &'a Record>,
        currencies: &CurrencyRegistry,
    ) -> Result<Self, BuildError> {
        let mut registry = Self::new();
        for record in records {
            if record.kind == RecordKind::Transaction {
                registry.insert(derive_commodity(record, currencies)?);
            }
        }
        Ok(registry)
    }

    pub fn insert(&mut self, commodity: Commodity) {
        if let Some(&at) = self.index.get(commodity.name()) {
            self.commodities[at] = commodity;
        } else {
            self.index
                .insert(commodity.name().to_string(), self.commodities.len());
            self.commodities.push(commodity);
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Commodity> {
        self.index.get(name).map(|&at| &self.commodities[at])
    }

    pub fn commodities(&self) -> impl Iterator<Item = &Commodity> {
        self.commodities.iter()
    }

    /// Commodity names, for typo suggestions.
    pub fn names(&self) -> Vec<String> {
        self.commodities
            .iter()
            .map(|c| c.name().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commodities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commodities.is_empty()
    }
}

/// Derive a commodity's unit price from one transaction line.
///
/// The commodity is the word before the first `is`, the total is the
/// integer before the first `Credits`, and the quantity is the numeral
/// phrase formed by every currency word on the line. The unit price is
/// marked inexact when the division does not terminate within decimal
/// precision.
///
/// # Example
///
/// ```
/// use galaxy::{CurrencyRegistry, classify};
/// use galaxy::interpreter::derive_commodity;
///
/// let mut currencies = CurrencyRegistry::new();
/// currencies.define(1, "pish", 'X').unwrap();
///
/// let record = classify(2, "pish pish Iron is 3910 Credits");
/// let iron = derive_commodity(&record, &currencies).unwrap();
/// assert_eq!(iron.name(), "Iron");
/// assert_eq!(iron.per_unit_value().to_string(), "195.5");
/// ```
pub fn derive_commodity(
    record: &Record,
    currencies: &CurrencyRegistry,
) -> Result<Commodity, BuildError> {
    let line = record.line;
    let words = record.words();

    let name = word_before(&words, IS, line)?;
    let price_word = word_before(&words, CREDITS, line)?;
    let total: u64 = price_word.parse().map_err(|_| BuildError::InvalidPrice {
        line,
        value: price_word.to_string(),
    })?;

    let expression = Expression::new(currencies.extract_tokens_in_order(&words))
        .map_err(|source| BuildError::Expression { line, source })?;
    if expression.value() == 0 {
        return Err(BuildError::ZeroQuantity {
            line,
            commodity: name.to_string(),
        });
    }

    let quantity = Decimal::from(expression.value());
    let per_unit = (Decimal::from(total) / quantity).normalize();
    let exact = per_unit.checked_mul(quantity) == Some(Decimal::from(total));
    debug!(line, commodity = name, quantity = expression.value(), total, %per_unit, exact, "derived unit price");

    let commodity = Commodity::new(name, per_unit);
    Ok(if exact { commodity } else { commodity.inexact() })
}

/// The word immediately preceding the first occurrence of `anchor`.
fn word_before<'w>(
    words: &[&'w str],
    anchor: &'static str,
    line: usize,
) -> Result<&'w str, BuildError> {
    let at = words
        .iter()
        .position(|w| *w == anchor)
        .ok_or(BuildError::MissingAnchor { line, anchor })?;
    at.checked_sub(1)
        .map(|before| words[before])
        .ok_or(BuildError::MissingWordBefore { line, anchor })
}
