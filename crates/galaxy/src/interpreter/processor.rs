//! Query answering against the built registries.

use rust_decimal::Decimal;
use tracing::debug;

use crate::interpreter::{
    CommodityRegistry, CurrencyRegistry, Expression, QueryError, compute_suggestions,
};
use crate::parser::{CREDITS, IS, Record, RecordKind};

/// Fixed answer for lines that are neither records nor known queries.
pub const UNKNOWN_QUERY_ANSWER: &str = "I have no idea what you are talking about";

/// Decimal places kept when quoting a price derived from an inexact unit
/// price.
///
/// Unit prices from non-terminating divisions carry 28 significant digits;
/// rounding here turns `3.333...3 * 3` back into `10`. Exact prices are
/// never rounded.
pub const PRICE_SCALE: u32 = 12;

/// Answers value and price queries. Holds no state between lines.
#[derive(Debug, Clone, Copy)]
pub struct QueryProcessor<'a> {
    currencies: &'a CurrencyRegistry,
    commodities: &'a CommodityRegistry,
    unknown_answer: &'a str,
}

impl<'a> QueryProcessor<'a> {
    pub fn new(currencies: &'a CurrencyRegistry, commodities: &'a CommodityRegistry) -> Self {
        Self {
            currencies,
            commodities,
            unknown_answer: UNKNOWN_QUERY_ANSWER,
        }
    }

    /// Replace the answer given to unrecognized lines.
    pub fn with_unknown_answer(mut self, answer: &'a str) -> Self {
        self.unknown_answer = answer;
        self
    }

    /// Answer one record.
    ///
    /// Definitions and transactions produce no answer.
    pub fn answer(&self, record: &Record) -> Result<Option<String>, QueryError> {
        let answer = match record.kind {
            RecordKind::Definition { .. } | RecordKind::Transaction => return Ok(None),
            RecordKind::ValueQuery => self.value_query(record)?,
            RecordKind::PriceQuery => self.price_query(record)?,
            RecordKind::Unrecognized => self.unknown_answer.to_string(),
        };
        debug!(line = record.line, %answer, "answered");
        Ok(Some(answer))
    }

    /// `how much is pish tegj glob glob ?` -> `pish tegj glob glob is 42`
    pub fn value_query(&self, record: &Record) -> Result<String, QueryError> {
        let expression = self.evaluate_phrase(record.words())?;
        let value = expression.value().to_string();

        let mut parts = expression.symbols();
        parts.extend([IS, value.as_str()]);
        Ok(parts.join(" "))
    }

    /// `how many Credits is glob prok Silver ?` -> `glob prok Silver is 68 Credits`
    ///
    /// The commodity is the second-to-last word; the numeral phrase is made
    /// of the currency words before it.
    pub fn price_query(&self, record: &Record) -> Result<String, QueryError> {
        let words = record.words();
        let Some(name_at) = words.len().checked_sub(2) else {
            return Err(self.unknown_commodity(""));
        };
        let name = words[name_at];
        let commodity = self
            .commodities
            .lookup(name)
            .ok_or_else(|| self.unknown_commodity(name))?;

        let expression = self.evaluate_phrase(&words[..name_at])?;
        let total = commodity
            .per_unit_value()
            .checked_mul(Decimal::from(expression.value()))
            .ok_or_else(|| QueryError::Overflow {
                commodity: name.to_string(),
                quantity: expression.value(),
            })?;
        let price = format_price(total, commodity.is_exact());

        let mut parts = expression.symbols();
        parts.extend([name, IS, price.as_str(), CREDITS]);
        Ok(parts.join(" "))
    }

    /// Build a validated expression from the currency words among `words`.
    pub fn evaluate_phrase<I, S>(&self, words: I) -> Result<Expression<'a>, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Expression::new(self.currencies.extract_tokens_in_order(words)).map_err(Into::into)
    }

    fn unknown_commodity(&self, name: &str) -> QueryError {
        QueryError::UnknownCommodity {
            name: name.to_string(),
            suggestions: compute_suggestions(name, &self.commodities.names()),
        }
    }
}

/// Plain decimal notation with trailing zeros stripped.
///
/// Only inexact prices are rounded to [`PRICE_SCALE`] places.
pub fn format_price(price: Decimal, exact: bool) -> String {
    let price = if exact { price } else { price.round_dp(PRICE_SCALE) };
    price.normalize().to_string()
}
