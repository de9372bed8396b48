//! Validated numeral expressions built from currency tokens.

use std::collections::HashMap;
use std::fmt;

use crate::interpreter::ExpressionError;
use crate::types::CurrencyToken;

/// Maximum number of times a symbol may appear back-to-back.
pub const LEGAL_REPETITION_LIMIT: usize = 3;

/// An ordered numeral phrase that satisfies every expression rule.
///
/// Tokens are borrowed from the [`CurrencyRegistry`](crate::CurrencyRegistry)
/// that produced them. The value is computed once, at construction.
///
/// # Example
///
/// ```
/// use galaxy::{CurrencyToken, Expression, Numeral};
///
/// let pish = CurrencyToken::new("pish", Numeral::X);
/// let tegj = CurrencyToken::new("tegj", Numeral::L);
/// let glob = CurrencyToken::new("glob", Numeral::I);
///
/// let expr = Expression::new(vec![&pish, &tegj, &glob, &glob]).unwrap();
/// assert_eq!(expr.value(), 42);
/// assert_eq!(expr.to_string(), "pish tegj glob glob");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression<'r> {
    tokens: Vec<&'r CurrencyToken>,
    value: u64,
}

impl<'r> Expression<'r> {
    /// Validate `tokens` and compute their value.
    ///
    /// An empty sequence is valid and has value 0.
    pub fn new(tokens: Vec<&'r CurrencyToken>) -> Result<Self, ExpressionError> {
        validate(&tokens)?;
        let value = evaluate(&tokens);
        Ok(Self { tokens, value })
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn tokens(&self) -> &[&'r CurrencyToken] {
        &self.tokens
    }

    /// Currency words of the expression, in order.
    pub fn symbols(&self) -> Vec<&'r str> {
        self.tokens.iter().map(|t| t.symbol()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Expression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbols().join(" "))
    }
}

/// Sum a token sequence using Roman additive/subtractive rules.
///
/// A token smaller than its successor forms a subtractive pair with it and
/// both are consumed together. Legality of such pairs is not checked here;
/// see [`validate`].
pub fn evaluate(tokens: &[&CurrencyToken]) -> u64 {
    let mut total = 0;
    let mut index = 0;
    while index < tokens.len() {
        let current = tokens[index].value();
        let next = tokens.get(index + 1).map_or(0, |t| t.value());
        if current >= next {
            total += current;
            index += 1;
        } else {
            total += next - current;
            index += 2;
        }
    }
    total
}

/// Check a token sequence against the expression rules, in order:
///
/// 1. non-repeatable numerals appear at most once;
/// 2. no symbol appears more than [`LEGAL_REPETITION_LIMIT`] times in a row;
/// 3. every increasing adjacent pair is a legal subtraction.
///
/// Positions in errors are 1-based.
pub fn validate(tokens: &[&CurrencyToken]) -> Result<(), ExpressionError> {
    check_non_repeatable(tokens)?;
    check_consecutive_repetition(tokens)?;
    check_subtraction(tokens)
}

fn check_non_repeatable(tokens: &[&CurrencyToken]) -> Result<(), ExpressionError> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.symbol()).or_default() += 1;
    }

    // Walk the sequence rather than the map so the reported token is the
    // first offender in input order.
    for token in tokens {
        let count = counts[token.symbol()];
        if count > 1 && !token.is_repeatable() {
            return Err(ExpressionError::RepetitionNotPermitted {
                symbol: token.symbol().to_string(),
                numeral: token.numeral().symbol(),
                count,
            });
        }
    }
    Ok(())
}

fn check_consecutive_repetition(tokens: &[&CurrencyToken]) -> Result<(), ExpressionError> {
    for (index, run) in tokens.windows(LEGAL_REPETITION_LIMIT + 1).enumerate() {
        let first = run[0].symbol();
        if run.iter().all(|t| t.symbol() == first) {
            return Err(ExpressionError::RepetitionLimitExceeded {
                symbol: first.to_string(),
                limit: LEGAL_REPETITION_LIMIT,
                position: index + 1,
            });
        }
    }
    Ok(())
}

fn check_subtraction(tokens: &[&CurrencyToken]) -> Result<(), ExpressionError> {
    for (index, pair) in tokens.windows(2).enumerate() {
        let (smaller, larger) = (pair[0], pair[1]);
        if smaller.value() < larger.value() && !smaller.can_subtract_from(larger) {
            return Err(ExpressionError::InvalidSubtraction {
                smaller: smaller.symbol().to_string(),
                smaller_numeral: smaller.numeral().symbol(),
                larger: larger.symbol().to_string(),
                larger_numeral: larger.numeral().symbol(),
                position: index + 1,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_numerals::Numeral;

    #[test]
    fn windows_cover_run_ending_at_last_token() {
        let i = CurrencyToken::new("glob", Numeral::I);
        let x = CurrencyToken::new("pish", Numeral::X);
        let tokens = [&x, &i, &i, &i, &i];
        let err = check_consecutive_repetition(&tokens).unwrap_err();
        assert_eq!(
            err,
            ExpressionError::RepetitionLimitExceeded {
                symbol: "glob".to_string(),
                limit: 3,
                position: 2,
            }
        );
    }

    #[test]
    fn short_sequences_skip_repetition_scan() {
        let i = CurrencyToken::new("glob", Numeral::I);
        assert!(check_consecutive_repetition(&[&i, &i, &i]).is_ok());
        assert!(check_consecutive_repetition(&[]).is_ok());
    }
}
