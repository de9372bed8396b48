//! Error types for the galactic merchant interpreter.

use std::io;
use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

/// Errors that occur while reading merchant input.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading an input file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A numeral phrase that breaks one of the expression rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    /// A non-repeatable numeral (V, L, D) appears more than once.
    #[error("'{symbol}' ({numeral}) may not be repeated, found {count} times")]
    RepetitionNotPermitted {
        symbol: String,
        numeral: char,
        count: usize,
    },

    /// A symbol occupies more consecutive positions than the limit allows.
    #[error("'{symbol}' repeated more than {limit} times in a row at position {position}")]
    RepetitionLimitExceeded {
        symbol: String,
        limit: usize,
        position: usize,
    },

    /// A smaller numeral precedes a larger one it may not be subtracted from.
    #[error("'{smaller}' ({smaller_numeral}) cannot be subtracted from '{larger}' ({larger_numeral}) at position {position}")]
    InvalidSubtraction {
        smaller: String,
        smaller_numeral: char,
        larger: String,
        larger_numeral: char,
        position: usize,
    },
}

/// Errors raised while building the currency and commodity registries.
///
/// These are always fatal: no query can be answered without the registries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A definition references a symbol outside the numeral catalog.
    #[error("line {line}: '{token}' is defined as unknown numeral '{symbol}', expected one of {accepted}")]
    UnknownNumeral {
        line: usize,
        token: String,
        symbol: char,
        accepted: String,
    },

    /// A transaction lacks the `is` or `Credits` anchor word.
    #[error("line {line}: transaction has no '{anchor}'")]
    MissingAnchor { line: usize, anchor: &'static str },

    /// An anchor word is the first word of the transaction.
    #[error("line {line}: transaction has nothing before '{anchor}'")]
    MissingWordBefore { line: usize, anchor: &'static str },

    /// The word before `Credits` is not a non-negative integer.
    #[error("line {line}: '{value}' is not a valid Credits amount")]
    InvalidPrice { line: usize, value: String },

    /// The transaction's numeral phrase is empty, so no unit price exists.
    #[error("line {line}: transaction for '{commodity}' has no numeral quantity")]
    ZeroQuantity { line: usize, commodity: String },

    /// The transaction's numeral phrase is invalid.
    #[error("line {line}: {source}")]
    Expression {
        line: usize,
        #[source]
        source: ExpressionError,
    },
}

impl BuildError {
    /// 1-based input line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            BuildError::UnknownNumeral { line, .. }
            | BuildError::MissingAnchor { line, .. }
            | BuildError::MissingWordBefore { line, .. }
            | BuildError::InvalidPrice { line, .. }
            | BuildError::ZeroQuantity { line, .. }
            | BuildError::Expression { line, .. } => *line,
        }
    }
}

/// Errors raised while answering a single query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A price query names a commodity no transaction priced.
    #[error("unknown commodity '{name}'{}", format_suggestions(suggestions))]
    UnknownCommodity {
        name: String,
        suggestions: Vec<String>,
    },

    /// The query's numeral phrase is invalid.
    #[error(transparent)]
    Expression(#[from] ExpressionError),

    /// The total price does not fit the decimal range.
    #[error("price of {quantity} '{commodity}' overflows")]
    Overflow { commodity: String, quantity: u64 },
}

/// Any error that stops a merchant batch.
#[derive(Debug, Error)]
pub enum MerchantError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("line {line}: {source}")]
    Query {
        line: usize,
        #[source]
        source: QueryError,
    },
}

impl MerchantError {
    pub fn line(&self) -> usize {
        match self {
            MerchantError::Build(e) => e.line(),
            MerchantError::Query { line, .. } => *line,
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Names from `available` within a small edit distance of `name`,
/// closest first, at most three.
pub fn compute_suggestions(name: &str, available: &[String]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, candidate.clone()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
