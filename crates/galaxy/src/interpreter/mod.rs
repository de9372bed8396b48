//! Galactic merchant interpreter.
//!
//! This module turns classified records into answers: it builds the
//! currency and commodity registries, validates and evaluates numeral
//! expressions, and formats query answers.

mod commodity_registry;
mod currency_registry;
mod error;
mod expression;
mod merchant;
mod processor;

pub use commodity_registry::{CommodityRegistry, derive_commodity};
pub use currency_registry::CurrencyRegistry;
pub use error::{
    BuildError, ExpressionError, LoadError, MerchantError, QueryError, compute_suggestions,
};
pub use expression::{Expression, LEGAL_REPETITION_LIMIT, evaluate, validate};
pub use merchant::{FailurePolicy, Merchant, Session};
pub use processor::{PRICE_SCALE, QueryProcessor, UNKNOWN_QUERY_ANSWER, format_price};
