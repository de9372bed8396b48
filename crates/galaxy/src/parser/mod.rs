//! Line classification for merchant input.
//!
//! Every non-empty line is classified exactly once into a [`Record`]. The
//! registries and the query processor dispatch on [`RecordKind`] instead of
//! re-testing prefixes.

mod classify;
mod record;

pub use classify::{PRICE_QUERY_PREFIX, VALUE_QUERY_PREFIX, classify, classify_lines};
pub use record::{CREDITS, IS, Record, RecordKind};
