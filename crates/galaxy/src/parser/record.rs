//! Classified input records.

use serde::Serialize;

/// Anchor word separating a phrase from its value.
pub const IS: &str = "is";

/// Anchor word ending a transaction.
pub const CREDITS: &str = "Credits";

/// One sanitized, classified input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// 1-based line number in the raw input.
    pub line: usize,
    /// Sanitized line text.
    pub text: String,
    pub kind: RecordKind,
}

/// The shape of an input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordKind {
    /// `<token> is <symbol>`. The symbol is not yet checked against the
    /// numeral catalog.
    Definition { token: String, symbol: char },
    /// `<phrase> <Commodity> is <integer> Credits`
    Transaction,
    /// `how much is <phrase> ?`
    ValueQuery,
    /// `how many Credits is <phrase> <Commodity> ?`
    PriceQuery,
    Unrecognized,
}

impl Record {
    /// Whitespace-separated words of the line.
    pub fn words(&self) -> Vec<&str> {
        self.text.split_whitespace().collect()
    }

    /// Whether the record produces an answer line.
    pub fn is_query(&self) -> bool {
        matches!(
            self.kind,
            RecordKind::ValueQuery | RecordKind::PriceQuery | RecordKind::Unrecognized
        )
    }
}
