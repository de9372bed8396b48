//! Currency registry mapping galactic words to base numerals.

use std::collections::HashMap;

use galaxy_numerals::{accepted_symbols, lookup};
use tracing::debug;

use crate::interpreter::BuildError;
use crate::parser::{Record, RecordKind};
use crate::types::CurrencyToken;

/// Registered currency words, in definition order.
///
/// The registry is the single source of truth for which word stands for
/// which numeral. It is filled once from definition records and only read
/// afterwards.
#[derive(Debug, Default, Clone)]
pub struct CurrencyRegistry {
    tokens: Vec<CurrencyToken>,
    /// Maps a currency word to its index in `tokens`.
    index: HashMap<String, usize>,
}

impl CurrencyRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from the definition records among `records`.
    ///
    /// Records of any other kind are skipped. Fails on the first definition
    /// whose symbol is not in the numeral catalog.
    pub fn from_records<'a>(
        records: impl IntoIterator<Item = &'a Record>,
    ) -> Result<Self, BuildError> {
        let mut registry = Self::new();
        for record in records {
            if let RecordKind::Definition { token, symbol } = &record.kind {
                registry.define(record.line, token, *symbol)?;
            }
        }
        Ok(registry)
    }

    /// Register `token` as the numeral written `symbol`.
    pub fn define(&mut self, line: usize, token: &str, symbol: char) -> Result<(), BuildError> {
        let numeral = lookup(symbol).ok_or_else(|| BuildError::UnknownNumeral {
            line,
            token: token.to_string(),
            symbol,
            accepted: accepted_symbols(),
        })?;
        debug!(line, token, %numeral, "defined currency");
        self.insert(CurrencyToken::new(token, numeral));
        Ok(())
    }

    /// Insert a token, replacing any earlier definition of the same word
    /// in place.
    pub fn insert(&mut self, token: CurrencyToken) {
        if let Some(&at) = self.index.get(token.symbol()) {
            self.tokens[at] = token;
        } else {
            self.index.insert(token.symbol().to_string(), self.tokens.len());
            self.tokens.push(token);
        }
    }

    /// Look up a currency word.
    pub fn resolve(&self, word: &str) -> Option<&CurrencyToken> {
        self.index.get(word).map(|&at| &self.tokens[at])
    }

    /// Keep only the registered currency words of `words`, preserving their
    /// order and duplicates.
    ///
    /// This carves the numeral phrase out of free-form query text.
    pub fn extract_tokens_in_order<I, S>(&self, words: I) -> Vec<&CurrencyToken>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .filter_map(|w| self.resolve(w.as_ref()))
            .collect()
    }

    /// Registered tokens in definition order.
    pub fn tokens(&self) -> impl Iterator<Item = &CurrencyToken> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
