//! Record classifier using winnow.

use super::record::{CREDITS, IS, Record, RecordKind};
use crate::input::{sanitize, sanitize_lines};
use winnow::combinator::{alt, eof, terminated};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

/// Prefix of a query asking for the value of a numeral phrase.
pub const VALUE_QUERY_PREFIX: &str = "how much is";

/// Prefix of a query asking for the price of some commodity units.
pub const PRICE_QUERY_PREFIX: &str = "how many Credits";

/// Classify one line. The text is sanitized first.
///
/// Priority: definition, value query, price query, transaction, and
/// finally unrecognized.
pub fn classify(line: usize, text: &str) -> Record {
    classify_sanitized(line, sanitize(text))
}

/// Classify a batch of raw lines, dropping the empty ones.
///
/// Line numbers are 1-based positions in `lines`, so they still point at
/// the right place after empty lines are dropped.
pub fn classify_lines<I, S>(lines: I) -> Vec<Record>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    sanitize_lines(lines)
        .into_iter()
        .enumerate()
        .filter(|(_, text)| !text.is_empty())
        .map(|(index, text)| classify_sanitized(index + 1, text))
        .collect()
}

fn classify_sanitized(line: usize, text: String) -> Record {
    let kind = record_kind(&text);
    Record { line, text, kind }
}

fn record_kind(text: &str) -> RecordKind {
    if let Ok((token, symbol)) = definition.parse(text) {
        return RecordKind::Definition { token, symbol };
    }
    if let Ok((_, kind)) = query_prefix.parse_peek(text) {
        return kind;
    }
    if text.split(' ').next_back() == Some(CREDITS) {
        return RecordKind::Transaction;
    }
    RecordKind::Unrecognized
}

/// Parse `<word> is <UPPERCASE LETTER>` spanning the whole line.
fn definition(input: &mut &str) -> ModalResult<(String, char)> {
    let token = word(input)?;
    (' ', IS, ' ').parse_next(input)?;
    let symbol = terminated(one_of(|c: char| c.is_ascii_uppercase()), eof).parse_next(input)?;
    Ok((token.to_string(), symbol))
}

/// Match a query prefix at the start of the line.
fn query_prefix(input: &mut &str) -> ModalResult<RecordKind> {
    alt((
        VALUE_QUERY_PREFIX.value(RecordKind::ValueQuery),
        PRICE_QUERY_PREFIX.value(RecordKind::PriceQuery),
    ))
    .parse_next(input)
}

fn word<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c != ' ').parse_next(input)
}
