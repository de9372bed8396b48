//! Miette diagnostic wrapper for merchant note errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use galaxy::{BuildError, MerchantError, QueryError};
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic pointing at the offending note line.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(galaxy::notes))]
pub struct NotesDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("this line")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl NotesDiagnostic {
    /// Create a diagnostic from a MerchantError with the raw input lines.
    pub fn from_merchant_error(name: &str, lines: &[String], err: &MerchantError) -> Self {
        let help = match err {
            MerchantError::Build(BuildError::UnknownNumeral { accepted, .. }) => {
                Some(format!("currency words must map to one of {accepted}"))
            }
            MerchantError::Build(BuildError::MissingAnchor { .. })
            | MerchantError::Build(BuildError::MissingWordBefore { .. }) => Some(
                "transactions look like '<phrase> <Commodity> is <integer> Credits'".to_string(),
            ),
            MerchantError::Build(_) => None,
            MerchantError::Query {
                source: QueryError::UnknownCommodity { .. },
                ..
            } => Some("price a commodity with a transaction line before asking for it".into()),
            MerchantError::Query { .. } => {
                Some("pass --keep-going to answer the remaining queries".into())
            }
        };

        NotesDiagnostic {
            src: NamedSource::new(name, lines.join("\n")),
            span: line_span(lines, err.line()),
            message: err.to_string(),
            help,
        }
    }
}

/// Byte span of the 1-based `line` within `lines.join("\n")`.
///
/// Clamped to the content so miette never sees an out-of-bounds span.
fn line_span(lines: &[String], line: usize) -> SourceSpan {
    let index = line.saturating_sub(1).min(lines.len().saturating_sub(1));
    let offset = lines.iter().take(index).map(|l| l.len() + 1).sum::<usize>();
    let len = lines.get(index).map_or(0, String::len);
    (offset, len.max(1)).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines() -> Vec<String> {
        vec!["glob is I".into(), "".into(), "blarg is T".into()]
    }

    #[test]
    fn span_covers_requested_line() {
        let span = line_span(&lines(), 3);
        assert_eq!(span.offset(), 11);
        assert_eq!(span.len(), 10);
    }

    #[test]
    fn span_for_first_line_starts_at_zero() {
        let span = line_span(&lines(), 1);
        assert_eq!(span.offset(), 0);
        assert_eq!(span.len(), 9);
    }

    #[test]
    fn span_is_clamped_past_the_end() {
        let span = line_span(&lines(), 42);
        assert_eq!(span.offset(), 11);
        assert_eq!(line_span(&[], 1).len(), 1);
    }

    #[test]
    fn diagnostic_message_and_help() {
        let err = MerchantError::Build(BuildError::UnknownNumeral {
            line: 3,
            token: "blarg".into(),
            symbol: 'T',
            accepted: "I, V, X, L, C, D, M".into(),
        });
        let diagnostic = NotesDiagnostic::from_merchant_error("notes.txt", &lines(), &err);
        assert!(diagnostic.to_string().starts_with("line 3:"));
        assert_eq!(
            diagnostic.help.as_deref(),
            Some("currency words must map to one of I, V, X, L, C, D, M")
        );
        assert_eq!(diagnostic.span.offset(), 11);
    }
}
