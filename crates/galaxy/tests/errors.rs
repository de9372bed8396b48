//! Tests for error types and error message formatting.

use galaxy::interpreter::format_price;
use galaxy::{BuildError, ExpressionError, MerchantError, QueryError, compute_suggestions};
use rust_decimal::Decimal;

#[test]
fn compute_suggestions_finds_similar_names() {
    let available = vec![
        "Silver".to_string(),
        "Gold".to_string(),
        "Iron".to_string(),
    ];

    assert_eq!(compute_suggestions("Silvr", &available), vec!["Silver"]);
    assert_eq!(compute_suggestions("Gol", &available), vec!["Gold"]);
    assert_eq!(compute_suggestions("Irn", &available), vec!["Iron"]);
    assert!(compute_suggestions("Platinum", &available).is_empty());
}

#[test]
fn compute_suggestions_excludes_exact_match_and_limits_to_three() {
    let available: Vec<String> = (0..10).map(|i| format!("ore{i}")).collect();
    let suggestions = compute_suggestions("ore", &available);
    assert_eq!(suggestions.len(), 3);
    assert!(compute_suggestions("ore1", &available).len() <= 3);
    assert!(!compute_suggestions("ore1", &available).contains(&"ore1".to_string()));
}

#[test]
fn unknown_commodity_without_suggestions() {
    let err = QueryError::UnknownCommodity {
        name: "Platinum".to_string(),
        suggestions: vec![],
    };
    assert_eq!(err.to_string(), "unknown commodity 'Platinum'");
}

#[test]
fn unknown_numeral_lists_accepted_symbols() {
    let err = BuildError::UnknownNumeral {
        line: 4,
        token: "blarg".to_string(),
        symbol: 'T',
        accepted: "I, V, X, L, C, D, M".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.starts_with("line 4:"));
    assert!(msg.contains("'blarg'"));
    assert!(msg.contains("'T'"));
    assert!(msg.contains("I, V, X, L, C, D, M"));
}

#[test]
fn query_error_carries_line_in_merchant_error() {
    let err = MerchantError::Query {
        line: 9,
        source: QueryError::Expression(ExpressionError::RepetitionNotPermitted {
            symbol: "tegj".to_string(),
            numeral: 'L',
            count: 2,
        }),
    };
    assert_eq!(err.line(), 9);
    assert_eq!(
        err.to_string(),
        "line 9: 'tegj' (L) may not be repeated, found 2 times"
    );
}

#[test]
fn format_price_strips_trailing_zeros() {
    assert_eq!(format_price(Decimal::new(78200, 2), true), "782");
    assert_eq!(format_price(Decimal::new(19550, 2), true), "195.5");
    assert_eq!(format_price(Decimal::from(86700), true), "86700");
    assert_eq!(format_price(Decimal::ZERO, true), "0");
}

#[test]
fn format_price_keeps_every_digit_of_exact_prices() {
    assert_eq!(
        format_price(Decimal::new(1_220_703_125, 13), true),
        "0.0001220703125"
    );
}

#[test]
fn format_price_rounds_inexact_prices() {
    let third = Decimal::from(10) / Decimal::from(3);
    assert_eq!(format_price(third, false), "3.333333333333");
    assert_eq!(format_price(third * Decimal::from(3), false), "10");
    assert_eq!(format_price(Decimal::new(19550, 2), false), "195.5");
}
