//! Tests for the currency and commodity registries.

use std::str::FromStr;

use galaxy::interpreter::derive_commodity;
use galaxy::{
    BuildError, CommodityRegistry, CurrencyRegistry, CurrencyToken, ExpressionError, Numeral,
    classify, classify_lines,
};
use rust_decimal::Decimal;

fn currencies() -> CurrencyRegistry {
    let records = classify_lines(["glob is I", "prok is V", "pish is X", "tegj is L"]);
    CurrencyRegistry::from_records(&records).unwrap()
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// =========================================================================
// Currency Registry
// =========================================================================

#[test]
fn from_records_registers_definitions_in_order() {
    let registry = currencies();
    assert_eq!(registry.len(), 4);
    let symbols: Vec<&str> = registry.tokens().map(CurrencyToken::symbol).collect();
    assert_eq!(symbols, vec!["glob", "prok", "pish", "tegj"]);
    assert_eq!(registry.resolve("tegj").unwrap().numeral(), Numeral::L);
    assert!(registry.resolve("Silver").is_none());
}

#[test]
fn from_records_skips_other_records() {
    let records = classify_lines([
        "glob is I",
        "glob glob Silver is 34 Credits",
        "how much is glob ?",
    ]);
    let registry = CurrencyRegistry::from_records(&records).unwrap();
    assert_eq!(registry.len(), 1);
}

#[test]
fn unknown_numeral_is_configuration_error() {
    let records = classify_lines(["glob is I", "blarg is T"]);
    let err = CurrencyRegistry::from_records(&records).unwrap_err();
    assert_eq!(
        err,
        BuildError::UnknownNumeral {
            line: 2,
            token: "blarg".to_string(),
            symbol: 'T',
            accepted: "I, V, X, L, C, D, M".to_string(),
        }
    );
    assert_eq!(err.line(), 2);
}

#[test]
fn redefinition_replaces_in_place() {
    let mut registry = currencies();
    registry.define(9, "glob", 'M').unwrap();
    assert_eq!(registry.len(), 4);
    assert_eq!(registry.resolve("glob").unwrap().value(), 1000);
    assert_eq!(registry.tokens().next().unwrap().symbol(), "glob");
}

#[test]
fn extract_tokens_preserves_order_and_duplicates() {
    let registry = currencies();
    let words = "how much is pish tegj glob glob ?".split(' ');
    let tokens = registry.extract_tokens_in_order(words);
    let symbols: Vec<&str> = tokens.iter().map(|t| t.symbol()).collect();
    assert_eq!(symbols, vec!["pish", "tegj", "glob", "glob"]);
}

#[test]
fn extract_tokens_from_unrelated_words_is_empty() {
    let registry = currencies();
    assert!(
        registry
            .extract_tokens_in_order(["how", "much", "wood"])
            .is_empty()
    );
}

// =========================================================================
// Commodity derivation
// =========================================================================

#[test]
fn integral_unit_price() {
    let silver = derive_commodity(&classify(5, "glob glob Silver is 34 Credits"), &currencies())
        .unwrap();
    assert_eq!(silver.name(), "Silver");
    assert_eq!(silver.per_unit_value(), Decimal::from(17));
}

#[test]
fn fractional_unit_price_is_exact() {
    let iron =
        derive_commodity(&classify(7, "pish pish Iron is 3910 Credits"), &currencies()).unwrap();
    assert_eq!(iron.name(), "Iron");
    assert_eq!(iron.per_unit_value(), decimal("195.5"));
    assert_eq!(iron.per_unit_value().to_string(), "195.5");
    assert!(iron.is_exact());
}

#[test]
fn long_terminating_unit_price_is_exact() {
    let mut currencies = CurrencyRegistry::new();
    for (line, (word, symbol)) in [("m", 'M'), ("c", 'C'), ("x", 'X'), ("i", 'I')]
        .into_iter()
        .enumerate()
    {
        currencies.define(line + 1, word, symbol).unwrap();
    }

    let record = classify(5, "m m m c m m m c m m c c c x c i i Dust is 1 Credits");
    let dust = derive_commodity(&record, &currencies).unwrap();
    assert_eq!(dust.per_unit_value(), decimal("0.0001220703125"));
    assert!(dust.is_exact());
}

#[test]
fn non_terminating_unit_price_is_inexact() {
    let dirt =
        derive_commodity(&classify(5, "glob glob glob Dirt is 10 Credits"), &currencies()).unwrap();
    assert!(!dirt.is_exact());
}

#[test]
fn subtractive_quantity() {
    let gold =
        derive_commodity(&classify(6, "glob prok Gold is 57800 Credits"), &currencies()).unwrap();
    assert_eq!(gold.per_unit_value(), Decimal::from(14450));
}

#[test]
fn missing_is_anchor() {
    let record = classify(3, "glob glob Silver costs 34 Credits");
    let err = derive_commodity(&record, &currencies()).unwrap_err();
    assert_eq!(err, BuildError::MissingAnchor { line: 3, anchor: "is" });
}

#[test]
fn nothing_before_anchor() {
    let record = classify(4, "is 34 Credits");
    let err = derive_commodity(&record, &currencies()).unwrap_err();
    assert_eq!(err, BuildError::MissingWordBefore { line: 4, anchor: "is" });
}

#[test]
fn non_integer_price() {
    let record = classify(2, "glob Silver is lots Credits");
    let err = derive_commodity(&record, &currencies()).unwrap_err();
    assert_eq!(
        err,
        BuildError::InvalidPrice {
            line: 2,
            value: "lots".to_string(),
        }
    );
}

#[test]
fn transaction_without_quantity() {
    let record = classify(8, "Silver is 34 Credits");
    let err = derive_commodity(&record, &currencies()).unwrap_err();
    assert_eq!(
        err,
        BuildError::ZeroQuantity {
            line: 8,
            commodity: "Silver".to_string(),
        }
    );
}

#[test]
fn invalid_transaction_phrase() {
    let record = classify(5, "prok prok Silver is 34 Credits");
    let err = derive_commodity(&record, &currencies()).unwrap_err();
    assert!(matches!(
        err,
        BuildError::Expression {
            line: 5,
            source: ExpressionError::RepetitionNotPermitted { .. },
        }
    ));
}

// =========================================================================
// Commodity Registry
// =========================================================================

#[test]
fn registry_built_from_transactions() {
    let records = classify_lines([
        "glob glob Silver is 34 Credits",
        "glob prok Gold is 57800 Credits",
        "pish pish Iron is 3910 Credits",
        "how many Credits is glob prok Silver ?",
    ]);
    let registry = CommodityRegistry::from_records(&records, &currencies()).unwrap();
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.names(), vec!["Silver", "Gold", "Iron"]);
    assert_eq!(
        registry.lookup("Iron").unwrap().per_unit_value(),
        decimal("195.5")
    );
    assert!(registry.lookup("Platinum").is_none());
}

#[test]
fn later_transaction_replaces_price() {
    let records = classify_lines([
        "glob glob Silver is 34 Credits",
        "glob Silver is 20 Credits",
    ]);
    let registry = CommodityRegistry::from_records(&records, &currencies()).unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(
        registry.lookup("Silver").unwrap().per_unit_value(),
        Decimal::from(20)
    );
}

#[test]
fn first_malformed_transaction_fails_build() {
    let records = classify_lines([
        "glob glob Silver is 34 Credits",
        "glob Silver is many Credits",
    ]);
    let err = CommodityRegistry::from_records(&records, &currencies()).unwrap_err();
    assert_eq!(err.line(), 2);
}
