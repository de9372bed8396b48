//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use galaxy::interpreter::format_price;
use galaxy::{CommodityRegistry, CurrencyRegistry, Numeral};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// Format the currency words as an ASCII table.
pub fn format_currency_table(currencies: &CurrencyRegistry) -> Table {
    let mut table = new_table(vec![
        "Currency",
        "Numeral",
        "Value",
        "Repeats",
        "Subtracts from",
    ]);
    for token in currencies.tokens() {
        table.add_row(vec![
            token.symbol().to_string(),
            token.numeral().to_string(),
            token.value().to_string(),
            yes_no(token.is_repeatable()).to_string(),
            subtraction_targets(token.numeral()),
        ]);
    }
    table
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// Numerals `numeral` may precede, e.g. `V, X` for `I`.
fn subtraction_targets(numeral: Numeral) -> String {
    if !numeral.is_subtractable() {
        return "-".to_string();
    }
    numeral
        .subtractable_from()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format the commodity unit prices as an ASCII table.
pub fn format_commodity_table(commodities: &CommodityRegistry) -> Table {
    let mut table = new_table(vec!["Commodity", "Credits per unit"]);
    for commodity in commodities.commodities() {
        table.add_row(vec![
            commodity.name().to_string(),
            format_price(commodity.per_unit_value(), commodity.is_exact()),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtraction_targets_list_legal_pairs() {
        assert_eq!(subtraction_targets(Numeral::I), "V, X");
        assert_eq!(subtraction_targets(Numeral::C), "D, M");
        assert_eq!(subtraction_targets(Numeral::V), "-");
        assert_eq!(subtraction_targets(Numeral::M), "-");
    }

    #[test]
    fn currency_table_shows_rules() {
        let mut currencies = CurrencyRegistry::new();
        currencies.define(1, "glob", 'I').unwrap();
        currencies.define(2, "prok", 'V').unwrap();
        let rendered = format_currency_table(&currencies).to_string();
        assert!(rendered.contains("glob"));
        assert!(rendered.contains("V, X"));
        assert!(rendered.contains("no"));
    }
}
