//! Implementation of the `galaxy check` command.

use std::path::PathBuf;

use galaxy::{Commodity, CurrencyToken, Merchant, MerchantError};
use miette::{IntoDiagnostic, Report};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::commands::read_notes;
use crate::output::table::{format_commodity_table, format_currency_table};
use crate::output::NotesDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Notes file to check; reads standard input when omitted or `-`
    pub input: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for the registries.
#[derive(Debug, Serialize)]
struct CheckJson<'a> {
    currencies: Vec<&'a CurrencyToken>,
    commodities: Vec<&'a Commodity>,
    queries: usize,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let notes = match read_notes(args.input.as_deref()) {
        Ok(notes) => notes,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(exitcode::NOINPUT);
        }
    };

    let session = match Merchant::new().prepare(&notes.lines) {
        Ok(session) => session,
        Err(e) => {
            let e = MerchantError::from(e);
            let diagnostic = NotesDiagnostic::from_merchant_error(&notes.name, &notes.lines, &e);
            eprintln!("{:?}", Report::new(diagnostic));
            return Ok(exitcode::DATAERR);
        }
    };

    if args.json {
        let json = CheckJson {
            currencies: session.currencies().tokens().collect(),
            commodities: session.commodities().commodities().collect(),
            queries: session.queries().len(),
        };
        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
        return Ok(exitcode::OK);
    }

    println!("{}", format_currency_table(session.currencies()));
    if !session.commodities().is_empty() {
        println!("\n{}", format_commodity_table(session.commodities()));
    }

    let summary = format!(
        "{} currencies, {} commodities, {} queries",
        session.currencies().len(),
        session.commodities().len(),
        session.queries().len()
    );
    println!(
        "\n{}",
        summary.if_supports_color(Stream::Stdout, |text| text.green())
    );
    Ok(exitcode::OK)
}
