//! Implementation of the `galaxy eval` command.

use std::path::PathBuf;

use galaxy::{compute_suggestions, Merchant, MerchantError};
use miette::{IntoDiagnostic, Report};
use serde::Serialize;

use crate::commands::read_notes;
use crate::output::NotesDiagnostic;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Notes file with currency definitions (`glob is I`)
    #[arg(long, short, required = true)]
    pub input: PathBuf,

    /// Currency words to evaluate, e.g. `pish tegj glob glob`
    #[arg(required = true, num_args = 1..)]
    pub phrase: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub phrase: String,
    pub roman: String,
    pub value: u64,
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let notes = match read_notes(Some(&args.input)) {
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

    // Unlike queries, every word of an explicit phrase must be a currency.
    let known: Vec<String> = session
        .currencies()
        .tokens()
        .map(|t| t.symbol().to_string())
        .collect();
    for word in &args.phrase {
        if session.currencies().resolve(word).is_none() {
            let suggestions = compute_suggestions(word, &known);
            if suggestions.is_empty() {
                eprintln!("Unknown currency word '{}'", word);
            } else {
                eprintln!(
                    "Unknown currency word '{}', did you mean: {}?",
                    word,
                    suggestions.join(", ")
                );
            }
            return Ok(exitcode::DATAERR);
        }
    }

    let expression = match session.processor().evaluate_phrase(&args.phrase) {
        Ok(expression) => expression,
        Err(e) => {
            eprintln!("Evaluation error: {}", e);
            return Ok(exitcode::DATAERR);
        }
    };

    if args.json {
        let output = EvalResult {
            phrase: expression.to_string(),
            roman: expression
                .tokens()
                .iter()
                .map(|t| t.numeral().symbol())
                .collect(),
            value: expression.value(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).into_diagnostic()?
        );
    } else {
        println!("{} is {}", expression, expression.value());
    }
    Ok(exitcode::OK)
}
