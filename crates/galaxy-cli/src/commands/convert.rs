//! Implementation of the `galaxy convert` command.

use std::path::PathBuf;

use galaxy::{FailurePolicy, Merchant};
use miette::{IntoDiagnostic, Report};
use tracing::info;

use crate::commands::read_notes;
use crate::output::NotesDiagnostic;

/// Arguments for the convert command.
#[derive(Debug, clap::Args)]
pub struct ConvertArgs {
    /// Notes file to convert; reads standard input when omitted or `-`
    pub input: Option<PathBuf>,

    /// Answer a failing query with its error message and keep going
    #[arg(long, env = "GALAXY_KEEP_GOING")]
    pub keep_going: bool,

    /// Answer given to unrecognized lines
    #[arg(long, env = "GALAXY_UNKNOWN_ANSWER")]
    pub unknown_answer: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the convert command.
pub fn run_convert(args: ConvertArgs) -> miette::Result<i32> {
    let notes = match read_notes(args.input.as_deref()) {
        Ok(notes) => notes,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(exitcode::NOINPUT);
        }
    };

    let failure_policy = if args.keep_going {
        FailurePolicy::PerLine
    } else {
        FailurePolicy::Abort
    };
    let merchant = Merchant::builder()
        .failure_policy(failure_policy)
        .maybe_unknown_answer(args.unknown_answer)
        .build();

    info!(input = %notes.name, lines = notes.lines.len(), "converting notes");
    match merchant.convert(&notes.lines) {
        Ok(answers) => {
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&answers).into_diagnostic()?
                );
            } else {
                for answer in answers {
                    println!("{}", answer);
                }
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            let diagnostic = NotesDiagnostic::from_merchant_error(&notes.name, &notes.lines, &e);
            eprintln!("{:?}", Report::new(diagnostic));
            Ok(exitcode::DATAERR)
        }
    }
}
