//! CLI command implementations.

mod check;
mod convert;
mod eval;

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use galaxy::{load_lines, LoadError};

pub use check::{run_check, CheckArgs};
pub use convert::{run_convert, ConvertArgs};
pub use eval::{run_eval, EvalArgs};

/// Raw notes plus the name to show in diagnostics.
pub struct Notes {
    pub name: String,
    pub lines: Vec<String>,
}

/// Read notes from `path`, or from standard input when `path` is `None`
/// or `-`.
pub fn read_notes(path: Option<&Path>) -> Result<Notes, LoadError> {
    match path {
        Some(path) if path != Path::new("-") => Ok(Notes {
            name: path.display().to_string(),
            lines: load_lines(path)?,
        }),
        _ => {
            let lines = io::stdin()
                .lock()
                .lines()
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| LoadError::Io {
                    path: PathBuf::from("<stdin>"),
                    source: e,
                })?;
            Ok(Notes {
                name: "<stdin>".to_string(),
                lines,
            })
        }
    }
}
