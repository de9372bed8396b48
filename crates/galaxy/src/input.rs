//! Reading and normalizing merchant input.

use std::fs;
use std::path::Path;

use crate::interpreter::LoadError;

/// Trim a line and collapse every run of whitespace to a single space.
pub fn sanitize(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Sanitize each line, keeping empty lines so line numbers stay aligned
/// with the source.
pub fn sanitize_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().map(|l| sanitize(l.as_ref())).collect()
}

/// Read a UTF-8 file into memory, one entry per line.
pub fn load_lines(path: impl AsRef<Path>) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(content.lines().map(str::to_string).collect())
}
