/// Target resolution: a single name/id, or a batch file with one per line.
use std::fs;
use std::path::Path;

use super::errors::DexError;

/// Resolve the positional target into the list of identifiers to look up.
///
/// A path to an existing file selects batch mode; anything else is taken
/// as a single name or numeric id. An empty batch file yields an empty
/// list, which produces an empty report.
///
/// # Errors
///
/// Returns `DexError::InputFile` when a batch file exists but cannot be read.
pub fn resolve_targets(target: &str) -> Result<Vec<String>, DexError> {
    let path = Path::new(target);
    if path.is_file() {
        let content = fs::read_to_string(path).map_err(|source| DexError::InputFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(parse_targets(&content))
    } else {
        Ok(vec![target.trim().to_owned()])
    }
}

/// Split batch file content into identifiers.
///
/// One identifier per line, whitespace-trimmed, blank lines skipped,
/// order preserved.
#[must_use]
pub fn parse_targets(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
