use std::io::ErrorKind;
use std::path::Path;

use crate::result::ProblemResult;
use crate::Result;

/// Writes `results` as pretty JSON, replacing any previous file.
pub fn save_results(path: &Path, results: &[ProblemResult]) -> Result<()> {
    let content = serde_json::to_string_pretty(results)?;
    std::fs::write(path, content)?;
    tracing::debug!("Wrote {} results to {}", results.len(), path.display());
    Ok(())
}

/// Reads a results file. `Ok(None)` means the file does not exist yet.
pub fn load_results(path: &Path) -> Result<Option<Vec<ProblemResult>>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let results: Vec<ProblemResult> = serde_json::from_str(&content)?;
    Ok(Some(results))
}
