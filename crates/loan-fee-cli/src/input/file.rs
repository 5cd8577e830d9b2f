use std::fs;
use std::path::{Path, PathBuf};

use loan_fee_core::FeeRequest;

use super::{parse_json, parse_yaml};
use crate::error::CliError;

/// Read fee requests from a JSON file, or YAML when the extension is
/// `.yaml` / `.yml`.
pub fn read_requests(path: &str) -> Result<Vec<FeeRequest>, CliError> {
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical).map_err(|e| {
        CliError::Input(format!("Failed to read '{}': {}", canonical.display(), e))
    })?;

    let parsed = if is_yaml(&canonical) {
        parse_yaml(&contents).map_err(|e| e.to_string())
    } else {
        parse_json(&contents).map_err(|e| e.to_string())
    };
    parsed.map_err(|e| CliError::Input(format!("Failed to parse '{}': {}", canonical.display(), e)))
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn resolve_path(path: &str) -> Result<PathBuf, CliError> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| CliError::Input(format!("Cannot resolve '{}': {}", path, e)))?
            .join(p)
    };

    if !canonical.is_file() {
        return Err(CliError::Input(format!(
            "File not found: {}",
            canonical.display()
        )));
    }

    Ok(canonical)
}
