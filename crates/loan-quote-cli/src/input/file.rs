use loan_quote_core::lender::import::import_csv;
use loan_quote_core::{LenderPool, QuotePolicy};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a JSON file and deserialise into a typed struct.
pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;
    let value: T = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?;
    Ok(value)
}

/// Load the quote policy from `path`, or the built-in policy when none is given.
pub fn read_policy(path: Option<&str>) -> Result<QuotePolicy, Box<dyn std::error::Error>> {
    let policy = match path {
        Some(p) => read_json::<QuotePolicy>(p)?,
        None => QuotePolicy::default(),
    };
    policy.validate()?;
    Ok(policy)
}

/// Load a lender market CSV from disk.
pub fn read_market(path: &str) -> Result<LenderPool, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    Ok(import_csv(&canonical)?)
}

/// Resolve against the working directory and check the path names a file.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.exists() {
        return Err(format!("File not found: {}", canonical.display()).into());
    }

    if !canonical.is_file() {
        return Err(format!("Not a file: {}", canonical.display()).into());
    }

    Ok(canonical)
}
