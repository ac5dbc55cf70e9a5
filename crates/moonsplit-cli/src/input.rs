//! Reading distribution requests from disk.

use anyhow::{Context, Result, bail};
use moonsplit_calculator::DistributionRequest;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    /// Picks the format from the file extension. Anything that is not
    /// `.toml` is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => InputFormat::Toml,
            _ => InputFormat::Json,
        }
    }
}

pub fn parse_request(source: &str, format: InputFormat) -> Result<DistributionRequest> {
    let request = match format {
        InputFormat::Json => serde_json::from_str(source)?,
        InputFormat::Toml => toml::from_str(source)?,
    };
    Ok(request)
}

pub fn load_request(path: &Path) -> Result<DistributionRequest> {
    if path.is_dir() {
        bail!("'{}' is a directory, expected a request file", path.display());
    }
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read request '{}'", path.display()))?;
    let format = InputFormat::from_path(path);
    let request = parse_request(&source, format)
        .with_context(|| format!("failed to parse request '{}'", path.display()))?;
    debug!(
        path = %path.display(),
        ?format,
        tenants = request.tenants.len(),
        expenses = request.expenses.len(),
        "Loaded request"
    );
    Ok(request)
}
