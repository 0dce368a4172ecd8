use std::path::{Path, PathBuf};

use crate::core::Result;
use crate::kernel::services::ports::FakeInputOptions;

pub const OPTIONS_ENV: &str = "FAKEINPUT_OPTIONS";

/// Options file named by `FAKEINPUT_OPTIONS`, if set.
pub fn get_options_path() -> Option<PathBuf> {
    std::env::var_os(OPTIONS_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Loads options from a JSON file; a missing file yields defaults.
pub fn load_options(path: &Path) -> Result<FakeInputOptions> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "options file missing, using defaults");
            return Ok(FakeInputOptions::default());
        }
        Err(e) => return Err(e.into()),
    };
    let options = serde_json::from_str(&data)?;
    Ok(options)
}

pub fn write_options(path: &Path, options: &FakeInputOptions) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(options)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
