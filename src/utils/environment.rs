use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

const APP_DIR_NAME: &str = "askwhy";

/// Default directory for persisted state
///
/// Uses the platform data directory (`dirs::data_dir()/askwhy`), falling back to
/// `$HOME/.askwhy` where the platform has no data directory.
pub fn default_data_dir() -> Result<PathBuf> {
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join(APP_DIR_NAME));
    }
    home_fallback()
}

fn home_fallback() -> Result<PathBuf> {
    let home = env::var("HOME").context("HOME environment variable not set")?;
    Ok(dir_under_home(&home))
}

fn dir_under_home(home: &str) -> PathBuf {
    PathBuf::from(home).join(format!(".{}", APP_DIR_NAME))
}
