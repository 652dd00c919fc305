use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::KeyValueSlot;

/// File-backed slot: each key is stored as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    /// Create a slot rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

/// Keys become file names, so only a conservative character set is accepted
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        bail!("Storage key cannot be empty");
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || "._-".contains(c);
    if key.starts_with('.') || !key.chars().all(allowed) {
        bail!("Invalid storage key: {:?}", key);
    }
    Ok(())
}

impl KeyValueSlot for FileSlot {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read storage file: {}", path.display()))
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).with_context(|| {
                format!("Failed to create data directory: {}", self.dir.display())
            })?;
        }

        // Write atomically (temp file + rename)
        let temp = self.dir.join(format!("{}.json.tmp", key));
        fs::write(&temp, value).context("Failed to write storage temp file")?;
        fs::rename(&temp, &path).context("Failed to rename storage temp file")?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to remove storage file: {}", path.display()))
            }
        }
    }
}
