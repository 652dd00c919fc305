use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

// Maximum transcript file size: 50MB
const MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;

/// Validates that a file's size is within acceptable limits (50MB)
///
/// Takes an open file handle so the checked file is the one that gets read.
///
/// # Errors
///
/// Returns an error if the metadata cannot be read or the file is larger than 50MB.
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

/// Shortens a path under the home directory to `~/...` for display
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use askwhy::utils::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/.local/share/askwhy");
/// // "~/.local/share/askwhy" when the home directory is /Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    shorten_under_home(path, dirs::home_dir().as_deref())
}

/// Component-wise, so `/home/al` never shortens `/home/alice`
pub(crate) fn shorten_under_home(path: &Path, home: Option<&Path>) -> String {
    match home.and_then(|home| path.strip_prefix(home).ok()) {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => format!("~/{}", rest.display()),
        None => path.display().to_string(),
    }
}
