//! Centralized validation and helper functions.

use std::path::{Path, PathBuf};

/// Maximum number of contigs allowed in a single file (DOS protection)
pub const MAX_CONTIGS: usize = 100_000;

/// Validate that a string is a valid MD5 checksum (32 hex characters).
///
/// # Examples
///
/// ```
/// use scatter_by_n::utils::validation::is_valid_md5;
///
/// assert!(is_valid_md5("6aef897c3d6ff0c78aff06ac189178dd"));
/// assert!(!is_valid_md5("not-an-md5"));
/// assert!(!is_valid_md5("6aef897c3d6ff0c78aff06ac189178d")); // 31 chars
/// ```
#[must_use]
pub fn is_valid_md5(s: &str) -> bool {
    s.len() == 32 && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Normalize an MD5 string to lowercase.
/// Returns None if the input is not a valid MD5.
#[must_use]
pub fn normalize_md5(s: &str) -> Option<String> {
    if is_valid_md5(s) {
        Some(s.to_lowercase())
    } else {
        None
    }
}

/// Check if adding another contig would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new contig.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_contig_limit(count: usize) -> Option<String> {
    if count >= MAX_CONTIGS {
        Some(format!(
            "Too many contigs: adding another would exceed maximum of {MAX_CONTIGS}"
        ))
    } else {
        None
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Output path is a directory: {}", .0.display())]
    OutputIsDirectory(PathBuf),
    #[error("Output directory does not exist: {}", .0.display())]
    MissingOutputDirectory(PathBuf),
    #[error("Output file is not writable: {}", .0.display())]
    OutputNotWritable(PathBuf),
}

/// Check that `path` can be created or overwritten, without touching it.
///
/// # Errors
///
/// Returns `ValidationError::OutputIsDirectory` if `path` is a directory,
/// `ValidationError::MissingOutputDirectory` if its parent does not exist, or
/// `ValidationError::OutputNotWritable` if an existing file or the parent
/// directory is read-only.
pub fn check_output_writable(path: &Path) -> Result<(), ValidationError> {
    if path.is_dir() {
        return Err(ValidationError::OutputIsDirectory(path.to_path_buf()));
    }

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(ValidationError::MissingOutputDirectory(parent.to_path_buf()));
    }

    let readonly = if path.exists() {
        std::fs::metadata(path).map(|m| m.permissions().readonly())
    } else {
        std::fs::metadata(parent).map(|m| m.permissions().readonly())
    };
    match readonly {
        Ok(false) => Ok(()),
        _ => Err(ValidationError::OutputNotWritable(path.to_path_buf())),
    }
}
