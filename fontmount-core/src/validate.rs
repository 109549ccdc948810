//! Candidate font path validation.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

/// Resolved paths longer than this are rejected before any filesystem
/// probe. The Windows bound counts the terminating NUL slot of `MAX_PATH`.
#[cfg(windows)]
pub const MAX_PATH_BYTES: usize = 260;
#[cfg(not(windows))]
pub const MAX_PATH_BYTES: usize = 4096;

/// Which extensions a candidate path may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontKind {
    /// Any single-file format the session font manager accepts.
    Any,
    /// The metric half of a PostScript Type 1 pair (`.pfm`).
    PostScriptMetric,
    /// The outline half of a PostScript Type 1 pair (`.pfb`).
    PostScriptOutline,
}

/// Why a candidate path was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("cannot resolve path: {path}")]
    InvalidPath { path: String },

    #[error("resolved path exceeds {limit} bytes: {}", .path.display())]
    PathTooLong { path: PathBuf, limit: usize },

    #[error("no such file: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("{} is a directory, not a font file", .path.display())]
    IsDirectory { path: PathBuf },

    #[error("{} does not look like a font file", .path.display())]
    NotFontFile { path: PathBuf },

    #[error("{} has the metric and outline halves swapped", .path.display())]
    PostScriptMisordered { path: PathBuf },

    #[error("metric {} and outline {} name different fonts", .metric.display(), .outline.display())]
    MismatchedPostScriptNames { metric: PathBuf, outline: PathBuf },
}

/// Validate `path` as a registrable font file of the given kind.
///
/// Checks run in a fixed order and the first failure wins: lexical
/// resolution to an absolute path, the platform length bound, existence,
/// not-a-directory, then the extension set for `kind`. The resolved
/// absolute path is returned so pair validation can compare base names.
pub fn validate(path: &str, kind: FontKind) -> Result<PathBuf, ValidationError> {
    debug!("validating {path} as {kind:?}");

    let resolved = std::path::absolute(path).map_err(|_| ValidationError::InvalidPath {
        path: path.to_string(),
    })?;

    if resolved.as_os_str().len() >= MAX_PATH_BYTES {
        return Err(ValidationError::PathTooLong {
            path: resolved,
            limit: MAX_PATH_BYTES,
        });
    }

    let meta = match fs::metadata(&resolved) {
        Ok(meta) => meta,
        Err(_) => return Err(ValidationError::NotFound { path: resolved }),
    };
    if meta.is_dir() {
        return Err(ValidationError::IsDirectory { path: resolved });
    }

    check_extension(&resolved, kind)?;
    debug!("{} accepted as {kind:?}", resolved.display());
    Ok(resolved)
}

fn check_extension(path: &Path, kind: FontKind) -> Result<(), ValidationError> {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_ascii_lowercase(),
        None => String::new(),
    };

    let allowed = match kind {
        FontKind::Any => matches!(
            ext.as_str(),
            "fon" | "fnt" | "ttf" | "ttc" | "fot" | "otf" | "mmm"
        ),
        FontKind::PostScriptMetric => ext == "pfm",
        FontKind::PostScriptOutline => ext == "pfb",
    };
    if allowed {
        return Ok(());
    }

    // The other PostScript extension means the pair order is swapped.
    let swapped = match kind {
        FontKind::PostScriptMetric => ext == "pfb",
        FontKind::PostScriptOutline => ext == "pfm",
        FontKind::Any => false,
    };

    if swapped {
        Err(ValidationError::PostScriptMisordered {
            path: path.to_path_buf(),
        })
    } else {
        Err(ValidationError::NotFontFile {
            path: path.to_path_buf(),
        })
    }
}
