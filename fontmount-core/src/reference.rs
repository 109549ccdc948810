//! Font argument resolution, including `metric|outline` pairs.

use std::path::Path;

use log::debug;

use crate::validate::{validate, FontKind, ValidationError};

/// One font argument as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontReference {
    /// A single font file.
    Simple(String),
    /// A PostScript Type 1 font split across a metric and an outline file.
    PostScriptPair { metric: String, outline: String },
}

impl FontReference {
    /// Split a raw argument on the first `|`. Everything after it is the
    /// outline half, taken verbatim even if it contains further `|`s.
    pub fn parse(arg: &str) -> Self {
        match arg.split_once('|') {
            Some((metric, outline)) => Self::PostScriptPair {
                metric: metric.to_string(),
                outline: outline.to_string(),
            },
            None => Self::Simple(arg.to_string()),
        }
    }

    /// Validate the referenced file(s) without touching the font manager.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Simple(path) => validate(path, FontKind::Any).map(|_| ()),
            Self::PostScriptPair { metric, outline } => validate_pair(metric, outline),
        }
    }
}

/// Validate both halves of a Type 1 pair, then require matching base
/// names. The base names are compared only once both halves individually
/// validate as metric and outline files.
fn validate_pair(metric: &str, outline: &str) -> Result<(), ValidationError> {
    let metric_path = validate(metric, FontKind::PostScriptMetric)?;
    let outline_path = validate(outline, FontKind::PostScriptOutline)?;

    let metric_stem = stem_of(&metric_path);
    let outline_stem = stem_of(&outline_path);
    if !metric_stem.eq_ignore_ascii_case(&outline_stem) {
        return Err(ValidationError::MismatchedPostScriptNames {
            metric: metric_path,
            outline: outline_path,
        });
    }

    debug!("pair {metric}|{outline} accepted");
    Ok(())
}

fn stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}
