// Document formatter: single-shot orchestration for one file.
//
// read -> spacing engine -> exclusion normalizer -> atomic write-back.
// Precondition violations are silent no-ops so the formatter never blocks
// the editing flow it hooks into; only environment failures are errors.

use std::fs::{self, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::config::ExclusionConfig;
use crate::exclusions::ExclusionNormalizer;
use crate::rules::SpacingEngine;
use crate::storage::StagedFile;

/// Why a run left the target untouched without being an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No path was supplied at all.
    EmptyPath,
    /// Path is missing or not a regular file.
    NotAFile,
    /// Target could not be opened for both reading and writing.
    NotAccessible,
}

/// Result of one formatter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatOutcome {
    Skipped(SkipReason),
    Unchanged,
    Updated,
}

/// Environment failures. These abort the run; the stage-then-swap design
/// guarantees the target itself is untouched.
#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("cannot create temporary working copy: {0}")]
    TempStorage(#[source] std::io::Error),
    #[error("cannot read {path} as UTF-8 text: {source}")]
    UnreadableText {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub struct DocumentFormatter {
    engine: SpacingEngine,
    normalizer: ExclusionNormalizer,
}

impl DocumentFormatter {
    pub fn new(config: &ExclusionConfig) -> Result<Self> {
        Ok(Self {
            engine: SpacingEngine::new()?,
            normalizer: ExclusionNormalizer::from_config(config)?,
        })
    }

    /// Run the full transform over `text` without touching any file.
    pub fn format_text(&self, text: &str) -> Result<String> {
        let spaced = self.engine.apply(text)?;
        Ok(self.normalizer.apply(&spaced))
    }

    /// Format one file in place.
    ///
    /// The staged copy is created before any transform runs and is swapped
    /// over the target only after every transform succeeded, so no partial
    /// update is ever visible at the target path.
    pub fn format_file(&self, path: &str) -> Result<FormatOutcome> {
        if path.is_empty() {
            return Ok(FormatOutcome::Skipped(SkipReason::EmptyPath));
        }
        let target = Path::new(path);
        if !target.is_file() {
            return Ok(FormatOutcome::Skipped(SkipReason::NotAFile));
        }
        if OpenOptions::new()
            .read(true)
            .write(true)
            .open(target)
            .is_err()
        {
            return Ok(FormatOutcome::Skipped(SkipReason::NotAccessible));
        }

        let staged = StagedFile::create_for(target).map_err(EnvironmentError::TempStorage)?;

        let content =
            fs::read_to_string(target).map_err(|source| EnvironmentError::UnreadableText {
                path: path.to_owned(),
                source,
            })?;

        let formatted = self.format_text(&content)?;
        if formatted == content {
            return Ok(FormatOutcome::Unchanged);
        }

        staged
            .commit(&formatted, target)
            .with_context(|| format!("cannot replace {path}"))?;
        Ok(FormatOutcome::Updated)
    }
}
