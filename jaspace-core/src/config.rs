use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Exclusion list configuration.
///
/// A JSON document with a single `exclusions` field holding an ordered
/// list of literal phrases that must never end up with inserted spacing:
///
/// ```json
/// { "exclusions": ["AI開発", "GitHub Copilot"] }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExclusionConfig {
    #[serde(default)]
    pub exclusions: Vec<String>,
}

impl ExclusionConfig {
    /// Load config from file path (functional approach)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ExclusionConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load config with silent fallback to an empty exclusion list.
    ///
    /// Absence, unreadable state, and malformed JSON all degrade to
    /// spacing-engine-only behavior; none of them is an error.
    pub fn load_with_fallback(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_location() {
                Some(p) => p,
                None => return Self::default(),
            },
        };
        Self::load_from_file(&path).unwrap_or_default()
    }

    /// Default config location: `exclusions.json` alongside the executable.
    pub fn default_location() -> Option<PathBuf> {
        let exe = std::env::current_exe().ok()?;
        Some(exe.parent()?.join("exclusions.json"))
    }

    pub fn is_empty(&self) -> bool {
        self.exclusions.is_empty()
    }
}
