// Exclusion normalizer: restores configured phrases the spacing engine
// split apart.
//
// For each phrase the normalizer predicts the spaced form (boundary rules
// only) and replaces every occurrence of that form with the literal
// phrase. An occurrence altered by the parenthesis or particle rules is
// not restored; see the README for this known limitation.

use anyhow::Result;
use regex::{NoExpand, Regex};

use crate::config::ExclusionConfig;
use crate::rules::boundary;

struct ExclusionEntry {
    literal: String,
    spaced: Regex,
}

pub struct ExclusionNormalizer {
    entries: Vec<ExclusionEntry>,
}

impl ExclusionNormalizer {
    /// Build entries in config order, skipping empty phrases.
    pub fn from_config(config: &ExclusionConfig) -> Result<Self> {
        let mut entries = Vec::new();
        for phrase in &config.exclusions {
            if phrase.is_empty() {
                continue;
            }
            let escaped = regex::escape(phrase);
            let spaced = boundary::spaced_variant(&escaped)?;
            entries.push(ExclusionEntry {
                literal: phrase.clone(),
                spaced: Regex::new(&spaced)?,
            });
        }
        Ok(Self { entries })
    }

    /// Replace every spaced occurrence of each entry with its literal
    /// form, in list order. A later entry may re-correct text an earlier
    /// entry touched.
    pub fn apply(&self, text: &str) -> String {
        let mut buffer = text.to_string();
        for entry in &self.entries {
            buffer = entry
                .spaced
                .replace_all(&buffer, NoExpand(&entry.literal))
                .into_owned();
        }
        buffer
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
