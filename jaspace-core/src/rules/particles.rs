// Particle gap collapse: a bracketed span re-attaches to a following
// one-character grammatical particle.
//
// The parenthesis rules space a closing delimiter away from Japanese
// text, which reads wrong when the next character is a particle binding
// the span into the sentence. This rule removes that gap again; it is the
// one targeted reversal in the chain.

use anyhow::Result;
use regex::Regex;

use super::engine::SpacingRule;
use crate::script::is_hiragana;

/// Bracketed span (half- or full-width delimiters, content runs up to the
/// first closing delimiter), whitespace, then a particle.
const GAP_PATTERN: &str = r"([（(\[{][^）)\]}]*[）)\]}])\s+([のとでがをはに])";

pub struct ParticleGapRule {
    pattern: Regex,
}

impl ParticleGapRule {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(GAP_PATTERN)?,
        })
    }
}

impl SpacingRule for ParticleGapRule {
    fn apply(&self, text: &str) -> Result<String> {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for caps in self.pattern.captures_iter(text) {
            let (Some(whole), Some(span), Some(particle)) =
                (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            // Skip when the particle runs on into more hiragana; the match
            // is then the head of a longer word (です, でした, のみ), not
            // a particle attaching the span.
            if text[whole.end()..].chars().next().map_or(false, is_hiragana) {
                continue;
            }
            out.push_str(&text[last..whole.start()]);
            out.push_str(span.as_str());
            out.push_str(particle.as_str());
            last = whole.end();
        }
        out.push_str(&text[last..]);
        Ok(out)
    }

    fn name(&self) -> &str {
        "ParticleGapCollapse"
    }
}
