// Script boundary rules: insert an ASCII space where Japanese script and
// Latin alphanumerics touch, in both directions.

use anyhow::Result;

use super::engine::{SpacingRule, SubstitutionRule};
use crate::script::{JAPANESE, LATIN_ALNUM};

pub fn japanese_then_latin() -> Result<SubstitutionRule> {
    SubstitutionRule::new(
        "JapaneseThenLatin",
        &format!("({JAPANESE})({LATIN_ALNUM})"),
        "$1 $2",
    )
}

pub fn latin_then_japanese() -> Result<SubstitutionRule> {
    SubstitutionRule::new(
        "LatinThenJapanese",
        &format!("({LATIN_ALNUM})({JAPANESE})"),
        "$1 $2",
    )
}

/// Apply only the two boundary rules to an already regex-escaped literal.
///
/// This predicts what the engine's boundary spacing would have produced
/// for the literal standing alone. The parenthesis and particle rules are
/// deliberately not part of the prediction; exclusion restoration only
/// reverses boundary spacing.
pub fn spaced_variant(escaped: &str) -> Result<String> {
    let once = japanese_then_latin()?.apply(escaped)?;
    latin_then_japanese()?.apply(&once)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserts_space_in_both_directions() {
        let jl = japanese_then_latin().unwrap();
        let lj = latin_then_japanese().unwrap();
        assert_eq!(jl.apply("日本語ABC").unwrap(), "日本語 ABC");
        assert_eq!(lj.apply("ABC日本語").unwrap(), "ABC 日本語");
    }

    #[test]
    fn test_digits_count_as_latin() {
        let jl = japanese_then_latin().unwrap();
        let lj = latin_then_japanese().unwrap();
        assert_eq!(jl.apply("値42").unwrap(), "値 42");
        assert_eq!(lj.apply("42円").unwrap(), "42 円");
    }

    #[test]
    fn test_spaced_variant_predicts_boundary_spacing() {
        let variant = spaced_variant(&regex::escape("AI開発")).unwrap();
        assert_eq!(variant, "AI 開発");
    }

    #[test]
    fn test_spaced_variant_keeps_escapes_intact() {
        // No boundary inside the phrase, so the escaped form passes through
        let variant = spaced_variant(&regex::escape("C++入門")).unwrap();
        assert_eq!(variant, r"C\+\+入門");
    }
}
