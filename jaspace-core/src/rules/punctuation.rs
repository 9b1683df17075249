// Parenthesis and percent adjacency rules.

use anyhow::Result;

use super::engine::SubstitutionRule;
use crate::script::{JAPANESE, LATIN_ALNUM};

/// Japanese character running into an opening parenthesis.
pub fn japanese_then_open_paren() -> Result<SubstitutionRule> {
    SubstitutionRule::new(
        "JapaneseThenOpenParen",
        &format!(r"({JAPANESE})\("),
        "$1 (",
    )
}

/// Closing parenthesis running into a Japanese character.
pub fn close_paren_then_japanese() -> Result<SubstitutionRule> {
    SubstitutionRule::new(
        "CloseParenThenJapanese",
        &format!(r"\)({JAPANESE})"),
        ") $1",
    )
}

/// Closing parenthesis running into a Latin alphanumeric.
pub fn close_paren_then_latin() -> Result<SubstitutionRule> {
    SubstitutionRule::new(
        "CloseParenThenLatin",
        &format!(r"\)({LATIN_ALNUM})"),
        ") $1",
    )
}

/// Percent sign running into a Japanese character.
pub fn percent_then_japanese() -> Result<SubstitutionRule> {
    SubstitutionRule::new("PercentThenJapanese", &format!("%({JAPANESE})"), "% $1")
}
