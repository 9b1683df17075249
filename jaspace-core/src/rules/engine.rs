use anyhow::Result;
use regex::Regex;

use super::boundary;
use super::particles::ParticleGapRule;
use super::punctuation;

/// Sequential rule pipeline infrastructure.
///
/// A rule scans the entire current buffer and applies all non-overlapping
/// matches before the next rule runs, so rule N+1 always sees the output
/// of rule N. Rules never backtrack across each other.
pub trait SpacingRule {
    fn apply(&self, text: &str) -> Result<String>;
    fn name(&self) -> &str;
}

/// A plain pattern -> rewrite rule.
pub struct SubstitutionRule {
    name: &'static str,
    pattern: Regex,
    rewrite: &'static str,
}

impl SubstitutionRule {
    pub fn new(name: &'static str, pattern: &str, rewrite: &'static str) -> Result<Self> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
            rewrite,
        })
    }
}

impl SpacingRule for SubstitutionRule {
    fn apply(&self, text: &str) -> Result<String> {
        Ok(self.pattern.replace_all(text, self.rewrite).into_owned())
    }

    fn name(&self) -> &str {
        self.name
    }
}

pub struct SpacingEngine {
    rules: Vec<Box<dyn SpacingRule>>,
}

impl SpacingEngine {
    /// Build the rule chain in its fixed application order. The order is
    /// part of the contract: the particle collapse runs last so it can
    /// undo spacing the parenthesis rules introduced.
    pub fn new() -> Result<Self> {
        let rules: Vec<Box<dyn SpacingRule>> = vec![
            Box::new(boundary::japanese_then_latin()?),
            Box::new(boundary::latin_then_japanese()?),
            Box::new(punctuation::japanese_then_open_paren()?),
            Box::new(punctuation::close_paren_then_japanese()?),
            Box::new(punctuation::close_paren_then_latin()?),
            Box::new(punctuation::percent_then_japanese()?),
            Box::new(ParticleGapRule::new()?),
        ];
        Ok(Self { rules })
    }

    /// Run every rule over `text` in order and return the spaced result.
    pub fn apply(&self, text: &str) -> Result<String> {
        let mut buffer = text.to_string();
        for rule in &self.rules {
            buffer = rule.apply(&buffer)?;
        }
        Ok(buffer)
    }

    /// Rule names in application order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_run_in_fixed_order() {
        let engine = SpacingEngine::new().unwrap();
        assert_eq!(
            engine.rule_names(),
            vec![
                "JapaneseThenLatin",
                "LatinThenJapanese",
                "JapaneseThenOpenParen",
                "CloseParenThenJapanese",
                "CloseParenThenLatin",
                "PercentThenJapanese",
                "ParticleGapCollapse",
            ]
        );
    }

    #[test]
    fn test_later_rules_see_earlier_output() {
        let engine = SpacingEngine::new().unwrap();
        // The close paren rule fires on output the open paren rule produced
        assert_eq!(engine.apply("テスト(注)です").unwrap(), "テスト (注) です");
    }
}
