// Script classification by fixed Unicode block ranges.
//
// Classification is pure and stateless. The exact block edges matter:
// rule matching changes behavior at the boundaries, so the ranges are
// written out inclusively rather than derived from general Unicode
// properties.

/// Script class of a single character. Every character belongs to exactly
/// one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptClass {
    /// U+3041..=U+309F
    Hiragana,
    /// U+30A1..=U+30FF
    Katakana,
    /// CJK Unified Ideographs, U+4E00..=U+9FFF
    CjkUnified,
    /// CJK Unified Ideographs Extension A, U+3400..=U+4DBF
    CjkExtensionA,
    /// ASCII letters and digits
    LatinAlnum,
    Other,
}

impl ScriptClass {
    pub fn of(c: char) -> Self {
        match c as u32 {
            0x3041..=0x309F => ScriptClass::Hiragana,
            0x30A1..=0x30FF => ScriptClass::Katakana,
            0x4E00..=0x9FFF => ScriptClass::CjkUnified,
            0x3400..=0x4DBF => ScriptClass::CjkExtensionA,
            _ if c.is_ascii_alphanumeric() => ScriptClass::LatinAlnum,
            _ => ScriptClass::Other,
        }
    }

    /// Hiragana, Katakana, or one of the CJK ideograph ranges.
    pub fn is_japanese(self) -> bool {
        matches!(
            self,
            ScriptClass::Hiragana
                | ScriptClass::Katakana
                | ScriptClass::CjkUnified
                | ScriptClass::CjkExtensionA
        )
    }
}

pub fn is_japanese(c: char) -> bool {
    ScriptClass::of(c).is_japanese()
}

pub fn is_hiragana(c: char) -> bool {
    matches!(c as u32, 0x3041..=0x309F)
}

/// Character class fragment matching any Japanese-script character, for
/// embedding in rule patterns.
pub const JAPANESE: &str =
    r"[\x{3041}-\x{309F}\x{30A1}-\x{30FF}\x{4E00}-\x{9FFF}\x{3400}-\x{4DBF}]";

/// Character class fragment matching ASCII letters and digits.
pub const LATIN_ALNUM: &str = "[A-Za-z0-9]";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_edges() {
        assert_eq!(ScriptClass::of('\u{3040}'), ScriptClass::Other);
        assert_eq!(ScriptClass::of('\u{3041}'), ScriptClass::Hiragana);
        assert_eq!(ScriptClass::of('\u{309F}'), ScriptClass::Hiragana);
        assert_eq!(ScriptClass::of('\u{30A0}'), ScriptClass::Other);
        assert_eq!(ScriptClass::of('\u{30A1}'), ScriptClass::Katakana);
        assert_eq!(ScriptClass::of('\u{30FF}'), ScriptClass::Katakana);
        assert_eq!(ScriptClass::of('\u{33FF}'), ScriptClass::Other);
        assert_eq!(ScriptClass::of('\u{3400}'), ScriptClass::CjkExtensionA);
        assert_eq!(ScriptClass::of('\u{4DBF}'), ScriptClass::CjkExtensionA);
        assert_eq!(ScriptClass::of('\u{4DC0}'), ScriptClass::Other);
        assert_eq!(ScriptClass::of('\u{4E00}'), ScriptClass::CjkUnified);
        assert_eq!(ScriptClass::of('\u{9FFF}'), ScriptClass::CjkUnified);
        assert_eq!(ScriptClass::of('\u{A000}'), ScriptClass::Other);
    }

    #[test]
    fn test_latin_alnum() {
        for c in ['A', 'Z', 'a', 'z', '0', '9'] {
            assert_eq!(ScriptClass::of(c), ScriptClass::LatinAlnum);
        }
        assert_eq!(ScriptClass::of('%'), ScriptClass::Other);
        assert_eq!(ScriptClass::of('('), ScriptClass::Other);
        // Full-width Latin is not ASCII alnum
        assert_eq!(ScriptClass::of('Ａ'), ScriptClass::Other);
    }

    #[test]
    fn test_is_japanese() {
        assert!(is_japanese('あ'));
        assert!(is_japanese('ア'));
        assert!(is_japanese('日'));
        assert!(!is_japanese('A'));
        assert!(!is_japanese('。'));
        assert!(!is_japanese('、'));
    }

    #[test]
    fn test_is_hiragana() {
        assert!(is_hiragana('の'));
        assert!(!is_hiragana('ノ'));
        assert!(!is_hiragana('之'));
    }
}
