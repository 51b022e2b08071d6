// WHY: Centralized abbreviation handling for sentence boundary detection
// The two exemptions inspect only the characters ending at the boundary punctuation

/// Dotted abbreviations the first exemption keeps intact, e.g. "i.e." and "e.g."
/// Any `x.y?` shape qualifies, not only entries of this list.
#[cfg(test)]
pub const DOTTED_ABBREVIATIONS: &[&str] = &["i.e.", "e.g.", "a.m.", "p.m.", "u.s."];

/// Two-letter title abbreviations the second exemption keeps intact
/// Longer titles such as "Mrs." or "Prof." are NOT covered by the heuristic.
#[cfg(test)]
pub const TITLE_ABBREVIATIONS: &[&str] = &["Mr.", "Dr.", "Ms.", "Jr.", "Sr.", "St."];

/// Checks whether a candidate boundary punctuation belongs to an abbreviation
#[derive(Debug, Clone, Copy, Default)]
pub struct AbbreviationChecker;

impl AbbreviationChecker {
    pub fn new() -> Self {
        Self
    }

    /// `head` is the text up to and including the boundary punctuation.
    /// Returns true when the boundary must not split.
    pub fn is_exempt(&self, head: &str) -> bool {
        self.ends_with_dotted_abbreviation(head) || self.ends_with_title_abbreviation(head)
    }

    /// Word char, `.`, word char, then any char but a newline
    /// The final char is the boundary punctuation itself, so "i.e." and "x.y?" both match.
    pub fn ends_with_dotted_abbreviation(&self, head: &str) -> bool {
        let mut tail = head.chars().rev();
        match (tail.next(), tail.next(), tail.next(), tail.next()) {
            (Some(last), Some(second), Some('.'), Some(first)) => {
                last != '\n' && is_word_char(second) && is_word_char(first)
            }
            _ => false,
        }
    }

    /// ASCII uppercase letter, ASCII lowercase letter, `.`
    pub fn ends_with_title_abbreviation(&self, head: &str) -> bool {
        let mut tail = head.chars().rev();
        match (tail.next(), tail.next(), tail.next()) {
            (Some('.'), Some(lower), Some(upper)) => {
                upper.is_ascii_uppercase() && lower.is_ascii_lowercase()
            }
            _ => false,
        }
    }
}

/// Unicode word character: any alphanumeric or `_`
/// Non-ASCII letters count, so "é.ü. x" is one sentence; an ASCII-only `\w` would split it.
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_abbreviations_are_exempt() {
        let checker = AbbreviationChecker::new();

        for abbr in DOTTED_ABBREVIATIONS {
            assert!(checker.ends_with_dotted_abbreviation(abbr), "Should exempt {}", abbr);
            assert!(checker.is_exempt(&format!("see {abbr}")), "Should exempt {} in context", abbr);
        }
        for abbr in TITLE_ABBREVIATIONS {
            assert!(checker.ends_with_title_abbreviation(abbr), "Should exempt {}", abbr);
        }
    }

    #[test]
    fn test_plain_sentence_ends_are_not_exempt() {
        let checker = AbbreviationChecker::new();

        let ending_tests = [
            "word frequencies.",
            "how are you?",
            "e.g.?",
            "x.",
            ".",
            "",
            "Mrs.",
            "Prof.",
            // lower-cased text never matches the title rule
            "mr.",
        ];
        for text in &ending_tests {
            assert!(!checker.is_exempt(text), "Should not exempt {:?}", text);
        }
    }

    #[test]
    fn test_dotted_rule_accepts_any_final_char() {
        let checker = AbbreviationChecker::new();

        assert!(checker.ends_with_dotted_abbreviation("a.b?"));
        assert!(checker.ends_with_dotted_abbreviation("x.y.z."));
        assert!(checker.ends_with_dotted_abbreviation("v1.2."));
        assert!(checker.ends_with_dotted_abbreviation("é.ü."));
        assert!(!checker.ends_with_dotted_abbreviation("a.b\n"));
        assert!(!checker.ends_with_dotted_abbreviation("a. b."));
        assert!(!checker.ends_with_dotted_abbreviation("-.b."));
    }

    #[test]
    fn test_word_chars_are_unicode() {
        assert!(is_word_char('é'));
        assert!(is_word_char('_'));
        assert!(is_word_char('7'));
        assert!(!is_word_char('-'));
        assert!(!is_word_char('\u{a0}'));
    }

    #[test]
    fn test_title_rule_requires_period() {
        let checker = AbbreviationChecker::new();

        assert!(checker.ends_with_title_abbreviation("Dear Mr."));
        assert!(!checker.ends_with_title_abbreviation("Mr?"));
        assert!(!checker.ends_with_title_abbreviation("MR."));
        assert!(!checker.ends_with_title_abbreviation("r."));
    }
}
