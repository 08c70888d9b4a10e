//! Rule requiring lowercase-initial tokens to be camelCase.
//!
//! # Detection
//!
//! Every word-bounded token matching `[a-z][a-zA-Z0-9]*` is extracted from the
//! line, wherever it appears: identifiers, keywords, string literals and
//! comments alike. Each candidate is then checked against
//! `^[a-z][a-zA-Z0-9]*$`.
//!
//! # Known limitation
//!
//! The extraction pattern only yields tokens that already satisfy the
//! compliance pattern, so this rule cannot report anything as written. Tokens
//! such as `_count` or `my_value` are never extracted in the first place
//! (`\b` does not separate `_` from a letter). Making the rule productive
//! requires widening the extraction pattern; the stricter intent is unknown,
//! so both patterns are kept exactly as they are.
//!
//! Character classes are ASCII-only; `\b` follows Unicode word boundaries.

use crate::RuleSetError;
use regex::{Match, Regex};
use style_lint_core::{Finding, LineRule, Location, RuleKind, Severity, SourceLine};

/// Pattern extracting candidate variable tokens.
pub const EXTRACT_PATTERN: &str = r"\b[a-z][a-zA-Z0-9]*\b";

/// Pattern a compliant (camelCase) token must match in full.
pub const CAMEL_CASE_PATTERN: &str = r"^[a-z][a-zA-Z0-9]*$";

/// Flags lowercase-initial tokens that are not camelCase.
#[derive(Debug, Clone)]
pub struct VariableNaming {
    severity: Severity,
    extract: Regex,
    camel_case: Regex,
}

impl VariableNaming {
    /// Creates a new rule with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in pattern fails to compile.
    pub fn new() -> Result<Self, RuleSetError> {
        Ok(Self {
            severity: Severity::Error,
            extract: Regex::new(EXTRACT_PATTERN)?,
            camel_case: Regex::new(CAMEL_CASE_PATTERN)?,
        })
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Extracts candidate tokens, left to right.
    #[must_use]
    pub fn candidates<'t>(&self, text: &'t str) -> Vec<Match<'t>> {
        self.extract.find_iter(text).collect()
    }

    /// Returns true if `token` is camelCase.
    #[must_use]
    pub fn is_camel_case(&self, token: &str) -> bool {
        self.camel_case.is_match(token)
    }
}

impl LineRule for VariableNaming {
    fn kind(&self) -> RuleKind {
        RuleKind::VariableNaming
    }

    fn description(&self) -> &'static str {
        "Lowercase-initial tokens must be camelCase"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_line(&self, line: &SourceLine<'_>) -> Vec<Finding> {
        self.candidates(line.text)
            .into_iter()
            .filter(|m| !self.is_camel_case(m.as_str()))
            .map(|m| {
                Finding::new(
                    self.kind(),
                    self.severity,
                    Location::new(line.file, line.number, line.column_at(m.start())),
                    m.as_str(),
                    format!("variable name `{}` is not camelCase", m.as_str()),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> VariableNaming {
        VariableNaming::new().expect("rule should build")
    }

    fn tokens(text: &str) -> Vec<String> {
        rule()
            .candidates(text)
            .iter()
            .map(|m| m.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_extracts_lowercase_initial_tokens() {
        assert_eq!(
            tokens("    int itemCount = GetTotal(x2);"),
            vec!["int", "itemCount", "x2"]
        );
    }

    #[test]
    fn test_extracts_inside_strings_and_comments() {
        assert_eq!(
            tokens(r#"Log("hello world"); // note"#),
            vec!["hello", "world", "note"]
        );
    }

    #[test]
    fn test_skips_non_word_bounded_tokens() {
        assert!(tokens("_count my_value MAX_len Foo").is_empty());
        assert!(tokens("9lives").is_empty());
        // Non-ASCII letters are word characters, so no boundary before `abc`
        assert!(tokens("éabc").is_empty());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let line = "var totalSum = a + bValue * c3;";
        assert_eq!(tokens(line), tokens(line));
    }

    #[test]
    fn test_every_candidate_is_compliant() {
        let rule = rule();
        let line = "public static void main(String[] args) { int fooBar = x_y + zZ9; }";
        for m in rule.candidates(line) {
            assert!(rule.is_camel_case(m.as_str()), "{}", m.as_str());
        }
        assert!(rule.check_line(&SourceLine::new("A.cs", 1, line)).is_empty());
    }

    #[test]
    fn test_compliance_predicate() {
        let rule = rule();
        assert!(rule.is_camel_case("count"));
        assert!(rule.is_camel_case("itemCount2"));
        assert!(!rule.is_camel_case("ItemCount"));
        assert!(!rule.is_camel_case("item_count"));
        assert!(!rule.is_camel_case("_item"));
        assert!(!rule.is_camel_case(""));
    }
}
