//! Rule requiring call and declaration sites to use PascalCase names.
//!
//! # Detection
//!
//! Any identifier (`[A-Za-z_][A-Za-z0-9_]*`) immediately preceded by a
//! whitespace character and immediately followed by `(` is a candidate, so
//! both `    void foo() {` and `x = Compute(y);` yield one. A name at the very
//! start of a line, after `.` or with a space before `(` is not extracted.
//!
//! A candidate is compliant iff it matches `^[A-Z][a-zA-Z0-9]*$`.
//!
//! Unlike the variable-naming rule, extraction does not restrict casing, so
//! this rule does report real findings. The two rules are intentionally left
//! inconsistent with each other.

use crate::RuleSetError;
use regex::{Match, Regex};
use style_lint_core::{Finding, LineRule, Location, RuleKind, Severity, SourceLine};

/// Pattern extracting candidate method names (capture group 1).
pub const EXTRACT_PATTERN: &str = r"\s([A-Za-z_][A-Za-z0-9_]*)\(";

/// Pattern a compliant (PascalCase) name must match in full.
pub const PASCAL_CASE_PATTERN: &str = r"^[A-Z][a-zA-Z0-9]*$";

/// Flags whitespace-preceded call sites whose name is not PascalCase.
#[derive(Debug, Clone)]
pub struct MethodNaming {
    severity: Severity,
    extract: Regex,
    pascal_case: Regex,
}

impl MethodNaming {
    /// Creates a new rule with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in pattern fails to compile.
    pub fn new() -> Result<Self, RuleSetError> {
        Ok(Self {
            severity: Severity::Error,
            extract: Regex::new(EXTRACT_PATTERN)?,
            pascal_case: Regex::new(PASCAL_CASE_PATTERN)?,
        })
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Extracts candidate method names, left to right.
    #[must_use]
    pub fn candidates<'t>(&self, text: &'t str) -> Vec<Match<'t>> {
        self.extract
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .collect()
    }

    /// Returns true if `name` is PascalCase.
    #[must_use]
    pub fn is_pascal_case(&self, name: &str) -> bool {
        self.pascal_case.is_match(name)
    }
}

impl LineRule for MethodNaming {
    fn kind(&self) -> RuleKind {
        RuleKind::MethodNaming
    }

    fn description(&self) -> &'static str {
        "Names at call and declaration sites must be PascalCase"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_line(&self, line: &SourceLine<'_>) -> Vec<Finding> {
        self.candidates(line.text)
            .into_iter()
            .filter(|m| !self.is_pascal_case(m.as_str()))
            .map(|m| {
                Finding::new(
                    self.kind(),
                    self.severity,
                    Location::new(line.file, line.number, line.column_at(m.start())),
                    m.as_str(),
                    format!("method name `{}` is not PascalCase", m.as_str()),
                )
            })
            .collect()
    }
}
