//! Rule requiring leading whitespace to be a whole number of indent units.
//!
//! # Detection
//!
//! The leading whitespace run of each line (`^\s*`, Unicode whitespace) is
//! measured in characters. The line is flagged when that length is not evenly
//! divisible by the indent unit. Tabs and spaces both count as one character.
//!
//! Whitespace-only lines are measured like any other line, so a blank line of
//! three spaces is flagged.
//!
//! # Configuration
//!
//! - `indent_unit`: characters per indentation level (default: 4)

use crate::RuleSetError;
use regex::Regex;
use std::num::NonZeroUsize;
use style_lint_core::{Finding, LineRule, Location, RuleKind, Severity, SourceLine};

/// Pattern matching the leading whitespace run of a line.
pub const LEADING_WHITESPACE_PATTERN: &str = r"^\s*";

/// Default number of characters per indentation level.
pub const DEFAULT_INDENT_UNIT: usize = 4;

/// Flags lines whose indentation is not a multiple of the indent unit.
#[derive(Debug, Clone)]
pub struct Indentation {
    unit: NonZeroUsize,
    severity: Severity,
    leading: Regex,
}

impl Indentation {
    /// Creates a new rule with the given indent unit.
    ///
    /// # Errors
    ///
    /// Returns an error if `unit` is zero.
    pub fn new(unit: usize) -> Result<Self, RuleSetError> {
        let unit = NonZeroUsize::new(unit).ok_or(RuleSetError::IndentUnit(0))?;
        Ok(Self {
            unit,
            severity: Severity::Error,
            leading: Regex::new(LEADING_WHITESPACE_PATTERN)?,
        })
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Returns the configured indent unit.
    #[must_use]
    pub fn unit(&self) -> usize {
        self.unit.get()
    }

    /// Length of the leading whitespace run, in characters.
    #[must_use]
    pub fn leading_whitespace_len(&self, text: &str) -> usize {
        self.leading
            .find(text)
            .map_or(0, |m| m.as_str().chars().count())
    }

    /// Returns true if the line's indentation is not a multiple of the unit.
    #[must_use]
    pub fn is_violation(&self, text: &str) -> bool {
        self.leading_whitespace_len(text) % self.unit.get() != 0
    }
}

impl LineRule for Indentation {
    fn kind(&self) -> RuleKind {
        RuleKind::Indentation
    }

    fn description(&self) -> &'static str {
        "Leading whitespace must be a multiple of the indent unit"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_line(&self, line: &SourceLine<'_>) -> Vec<Finding> {
        let width = self.leading_whitespace_len(line.text);
        if width % self.unit.get() == 0 {
            return Vec::new();
        }

        vec![Finding::new(
            self.kind(),
            self.severity,
            Location::new(line.file, line.number, 1),
            line.text,
            format!(
                "indentation of {width} character(s) is not a multiple of {}",
                self.unit
            ),
        )]
    }
}
