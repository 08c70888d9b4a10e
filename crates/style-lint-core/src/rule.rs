//! Rule trait for defining line-oriented lint rules.

use crate::context::SourceLine;
use crate::types::{Finding, RuleKind, Severity};

/// A lint rule applied to one line of text at a time.
///
/// Rules see raw characters only: there is no syntax tree, no scope and no
/// notion of string or comment context. A check must be total over any
/// input string, including empty and non-ASCII lines.
///
/// # Example
///
/// ```ignore
/// use style_lint_core::{Finding, LineRule, Location, RuleKind, SourceLine};
///
/// pub struct NoTabs;
///
/// impl LineRule for NoTabs {
///     fn kind(&self) -> RuleKind { RuleKind::Indentation }
///
///     fn check_line(&self, line: &SourceLine<'_>) -> Vec<Finding> {
///         match line.text.find('\t') {
///             Some(at) => vec![Finding::new(
///                 self.kind(),
///                 self.default_severity(),
///                 Location::new(line.file, line.number, line.column_at(at)),
///                 line.text,
///                 "tab character in line",
///             )],
///             None => Vec::new(),
///         }
///     }
/// }
/// ```
pub trait LineRule: Send + Sync {
    /// Returns the kind of finding this rule produces.
    fn kind(&self) -> RuleKind;

    /// Returns the kebab-case name of this rule (e.g., "method-naming").
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Returns the rule code (e.g., "SL003").
    fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for findings from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single line and returns findings in left-to-right order.
    fn check_line(&self, line: &SourceLine<'_>) -> Vec<Finding>;
}

/// Type alias for boxed `LineRule` trait objects.
pub type RuleBox = Box<dyn LineRule>;
