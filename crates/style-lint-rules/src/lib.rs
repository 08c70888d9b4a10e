//! # style-lint-rules
//!
//! Built-in line rules for style-lint.
//!
//! Every rule works on raw text with regular expressions. Nothing here
//! understands the language being checked, so findings inside string
//! literals and comments are expected.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | SL001 | `indentation` | Leading whitespace must be a multiple of the indent unit |
//! | SL002 | `variable-naming` | Lowercase-initial tokens must be camelCase |
//! | SL003 | `method-naming` | Names before `(` must be PascalCase |
//!
//! ## Usage
//!
//! ```ignore
//! use style_lint_core::{Analyzer, Config};
//! use style_lint_rules::RuleSet;
//!
//! let config = Config::default();
//! let analyzer = Analyzer::builder()
//!     .rules(RuleSet::from_config(&config)?.into_rules())
//!     .config(config)
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod indentation;
pub mod method_naming;
mod ruleset;
pub mod variable_naming;

pub use indentation::Indentation;
pub use method_naming::MethodNaming;
pub use ruleset::{all_rules, RuleSet, RuleSetError};
pub use variable_naming::VariableNaming;

/// Re-export core types for convenience.
pub use style_lint_core::{Finding, LineRule, RuleKind, Severity};
