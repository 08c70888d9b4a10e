//! # style-lint-core
//!
//! Core framework for line-oriented style linting.
//!
//! Rules never parse the language they check: they look at one raw line of
//! text at a time. This crate provides:
//!
//! - [`LineRule`] trait for per-line rules
//! - [`Analyzer`] for running rules over files and aggregating results
//! - [`Finding`], [`FileReport`] and [`RunSummary`] for representing results
//! - [`Config`] for TOML-based configuration
//!
//! ## Example
//!
//! ```ignore
//! use style_lint_core::{Analyzer, SourceFile};
//!
//! let analyzer = Analyzer::builder()
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let summary = analyzer.run(&[SourceFile::text("Program.cs", source)]);
//! for report in &summary.reports {
//!     println!("{}: {} issue(s)", report.file, report.issue_count());
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod rule;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError, SourceContents, SourceFile};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::{split_lines, SourceLine};
pub use rule::{LineRule, RuleBox};
pub use types::{
    FileReport, Finding, Location, RuleKind, RunOutcome, RunSummary, Severity, UnreadableFile,
};
