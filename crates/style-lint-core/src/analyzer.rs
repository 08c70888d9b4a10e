//! Core analyzer for orchestrating lint execution.

use crate::config::Config;
use crate::context::{split_lines, SourceLine};
use crate::rule::{LineRule, RuleBox};
use crate::types::{FileReport, Finding, RunSummary, Severity};

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while building an analyzer.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The dedicated worker pool could not be created.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Contents of a file handed to the analyzer.
///
/// Read failures must be reported as [`SourceContents::Unreadable`] so that an
/// unreadable file never looks like an empty, clean one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceContents {
    /// Decoded text of the file.
    Text(String),
    /// The file could not be read.
    Unreadable {
        /// Why reading failed.
        reason: String,
    },
}

/// A file identifier together with its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Opaque identifier, usually a root-relative path.
    pub id: String,
    /// Contents, or the read failure.
    pub contents: SourceContents,
}

impl SourceFile {
    /// Creates a source file from decoded text.
    #[must_use]
    pub fn text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            contents: SourceContents::Text(text.into()),
        }
    }

    /// Creates a source file that failed to read.
    #[must_use]
    pub fn unreadable(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            contents: SourceContents::Unreadable {
                reason: reason.into(),
            },
        }
    }
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: LineRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds multiple boxed rules to the analyzer.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer.
    ///
    /// Rules disabled in the configuration are dropped, and the remaining
    /// rules are ordered indentation, variable naming, method naming
    /// regardless of the order they were added in.
    ///
    /// # Errors
    ///
    /// Returns an error if a worker pool of the configured size cannot be
    /// created.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();

        let mut rules: Vec<ConfiguredRule> = self
            .rules
            .into_iter()
            .filter(|rule| {
                let enabled = config.is_rule_enabled(rule.kind());
                if !enabled {
                    debug!("Skipping disabled rule: {}", rule.name());
                }
                enabled
            })
            .map(|rule| ConfiguredRule {
                severity: config.rule_severity(rule.kind()),
                rule,
            })
            .collect();
        rules.sort_by_key(|r| r.rule.kind());

        let pool = match config.analyzer.parallelism {
            Some(threads) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?,
            ),
            None => None,
        };

        Ok(Analyzer {
            rules,
            config,
            pool,
        })
    }
}

/// A registered rule with its configured severity override.
struct ConfiguredRule {
    rule: RuleBox,
    severity: Option<Severity>,
}

/// The main analyzer that orchestrates lint execution.
///
/// Analysis of a file is a pure function of the registered rules, the file
/// identifier and its text. Files are analyzed in parallel but reports are
/// always returned in input order.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    rules: Vec<ConfiguredRule>,
    config: Config,
    pool: Option<rayon::ThreadPool>,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of active rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the configuration the analyzer was built with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyzes the full text of one file.
    #[must_use]
    pub fn analyze_source(&self, file: &str, content: &str) -> FileReport {
        let mut report = FileReport::new(file);
        for line in split_lines(file, content) {
            report.findings.extend(self.check_line(&line));
        }
        report
    }

    /// Analyzes a file given as already-split lines.
    #[must_use]
    pub fn analyze_lines<'a, I>(&self, file: &str, lines: I) -> FileReport
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut report = FileReport::new(file);
        for (i, text) in lines.into_iter().enumerate() {
            let line = SourceLine::new(file, i + 1, text);
            report.findings.extend(self.check_line(&line));
        }
        report
    }

    /// Runs every rule against a single line, in rule order.
    fn check_line(&self, line: &SourceLine<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();
        for configured in &self.rules {
            let found = configured.rule.check_line(line);
            findings.extend(Self::apply_severity_override(configured.severity, found));
        }
        findings
    }

    /// Applies a configured severity override.
    fn apply_severity_override(
        severity: Option<Severity>,
        mut findings: Vec<Finding>,
    ) -> Vec<Finding> {
        if let Some(severity) = severity {
            for f in &mut findings {
                f.severity = severity;
            }
        }
        findings
    }

    /// Analyzes all files and returns the aggregated summary.
    #[must_use]
    pub fn run(&self, sources: &[SourceFile]) -> RunSummary {
        self.run_with(sources, |_| {})
    }

    /// Analyzes all files, calling `on_report` for each report in input order.
    ///
    /// The callback lets callers render progressively or log progress; it is
    /// invoked from the calling thread only.
    pub fn run_with<F>(&self, sources: &[SourceFile], mut on_report: F) -> RunSummary
    where
        F: FnMut(&FileReport),
    {
        info!(
            "Analyzing {} files with {} rules",
            sources.len(),
            self.rules.len()
        );

        let analyzed: Vec<Option<FileReport>> = self.install(|| {
            sources
                .par_iter()
                .map(|source| match &source.contents {
                    SourceContents::Text(text) => Some(self.analyze_source(&source.id, text)),
                    SourceContents::Unreadable { .. } => None,
                })
                .collect()
        });

        let mut summary = RunSummary::new();
        for (source, report) in sources.iter().zip(analyzed) {
            match (report, &source.contents) {
                (Some(report), _) => {
                    on_report(&report);
                    summary.push(report);
                }
                (None, SourceContents::Unreadable { reason }) => {
                    warn!("Skipping unreadable file {}: {}", source.id, reason);
                    summary.push_unreadable(&source.id, reason);
                }
                (None, SourceContents::Text(_)) => {}
            }
        }

        info!(
            "Analysis complete: {} findings in {} of {} files",
            summary.findings().count(),
            summary.files_with_issues(),
            summary.files_scanned()
        );

        summary
    }

    /// Runs `op` on the dedicated pool when one is configured.
    fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Location, RuleKind};

    /// Flags every occurrence of a fixed character.
    struct CharRule {
        kind: RuleKind,
        needle: char,
    }

    impl LineRule for CharRule {
        fn kind(&self) -> RuleKind {
            self.kind
        }

        fn check_line(&self, line: &SourceLine<'_>) -> Vec<Finding> {
            line.text
                .match_indices(self.needle)
                .map(|(at, m)| {
                    Finding::new(
                        self.kind,
                        self.default_severity(),
                        Location::new(line.file, line.number, line.column_at(at)),
                        m,
                        "found",
                    )
                })
                .collect()
        }
    }

    fn char_rule(kind: RuleKind, needle: char) -> CharRule {
        CharRule { kind, needle }
    }

    #[test]
    fn test_builder() {
        let analyzer = Analyzer::builder()
            .rule(char_rule(RuleKind::Indentation, 'x'))
            .build()
            .expect("Failed to build analyzer");
        assert_eq!(analyzer.rule_count(), 1);
    }

    #[test]
    fn test_rule_order_is_enforced() {
        let analyzer = Analyzer::builder()
            .rule(char_rule(RuleKind::MethodNaming, 'm'))
            .rule(char_rule(RuleKind::Indentation, 'i'))
            .rule(char_rule(RuleKind::VariableNaming, 'v'))
            .build()
            .unwrap();

        let report = analyzer.analyze_source("a.cs", "m v i\nvv");
        let order: Vec<(usize, RuleKind, usize)> = report
            .findings
            .iter()
            .map(|f| (f.location.line, f.rule, f.location.column))
            .collect();
        assert_eq!(
            order,
            vec![
                (1, RuleKind::Indentation, 5),
                (1, RuleKind::VariableNaming, 3),
                (1, RuleKind::MethodNaming, 1),
                (2, RuleKind::VariableNaming, 1),
                (2, RuleKind::VariableNaming, 2),
            ]
        );
    }

    #[test]
    fn test_disabled_rule_is_dropped() {
        let config = Config::parse("[rules.method-naming]\nenabled = false").unwrap();
        let analyzer = Analyzer::builder()
            .config(config)
            .rule(char_rule(RuleKind::MethodNaming, 'm'))
            .rule(char_rule(RuleKind::Indentation, 'i'))
            .build()
            .unwrap();
        assert_eq!(analyzer.rule_count(), 1);
        assert!(!analyzer.analyze_source("a.cs", "m").has_issues());
    }

    #[test]
    fn test_severity_override() {
        let config = Config::parse("[rules.SL001]\nseverity = \"info\"").unwrap();
        let analyzer = Analyzer::builder()
            .config(config)
            .rule(char_rule(RuleKind::Indentation, 'i'))
            .build()
            .unwrap();
        let report = analyzer.analyze_source("a.cs", "i");
        assert_eq!(report.findings[0].severity, Severity::Info);
    }

    #[test]
    fn test_empty_file_is_clean() {
        let analyzer = Analyzer::builder()
            .rule(char_rule(RuleKind::Indentation, ' '))
            .build()
            .unwrap();
        let report = analyzer.analyze_source("empty.cs", "");
        assert!(report.findings.is_empty());
        assert!(!report.has_issues());
    }

    #[test]
    fn test_analyze_lines_matches_analyze_source() {
        let analyzer = Analyzer::builder()
            .rule(char_rule(RuleKind::MethodNaming, 'q'))
            .build()
            .unwrap();
        let from_source = analyzer.analyze_source("a.cs", "q\nab\nqq");
        let from_lines = analyzer.analyze_lines("a.cs", ["q", "ab", "qq"]);
        assert_eq!(from_source, from_lines);
    }

    #[test]
    fn test_run_keeps_input_order_and_unreadable_files() {
        let config = Config::parse("[analyzer]\nparallelism = 2").unwrap();
        let analyzer = Analyzer::builder()
            .config(config)
            .rule(char_rule(RuleKind::MethodNaming, 'q'))
            .build()
            .unwrap();

        let sources: Vec<SourceFile> = (0..20)
            .map(|i| SourceFile::text(format!("f{i:02}.cs"), if i % 3 == 0 { "q" } else { "" }))
            .chain(std::iter::once(SourceFile::unreadable(
                "bad.cs",
                "permission denied",
            )))
            .collect();

        let mut seen = Vec::new();
        let summary = analyzer.run_with(&sources, |r| seen.push(r.file.clone()));

        let expected: Vec<String> = (0..20).map(|i| format!("f{i:02}.cs")).collect();
        assert_eq!(seen, expected);
        assert_eq!(summary.files_scanned(), 20);
        assert_eq!(summary.files_with_issues(), 7);
        assert_eq!(summary.unreadable.len(), 1);
        assert_eq!(summary.unreadable[0].file, "bad.cs");

        assert_eq!(analyzer.run(&sources), summary);
    }
}
