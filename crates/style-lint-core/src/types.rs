//! Core types for findings, per-file reports and run summaries.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Deserialize;

/// Severity level for findings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// The category of style rule that produced a finding.
///
/// The declaration order is the order in which rules run on a line, so the
/// derived `Ord` doubles as the per-line ordering of findings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    /// Leading whitespace is not a multiple of the indent unit.
    Indentation,
    /// Lowercase-initial token that is not camelCase.
    VariableNaming,
    /// Call or declaration site whose name is not PascalCase.
    MethodNaming,
}

impl RuleKind {
    /// Every rule kind, in execution order.
    pub const ALL: [Self; 3] = [Self::Indentation, Self::VariableNaming, Self::MethodNaming];

    /// Returns the kebab-case name used in configuration (e.g. "method-naming").
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Indentation => "indentation",
            Self::VariableNaming => "variable-naming",
            Self::MethodNaming => "method-naming",
        }
    }

    /// Returns the rule code (e.g. "SL003").
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Indentation => "SL001",
            Self::VariableNaming => "SL002",
            Self::MethodNaming => "SL003",
        }
    }

    /// Returns the capitalized label used in human-readable reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Indentation => "Indentation",
            Self::VariableNaming => "Variable naming",
            Self::MethodNaming => "Method naming",
        }
    }

    /// Looks up a rule kind by name or code, ignoring ASCII case.
    #[must_use]
    pub fn lookup(name_or_code: &str) -> Option<Self> {
        let wanted = name_or_code.trim();
        Self::ALL.into_iter().find(|kind| {
            kind.name().eq_ignore_ascii_case(wanted) || kind.code().eq_ignore_ascii_case(wanted)
        })
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Source location of a finding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
pub struct Location {
    /// Opaque file identifier (usually a root-relative path).
    pub file: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number in characters (1-indexed).
    pub column: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

/// A single style violation found during analysis.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct Finding {
    /// Rule that produced this finding.
    pub rule: RuleKind,
    /// Severity of this finding.
    pub severity: Severity,
    /// Where the finding was raised.
    pub location: Location,
    /// Offending token, or the whole line for indentation findings.
    pub text: String,
    /// Human-readable message.
    pub message: String,
}

impl Finding {
    /// Creates a new finding.
    #[must_use]
    pub fn new(
        rule: RuleKind,
        severity: Severity,
        location: Location,
        text: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule,
            severity,
            location,
            text: text.into(),
            message: message.into(),
        }
    }

    /// Returns the rule code of this finding.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.rule.code()
    }

    /// Minimal description: `Line N: <rule> issue - <text>`.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "Line {}: {} issue - {}",
            self.location.line,
            self.rule.label(),
            self.text
        )
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file,
            self.location.line,
            self.location.column,
            self.severity,
            self.code(),
            self.message
        )
    }
}

/// Findings for one analyzed file.
///
/// Whether the file has issues is always derived from `findings`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReport {
    /// File identifier.
    pub file: String,
    /// Findings in encounter order.
    pub findings: Vec<Finding>,
}

impl FileReport {
    /// Creates an empty report for `file`.
    #[must_use]
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            findings: Vec::new(),
        }
    }

    /// Returns true if at least one finding was recorded.
    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.findings.is_empty()
    }

    /// Number of findings in this file.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.findings.len()
    }
}

impl Serialize for FileReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FileReport", 3)?;
        state.serialize_field("file", &self.file)?;
        state.serialize_field("has_issues", &self.has_issues())?;
        state.serialize_field("findings", &self.findings)?;
        state.end()
    }
}

/// A discovered file that could not be read, and therefore was not analyzed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct UnreadableFile {
    /// File identifier.
    pub file: String,
    /// Why reading failed.
    pub reason: String,
}

/// Overall state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// No file was analyzed at all.
    NoFiles,
    /// Every analyzed file passed.
    Clean,
    /// At least one file has findings.
    IssuesFound,
}

/// Aggregated results of a run over many files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// One report per analyzed file, in input order.
    pub reports: Vec<FileReport>,
    /// Files that were supplied but could not be read.
    pub unreadable: Vec<UnreadableFile>,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the report of the next analyzed file.
    pub fn push(&mut self, report: FileReport) {
        self.reports.push(report);
    }

    /// Records a file that could not be read.
    pub fn push_unreadable(&mut self, file: impl Into<String>, reason: impl Into<String>) {
        self.unreadable.push(UnreadableFile {
            file: file.into(),
            reason: reason.into(),
        });
    }

    /// Number of files analyzed.
    #[must_use]
    pub fn files_scanned(&self) -> usize {
        self.reports.len()
    }

    /// Number of analyzed files with at least one finding.
    #[must_use]
    pub fn files_with_issues(&self) -> usize {
        self.reports.iter().filter(|r| r.has_issues()).count()
    }

    /// Iterates over every finding across all files, in report order.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.reports.iter().flat_map(|r| r.findings.iter())
    }

    /// Returns the run outcome.
    #[must_use]
    pub fn outcome(&self) -> RunOutcome {
        if self.reports.is_empty() {
            RunOutcome::NoFiles
        } else if self.reports.iter().any(FileReport::has_issues) {
            RunOutcome::IssuesFound
        } else {
            RunOutcome::Clean
        }
    }

    /// Counts findings by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        self.findings()
            .fold((0, 0, 0), |(e, w, i), f| match f.severity {
                Severity::Error => (e + 1, w, i),
                Severity::Warning => (e, w + 1, i),
                Severity::Info => (e, w, i + 1),
            })
    }

    /// Checks if any finding meets or exceeds the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.findings().any(|f| f.severity >= severity)
    }
}

impl Serialize for RunSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RunSummary", 5)?;
        state.serialize_field("outcome", &self.outcome())?;
        state.serialize_field("files_scanned", &self.files_scanned())?;
        state.serialize_field("files_with_issues", &self.files_with_issues())?;
        state.serialize_field("reports", &self.reports)?;
        state.serialize_field("unreadable", &self.unreadable)?;
        state.end()
    }
}
