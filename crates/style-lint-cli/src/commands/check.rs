//! Check command implementation.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use style_lint_core::{Analyzer, Config, RuleKind, RunOutcome};
use style_lint_rules::RuleSet;

use crate::config_resolver;
use crate::discover::{discover_files, load_sources};
use crate::status::ExitStatus;
use crate::OutputFormat;

/// Arguments of the `check` subcommand.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Path to analyze, a directory or a single file (default: `analyzer.root`)
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Only run specific rules, by name or code (comma-separated)
    #[arg(long)]
    pub rules: Option<String>,

    /// Exclude patterns (can be specified multiple times)
    #[arg(short, long)]
    pub exclude: Vec<String>,

    /// File extensions to check, replacing the configured list
    #[arg(long = "ext")]
    pub extensions: Vec<String>,

    /// Indentation unit in characters
    #[arg(long)]
    pub indent_unit: Option<usize>,
}

/// Runs the check command.
pub fn run(args: &CheckArgs, config_path: Option<&Path>) -> Result<ExitStatus> {
    let project_dir = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let mut config = config_resolver::resolve(&project_dir, config_path).load()?;
    apply_overrides(&mut config, args);

    let root = args
        .path
        .clone()
        .unwrap_or_else(|| config.analyzer.root.clone());
    if !root.exists() {
        tracing::error!("Path does not exist: {}", root.display());
        return Ok(ExitStatus::Error);
    }

    let rules = build_rules(&config, args)?;
    let fail_on = config.fail_on();

    let files = discover_files(&root, &config.analyzer)
        .with_context(|| format!("Failed to discover files under {}", root.display()))?;
    let sources = load_sources(&root, &files);

    let analyzer = Analyzer::builder()
        .rules(rules.into_rules())
        .config(config)
        .build()
        .context("Failed to build analyzer")?;

    tracing::debug!(
        "Checking {} with {} rules",
        root.display(),
        analyzer.rule_count()
    );

    let summary = analyzer.run_with(&sources, |report| {
        tracing::debug!("Analyzed file: {}", report.file);
    });

    super::output::print(&summary, args.format)?;

    let status = match summary.outcome() {
        RunOutcome::NoFiles => ExitStatus::Error,
        _ if summary.has_violations_at(fail_on) => ExitStatus::Failure,
        _ => ExitStatus::Success,
    };
    Ok(status)
}

/// Folds command-line flags into the loaded configuration.
fn apply_overrides(config: &mut Config, args: &CheckArgs) {
    config.analyzer.exclude.extend(args.exclude.iter().cloned());

    if !args.extensions.is_empty() {
        config.analyzer.extensions = args
            .extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();
    }
}

fn build_rules(config: &Config, args: &CheckArgs) -> Result<RuleSet> {
    let rules = match args.indent_unit {
        Some(unit) => RuleSet::new(unit),
        None => RuleSet::from_config(config),
    }
    .context("Failed to build rules")?;

    let Some(filter) = &args.rules else {
        return Ok(rules);
    };

    let kinds = parse_rule_filter(filter);
    if kinds.is_empty() {
        bail!("No known rule selected by --rules {filter}");
    }
    Ok(rules.only(&kinds))
}

/// Resolves a comma-separated list of rule names or codes, skipping unknown
/// entries with a warning.
fn parse_rule_filter(filter: &str) -> Vec<RuleKind> {
    let mut kinds = Vec::new();
    for name in filter.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        match RuleKind::lookup(name) {
            Some(kind) if !kinds.contains(&kind) => kinds.push(kind),
            Some(_) => {}
            None => tracing::warn!("Unknown rule: {}", name),
        }
    }
    kinds
}
