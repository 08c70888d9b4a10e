//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const CONFIG_FILE: &str = "style-lint.toml";

const DEFAULT_CONFIG: &str = r#"# style-lint configuration

# Lowest severity that makes `style-lint check` exit non-zero
# (info | warning | error)
fail_on = "error"

[analyzer]
# Root directory to analyze when no path is given
root = "."

# File extensions to check
extensions = ["cs"]

# Glob patterns to exclude, matched against root-relative paths
exclude = [
    "**/bin/**",
    "**/obj/**",
]

# Respect .gitignore files
respect_gitignore = true

# Worker threads (default: one per core)
# parallelism = 4

# Each rule can be enabled/disabled and have its severity overridden

[rules.indentation]
enabled = true
# severity = "warning"
indent_unit = 4

[rules.variable-naming]
enabled = true

[rules.method-naming]
enabled = true
"#;

/// Runs the init command in the current directory.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("."), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to configure rules");
    println!("  2. Run: style-lint check");

    Ok(())
}

fn write_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use style_lint_core::{Config, RuleKind, Severity};
    use style_lint_rules::RuleSet;
    use tempfile::TempDir;

    #[test]
    fn default_config_matches_built_in_defaults() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        let defaults = Config::default();

        assert_eq!(config.fail_on(), Severity::Error);
        assert_eq!(config.analyzer.extensions, defaults.analyzer.extensions);
        assert_eq!(config.analyzer.exclude, defaults.analyzer.exclude);
        assert!(RuleKind::ALL.iter().all(|k| config.is_rule_enabled(*k)));
        assert_eq!(RuleSet::from_config(&config).unwrap().len(), 3);
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), "# mine\n").unwrap();

        let err = write_config(tmp.path(), false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(
            std::fs::read_to_string(tmp.path().join(CONFIG_FILE)).unwrap(),
            "# mine\n"
        );

        write_config(tmp.path(), true).unwrap();
        assert_eq!(
            std::fs::read_to_string(tmp.path().join(CONFIG_FILE)).unwrap(),
            DEFAULT_CONFIG
        );
    }
}
