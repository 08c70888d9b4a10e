//! List rules command implementation.

use anyhow::{Context, Result};
use style_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() -> Result<()> {
    let rules = all_rules().context("Failed to build rules")?;

    println!("Available rules (run in this order):\n");
    println!("{:<8} {:<18} {:<10} Description", "Code", "Name", "Severity");
    println!("{}", "-".repeat(80));

    for rule in &rules {
        println!(
            "{:<8} {:<18} {:<10} {}",
            rule.code(),
            rule.name(),
            rule.default_severity().to_string(),
            rule.description()
        );
    }

    println!("\nUse --rules to run a subset, by name or code, e.g.:");
    println!("  style-lint check --rules indentation,method-naming");
    println!("  style-lint check --rules SL001,SL003");
    Ok(())
}
