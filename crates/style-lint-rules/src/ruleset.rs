//! The built-in rule set and its construction from configuration.

use crate::indentation::DEFAULT_INDENT_UNIT;
use crate::{Indentation, MethodNaming, VariableNaming};
use style_lint_core::{Config, RuleBox, RuleKind};

/// Errors raised while building rules.
#[derive(Debug, thiserror::Error)]
pub enum RuleSetError {
    /// A rule pattern failed to compile.
    #[error("Invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The configured indent unit is not a positive integer.
    #[error("Invalid indent unit {0}: must be a positive integer")]
    IndentUnit(i64),

    /// The configured indent unit is not an integer at all.
    #[error("Invalid indent unit {0}: must be an integer")]
    IndentUnitType(String),
}

/// The ordered collection of built-in rules.
///
/// Rules are kept in execution order: indentation, variable naming, method
/// naming. All of them are stateless once built and can be shared across
/// threads for the duration of a run.
pub struct RuleSet {
    rules: Vec<RuleBox>,
}

impl RuleSet {
    /// Builds all three rules with the given indent unit.
    ///
    /// # Errors
    ///
    /// Returns an error if `indent_unit` is zero or a pattern fails to compile.
    pub fn new(indent_unit: usize) -> Result<Self, RuleSetError> {
        Ok(Self {
            rules: vec![
                Box::new(Indentation::new(indent_unit)?),
                Box::new(VariableNaming::new()?),
                Box::new(MethodNaming::new()?),
            ],
        })
    }

    /// Builds all three rules, reading `indent_unit` from the indentation
    /// rule's configuration section.
    ///
    /// Enabling, disabling and severity overrides are applied by the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured indent unit is not a positive integer.
    pub fn from_config(config: &Config) -> Result<Self, RuleSetError> {
        let Some(value) = config
            .rule_config(RuleKind::Indentation)
            .and_then(|c| c.option("indent_unit"))
        else {
            return Self::new(DEFAULT_INDENT_UNIT);
        };
        let unit = value
            .as_integer()
            .ok_or_else(|| RuleSetError::IndentUnitType(value.to_string()))?;
        let unit = usize::try_from(unit)
            .ok()
            .filter(|u| *u > 0)
            .ok_or(RuleSetError::IndentUnit(unit))?;
        tracing::debug!("Using configured indent unit: {unit}");
        Self::new(unit)
    }

    /// Keeps only the rules whose kind is listed.
    #[must_use]
    pub fn only(mut self, kinds: &[RuleKind]) -> Self {
        self.rules.retain(|rule| kinds.contains(&rule.kind()));
        tracing::debug!("Selected rules: {:?}", self.kinds());
        self
    }

    /// Returns the kinds of the rules in this set, in execution order.
    #[must_use]
    pub fn kinds(&self) -> Vec<RuleKind> {
        self.rules.iter().map(|rule| rule.kind()).collect()
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rule is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Consumes the set, returning the boxed rules for an analyzer.
    #[must_use]
    pub fn into_rules(self) -> Vec<RuleBox> {
        self.rules
    }
}

/// Returns every built-in rule with default settings.
///
/// # Errors
///
/// Returns an error if a pattern fails to compile.
pub fn all_rules() -> Result<Vec<RuleBox>, RuleSetError> {
    Ok(RuleSet::new(DEFAULT_INDENT_UNIT)?.into_rules())
}
