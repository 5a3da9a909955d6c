//! Validation engine for ranking configurations.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`RankConfig`] and collects every diagnostic into a [`ValidationReport`].
//! It never short-circuits on the first error, so callers see all problems
//! at once. Rankers call it before the first iteration and fail fast with
//! [`Error::InvalidConfiguration`] if any rule reports an error.

use std::collections::HashMap;

use serde::Serialize;

use super::errors::{ConfigError, ErrorCode};
use super::spec::RankConfig;
use crate::error::{Error, Result};

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: ConfigError,
}

impl ValidationDiagnostic {
    pub fn error(err: ConfigError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: ConfigError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &ConfigError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &ConfigError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Total number of diagnostics (errors + warnings).
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if there are no diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Convert into a `Result`, mapping the first error to
    /// [`Error::InvalidConfiguration`]. Warnings are logged and dropped.
    pub fn into_result(self) -> Result<()> {
        #[cfg(feature = "tracing")]
        for warning in self.warnings() {
            tracing::warn!(%warning, "configuration warning");
        }
        match self.errors().next() {
            Some(err) => Err(Error::from(err.clone())),
            None => Ok(()),
        }
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`RankConfig`] and returns
/// zero or more diagnostics.
///
/// Rules are stateless and must be `Send + Sync` so a long-lived engine can
/// be shared across threads.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"tolerance"`).
    fn name(&self) -> &str;

    /// Inspect `config` and return any findings.
    fn validate(&self, config: &RankConfig) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against a [`RankConfig`] and collects
/// all diagnostics into a [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(MaxIterationsRule));
        engine.add_rule(Box::new(ToleranceRule));
        engine.add_rule(Box::new(DampingRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in run order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules against `config` and return the collected report.
    pub fn validate(&self, config: &RankConfig) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(config));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. max_iterations must be positive ─────────────────────────────────────

struct MaxIterationsRule;

impl ValidationRule for MaxIterationsRule {
    fn name(&self) -> &str {
        "max_iterations"
    }

    fn validate(&self, config: &RankConfig) -> Vec<ValidationDiagnostic> {
        if config.max_iterations == 0 {
            vec![ValidationDiagnostic::error(
                ConfigError::new(
                    ErrorCode::NotPositive,
                    "/max_iterations",
                    "max_iterations must be greater than 0",
                )
                .with_hint("The default budget is 100 iterations"),
            )]
        } else {
            vec![]
        }
    }
}

// ─── 2. tolerance must be a positive finite real ────────────────────────────

struct ToleranceRule;

impl ValidationRule for ToleranceRule {
    fn name(&self) -> &str {
        "tolerance"
    }

    fn validate(&self, config: &RankConfig) -> Vec<ValidationDiagnostic> {
        let tol = config.tolerance;

        if !tol.is_finite() {
            vec![ValidationDiagnostic::error(ConfigError::new(
                ErrorCode::NotFinite,
                "/tolerance",
                format!("tolerance must be finite, got {tol}"),
            ))]
        } else if tol <= 0.0 {
            vec![ValidationDiagnostic::error(
                ConfigError::new(
                    ErrorCode::NotPositive,
                    "/tolerance",
                    format!("tolerance must be greater than 0, got {tol}"),
                )
                .with_hint("Use a small positive value such as 1e-6"),
            )]
        } else {
            vec![]
        }
    }
}

// ─── 3. damping must lie in the open interval (0, 1) ────────────────────────

struct DampingRule;

impl ValidationRule for DampingRule {
    fn name(&self) -> &str {
        "damping"
    }

    fn validate(&self, config: &RankConfig) -> Vec<ValidationDiagnostic> {
        match config.damping {
            Some(d) if !(d > 0.0 && d < 1.0) => vec![ValidationDiagnostic::error(
                ConfigError::new(
                    ErrorCode::OutOfRange,
                    "/damping",
                    format!("damping must be in (0, 1), got {d}"),
                )
                .with_hint("0.85 is the conventional damping factor"),
            )],
            _ => vec![],
        }
    }
}

// ─── 4. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    fn check_unknowns(
        unknowns: &HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<_> = unknowns.keys().collect();
        keys.sort();

        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    ConfigError::new(
                        ErrorCode::UnknownField,
                        format!("/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, config: &RankConfig) -> Vec<ValidationDiagnostic> {
        Self::check_unknowns(&config.unknown_fields, config.strict)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn config(json: &str) -> RankConfig {
        serde_json::from_str(json).unwrap()
    }

    fn engine() -> ValidationEngine {
        ValidationEngine::with_defaults()
    }

    // ─── Valid configs ──────────────────────────────────────────────────

    #[test]
    fn test_default_config_is_valid() {
        let report = engine().validate(&RankConfig::default());
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn test_explicit_damping_is_valid() {
        let report = engine().validate(&config(r#"{ "damping": 0.5, "tolerance": 1e-9 }"#));
        assert!(report.is_valid());
    }

    // ─── Invalid values ─────────────────────────────────────────────────

    #[test]
    fn test_zero_max_iterations() {
        let report = engine().validate(&config(r#"{ "max_iterations": 0 }"#));
        let errors: Vec<_> = report.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::NotPositive);
        assert_eq!(errors[0].path, "/max_iterations");
    }

    #[test]
    fn test_non_positive_tolerance() {
        for tol in ["0.0", "-1e-6"] {
            let report = engine().validate(&config(&format!(r#"{{ "tolerance": {tol} }}"#)));
            let errors: Vec<_> = report.errors().collect();
            assert_eq!(errors.len(), 1, "tolerance {tol}");
            assert_eq!(errors[0].path, "/tolerance");
        }
    }

    #[test]
    fn test_nan_tolerance() {
        let cfg = RankConfig {
            tolerance: f64::NAN,
            ..Default::default()
        };
        let report = engine().validate(&cfg);
        assert_eq!(report.errors().next().unwrap().code, ErrorCode::NotFinite);
    }

    #[test]
    fn test_damping_bounds_are_exclusive() {
        for d in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let cfg = RankConfig {
                damping: Some(d),
                ..Default::default()
            };
            let report = engine().validate(&cfg);
            assert!(report.has_errors(), "damping {d} should be rejected");
            assert_eq!(report.errors().next().unwrap().code, ErrorCode::OutOfRange);
        }
    }

    #[test]
    fn test_collects_all_errors() {
        let report = engine().validate(&config(
            r#"{ "max_iterations": 0, "tolerance": 0, "damping": 2.0 }"#,
        ));
        assert_eq!(report.errors().count(), 3);
    }

    // ─── Unknown fields ─────────────────────────────────────────────────

    #[test]
    fn test_unknown_field_is_warning_when_lenient() {
        let report = engine().validate(&config(r#"{ "dampening": 0.85 }"#));
        assert!(report.is_valid());
        assert_eq!(report.warnings().count(), 1);
        assert!(report.clone().into_result().is_ok());
    }

    #[test]
    fn test_unknown_field_is_error_when_strict() {
        let report = engine().validate(&config(r#"{ "dampening": 0.85, "strict": true }"#));
        assert!(report.has_errors());
        assert_eq!(report.errors().next().unwrap().path, "/dampening");
    }

    // ─── Conversion ─────────────────────────────────────────────────────

    #[test]
    fn test_into_result_maps_first_error() {
        let report = engine().validate(&config(r#"{ "tolerance": -1 }"#));
        match report.into_result() {
            Err(Error::InvalidConfiguration { path, .. }) => assert_eq!(path, "/tolerance"),
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_rule() {
        struct SmallBudget;

        impl ValidationRule for SmallBudget {
            fn name(&self) -> &str {
                "small_budget"
            }

            fn validate(&self, config: &RankConfig) -> Vec<ValidationDiagnostic> {
                if config.max_iterations > 10 {
                    vec![ValidationDiagnostic::warning(ConfigError::new(
                        ErrorCode::OutOfRange,
                        "/max_iterations",
                        "budget above 10",
                    ))]
                } else {
                    vec![]
                }
            }
        }

        let mut engine = engine();
        engine.add_rule(Box::new(SmallBudget));
        assert_eq!(
            engine.rule_names(),
            vec!["max_iterations", "tolerance", "damping", "unknown_fields", "small_budget"]
        );

        let report = engine.validate(&RankConfig::default());
        assert!(report.is_valid());
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_report_serializes() {
        let report = engine().validate(&config(r#"{ "max_iterations": 0 }"#));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["diagnostics"][0]["severity"], "error");
        assert_eq!(json["diagnostics"][0]["code"], "not_positive");
    }
}
