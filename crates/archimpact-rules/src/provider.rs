use crate::{ChangePropagationStepRegistry, FailurePolicy, PropagationAnalysis, ProviderConfig, Rule};
use archimpact_core::{ArchitectureVersion, ImpactError, Result};
use serde::Serialize;
use tracing::{debug, warn};

/// Outcome of one `apply_all_rules` run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RuleRunReport {
    /// Rules that completed without error.
    pub rules_applied: usize,
    /// Failures absorbed under [`FailurePolicy::Continue`]; empty under
    /// `Abort` (the first failure aborts the run instead).
    pub failures: Vec<RuleFailure>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleFailure {
    pub rule: String,
    pub message: String,
}

/// Owns rule registration and drives "apply all rules" over a version.
pub trait RuleProvider<V: ArchitectureVersion> {
    /// Registers a custom rule. Fails once registration has closed or when
    /// a rule with the same name is already registered.
    fn register(&mut self, rule: Box<dyn Rule<V>>) -> Result<()>;

    /// Closes registration and passes the final, immutable rule set to
    /// `hook` before any rule executes (once for the standard set, once for
    /// the custom set). The lifecycle has exactly one Building to Running
    /// transition; a second call is an error.
    fn run_early_hook(&mut self, hook: &mut dyn FnMut(&[Box<dyn Rule<V>>])) -> Result<()>;

    /// Applies every enabled rule exactly once, in registration order
    /// (standard rules first). Closes registration implicitly if
    /// [`run_early_hook`](Self::run_early_hook) was never called.
    fn apply_all_rules(
        &mut self,
        version: &V,
        registry: &mut ChangePropagationStepRegistry,
        analysis: &mut dyn PropagationAnalysis<V>,
    ) -> Result<RuleRunReport>;

    fn standard_rules_enabled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Building,
    Running,
}

/// Default single-threaded provider: rules run sequentially against the
/// shared registry and analysis, nothing survives the run except what rules
/// persisted through the analysis.
pub struct SequentialRuleProvider<V: ArchitectureVersion> {
    config: ProviderConfig,
    standard_rules: Vec<Box<dyn Rule<V>>>,
    custom_rules: Vec<Box<dyn Rule<V>>>,
    phase: Phase,
}

impl<V: ArchitectureVersion> SequentialRuleProvider<V> {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            standard_rules: Vec::new(),
            custom_rules: Vec::new(),
            phase: Phase::Building,
        }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Registers one of the provider's built-in rules. Same uniqueness and
    /// lifecycle constraints as [`RuleProvider::register`]; whether these
    /// run at all is controlled by `standard_rules_enabled`.
    pub fn register_standard(&mut self, rule: Box<dyn Rule<V>>) -> Result<()> {
        self.check_open(rule.name())?;
        self.standard_rules.push(rule);
        Ok(())
    }

    pub fn rule_count(&self) -> usize {
        self.standard_rules.len() + self.custom_rules.len()
    }

    fn check_open(&self, name: &str) -> Result<()> {
        if self.phase != Phase::Building {
            return Err(ImpactError::RegistrationConflict(format!(
                "cannot register rule '{}': registration has closed",
                name
            )));
        }
        if self
            .standard_rules
            .iter()
            .chain(self.custom_rules.iter())
            .any(|rule| rule.name() == name)
        {
            return Err(ImpactError::RegistrationConflict(format!(
                "a rule named '{}' is already registered",
                name
            )));
        }
        Ok(())
    }
}

impl<V: ArchitectureVersion> Default for SequentialRuleProvider<V> {
    fn default() -> Self {
        Self::new(ProviderConfig::default())
    }
}

impl<V: ArchitectureVersion> RuleProvider<V> for SequentialRuleProvider<V> {
    fn register(&mut self, rule: Box<dyn Rule<V>>) -> Result<()> {
        self.check_open(rule.name())?;
        self.custom_rules.push(rule);
        Ok(())
    }

    fn run_early_hook(&mut self, hook: &mut dyn FnMut(&[Box<dyn Rule<V>>])) -> Result<()> {
        if self.phase != Phase::Building {
            return Err(ImpactError::RegistrationConflict(
                "the rule registry is already sealed".to_string(),
            ));
        }
        self.phase = Phase::Running;
        hook(&self.standard_rules);
        hook(&self.custom_rules);
        Ok(())
    }

    fn apply_all_rules(
        &mut self,
        version: &V,
        registry: &mut ChangePropagationStepRegistry,
        analysis: &mut dyn PropagationAnalysis<V>,
    ) -> Result<RuleRunReport> {
        self.phase = Phase::Running;

        let standard: &[Box<dyn Rule<V>>] = if self.config.standard_rules_enabled {
            &self.standard_rules
        } else {
            &[]
        };

        let mut report = RuleRunReport::default();
        for rule in standard.iter().chain(self.custom_rules.iter()) {
            debug!(rule = rule.name(), "applying propagation rule");
            match rule.apply(version, registry, analysis) {
                Ok(()) => report.rules_applied += 1,
                Err(err) => match self.config.failure_policy {
                    FailurePolicy::Abort => {
                        return Err(ImpactError::RuleExecution {
                            rule: rule.name().to_string(),
                            source: Box::new(err),
                        });
                    }
                    FailurePolicy::Continue => {
                        warn!(rule = rule.name(), error = %err, "rule failed, continuing");
                        report.failures.push(RuleFailure {
                            rule: rule.name().to_string(),
                            message: err.to_string(),
                        });
                    }
                },
            }
        }
        Ok(report)
    }

    fn standard_rules_enabled(&self) -> bool {
        self.config.standard_rules_enabled
    }
}
