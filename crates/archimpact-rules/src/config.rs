use serde::{Deserialize, Serialize};

/// What the provider does when a rule fails mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop at the first failing rule and surface its error.
    Abort,
    /// Log the failure and keep applying the remaining rules; failures are
    /// collected into the run report.
    Continue,
}

impl Default for FailurePolicy {
    fn default() -> Self {
        FailurePolicy::Abort
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Whether the provider's built-in rules run in addition to the custom
    /// ones.
    pub standard_rules_enabled: bool,
    pub failure_policy: FailurePolicy,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            standard_rules_enabled: true,
            failure_policy: FailurePolicy::default(),
        }
    }
}
