use std::any::Any;
use std::fmt;

/// Capability tag a step declares at registration time.
///
/// Tags replace runtime supertype introspection: a rule asking the registry
/// for "every step that can do X" matches against these instead of a type
/// hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepCapability(pub &'static str);

impl fmt::Display for StepCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rule-owned accumulator or partial-result holder kept in the
/// [`ChangePropagationStepRegistry`](crate::ChangePropagationStepRegistry)
/// for the duration of one analysis run.
///
/// Steps are addressable by their concrete type and, via
/// [`capabilities`](Self::capabilities), by what they can do.
pub trait PropagationStep: Any + Send {
    fn capabilities(&self) -> &[StepCapability] {
        &[]
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
