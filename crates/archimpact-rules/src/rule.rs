use crate::ChangePropagationStepRegistry;
use archimpact_core::{ArchitectureVersion, CausingEntityMapping, Result};

/// Analysis-side sink for the causal pairs a rule discovers.
///
/// The driving analysis owns the persistent marking model; this seam only
/// hands it (affected element, causing entities) mappings, typically
/// converted to marks with
/// [`create_modification_mark`](archimpact_core::create_modification_mark).
pub trait PropagationAnalysis<V: ArchitectureVersion> {
    fn record_mapping(&mut self, mapping: CausingEntityMapping<V::Element, V::Element>);
}

/// One unit of propagation logic.
///
/// Rules are stateless or run-scoped; anything a rule needs to carry across
/// invocations lives in a step it registers into the registry. `name` is
/// the rule's stable identity; registering two rules with the same name
/// is a conflict.
pub trait Rule<V: ArchitectureVersion> {
    fn name(&self) -> &str;

    fn apply(
        &self,
        version: &V,
        registry: &mut ChangePropagationStepRegistry,
        analysis: &mut dyn PropagationAnalysis<V>,
    ) -> Result<()>;
}
