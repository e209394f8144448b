use crate::{CausingEntityMapping, ModelElement};

/// Persisted modification record owned by the external analysis.
///
/// The analysis supplies a fresh, empty mark object; this crate only fills
/// it in.
pub trait ModificationMark<A, C> {
    fn set_tool_derived(&mut self, tool_derived: bool);

    fn set_affected_element(&mut self, element: A);

    fn add_causing_elements(&mut self, elements: impl IntoIterator<Item = C>);
}

/// Turns one mapping into one persisted mark: flags it as tool-derived,
/// records the affected element and appends all causing entities.
///
/// Pure with respect to the mapping: calling it twice with two fresh marks
/// produces identical marks and leaves the mapping untouched.
pub fn create_modification_mark<A, C, M>(mapping: &CausingEntityMapping<A, C>, mut mark: M) -> M
where
    A: Clone,
    C: ModelElement,
    M: ModificationMark<A, C>,
{
    mark.set_tool_derived(true);
    mark.set_affected_element(mapping.affected_element().clone());
    mark.add_causing_elements(mapping.causing_entities().iter().cloned());
    mark
}
