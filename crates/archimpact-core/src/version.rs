use crate::{ElementType, ModelElement};

/// One entry of the reverse-reference index: `holder` references the queried
/// element through the structural feature named `feature`.
#[derive(Debug, Clone)]
pub struct InverseReference<E> {
    pub holder: E,
    pub feature: String,
}

impl<E> InverseReference<E> {
    pub fn new(holder: E, feature: impl Into<String>) -> Self {
        Self {
            holder,
            feature: feature.into(),
        }
    }
}

/// Reverse-reference capability of an architecture version.
pub trait CrossReferenceIndex<E: ModelElement> {
    /// All (holder, feature) pairs whose holder references `target`.
    fn inverse_references(&self, target: &E) -> Vec<InverseReference<E>>;
}

/// The versioned architecture model, an external collaborator.
///
/// The core needs two capabilities from it: enumeration of elements the
/// driving analysis has marked with a role, and optionally a
/// reverse-reference index. A version without the index returns `None`;
/// lookups that need it surface that as `ImpactError::CapabilityMissing`
/// rather than degrading to an empty result.
pub trait ArchitectureVersion {
    type Element: ModelElement;

    fn marked_elements(&self, role: &ElementType) -> Vec<Self::Element>;

    fn cross_references(&self) -> Option<&dyn CrossReferenceIndex<Self::Element>>;
}
