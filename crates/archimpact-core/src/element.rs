use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub type ElementId = Uuid;

/// Runtime type descriptor for a model element.
///
/// The metamodel binding supplies the flattened supertype closure at
/// construction time, which keeps assignability checks free of any runtime
/// reflection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementType {
    name: String,
    supertypes: Vec<String>,
}

impl ElementType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supertypes: Vec::new(),
        }
    }

    pub fn with_supertypes<I, S>(name: impl Into<String>, supertypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            supertypes: supertypes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn supertypes(&self) -> &[String] {
        &self.supertypes
    }

    /// True if a value typed `other` can be treated as `self`, i.e. `other`
    /// is `self` or declares `self` among its supertypes.
    pub fn is_assignable_from(&self, other: &ElementType) -> bool {
        other.name == self.name || other.supertypes.iter().any(|s| s == &self.name)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Handle to an externally-owned model element.
///
/// The core never creates or destroys elements; implementations are cheap
/// clonable handles into the architecture model. `structurally_equals` is
/// the framework-defined structural-equality relation and must not be
/// assumed to agree with `Eq`/`Hash`; all deduplication in this crate is
/// pairwise through this method.
pub trait ModelElement: Clone + fmt::Debug + Send + Sync {
    fn id(&self) -> ElementId;

    fn element_type(&self) -> &ElementType;

    /// Two elements are structurally equal if their contents match, even
    /// when they are distinct handles produced by independent lookups.
    fn structurally_equals(&self, other: &Self) -> bool;
}
