//! In-memory model fixture shared by the unit tests.

use crate::{
    ArchitectureVersion, CrossReferenceIndex, ElementId, ElementType, InverseReference,
    ModelElement,
};
use std::collections::HashMap;
use uuid::Uuid;

/// Minimal stand-in for an externally-owned model element. Structural
/// equality compares type and name, deliberately ignoring the handle id.
#[derive(Debug, Clone)]
pub struct TestElement {
    id: ElementId,
    ty: ElementType,
    name: String,
}

impl TestElement {
    pub fn new(ty: &str, name: &str) -> Self {
        Self::with_type(ElementType::new(ty), name)
    }

    pub fn with_type(ty: ElementType, name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            ty,
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ModelElement for TestElement {
    fn id(&self) -> ElementId {
        self.id
    }

    fn element_type(&self) -> &ElementType {
        &self.ty
    }

    fn structurally_equals(&self, other: &Self) -> bool {
        self.ty == other.ty && self.name == other.name
    }
}

#[derive(Default)]
pub struct TestIndex {
    // (target id, holder, feature name)
    entries: Vec<(ElementId, TestElement, String)>,
}

impl TestIndex {
    pub fn add_reference(&mut self, target: &TestElement, holder: TestElement, feature: &str) {
        self.entries.push((target.id(), holder, feature.to_string()));
    }
}

impl CrossReferenceIndex<TestElement> for TestIndex {
    fn inverse_references(&self, target: &TestElement) -> Vec<InverseReference<TestElement>> {
        self.entries
            .iter()
            .filter(|(id, _, _)| *id == target.id())
            .map(|(_, holder, feature)| InverseReference::new(holder.clone(), feature.clone()))
            .collect()
    }
}

#[derive(Default)]
pub struct TestVersion {
    marked: HashMap<String, Vec<TestElement>>,
    index: Option<TestIndex>,
}

impl TestVersion {
    pub fn mark(&mut self, role: &ElementType, element: TestElement) {
        self.marked
            .entry(role.name().to_string())
            .or_default()
            .push(element);
    }

    pub fn with_index(mut self, index: TestIndex) -> Self {
        self.index = Some(index);
        self
    }
}

impl ArchitectureVersion for TestVersion {
    type Element = TestElement;

    fn marked_elements(&self, role: &ElementType) -> Vec<TestElement> {
        self.marked.get(role.name()).cloned().unwrap_or_default()
    }

    fn cross_references(&self) -> Option<&dyn CrossReferenceIndex<TestElement>> {
        self.index
            .as_ref()
            .map(|index| index as &dyn CrossReferenceIndex<TestElement>)
    }
}
