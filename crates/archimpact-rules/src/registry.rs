use crate::{PropagationStep, StepCapability};
use std::any::TypeId;
use std::collections::HashMap;

/// Heterogeneous typed container holding at most one step instance per
/// concrete step type.
///
/// Created once per analysis run by the rule provider, read and mutated by
/// rules throughout the run, discarded at run end. Not synchronized; see
/// the crate docs on the single-threaded execution model.
#[derive(Default)]
pub struct ChangePropagationStepRegistry {
    steps: HashMap<TypeId, Box<dyn PropagationStep>>,
}

impl ChangePropagationStepRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `step` keyed by its concrete type, replacing any previous
    /// instance of that type.
    pub fn register<T: PropagationStep>(&mut self, step: T) {
        self.steps.insert(TypeId::of::<T>(), Box::new(step));
    }

    /// Exact-type lookup.
    pub fn get<T: PropagationStep>(&self) -> Option<&T> {
        self.steps
            .get(&TypeId::of::<T>())
            .map(|step| downcast::<T>(step.as_any()))
    }

    pub fn get_mut<T: PropagationStep>(&mut self) -> Option<&mut T> {
        self.steps
            .get_mut(&TypeId::of::<T>())
            .map(|step| downcast_mut::<T>(step.as_any_mut()))
    }

    /// Returns the registered step of type `T`, inserting the one produced
    /// by `init` first if none exists yet.
    pub fn get_or_insert_with<T: PropagationStep>(&mut self, init: impl FnOnce() -> T) -> &mut T {
        let entry = self
            .steps
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(init()));
        downcast_mut::<T>(entry.as_any_mut())
    }

    /// Polymorphic retrieval: every registered step declaring `capability`.
    /// Linear scan, order unspecified.
    pub fn with_capability(&self, capability: StepCapability) -> Vec<&dyn PropagationStep> {
        self.steps
            .values()
            .filter(|step| step.capabilities().contains(&capability))
            .map(|step| step.as_ref())
            .collect()
    }

    /// Every registered instance exactly once; order unspecified.
    pub fn iter(&self) -> impl Iterator<Item = &dyn PropagationStep> {
        self.steps.values().map(|step| step.as_ref())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

// The map is keyed by the value's own TypeId, so a failing downcast means
// the registry invariant was broken somewhere, a programming error, not a
// recoverable condition.
fn downcast<T: PropagationStep>(step: &dyn std::any::Any) -> &T {
    step.downcast_ref::<T>()
        .expect("step registry key and value type diverged")
}

fn downcast_mut<T: PropagationStep>(step: &mut dyn std::any::Any) -> &mut T {
    step.downcast_mut::<T>()
        .expect("step registry key and value type diverged")
}
