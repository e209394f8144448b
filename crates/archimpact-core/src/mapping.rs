use crate::ModelElement;
use tracing::trace;

/// Maps one affected element to the entities responsible for it being
/// marked as affected.
///
/// The causing set is backed by a `Vec` on purpose: membership is decided
/// by the model's structural equality, which need not agree with `Eq` or
/// `Hash`, so a hash-based set would admit duplicates. Insertion through
/// [`add_causing_entity_distinct`](Self::add_causing_entity_distinct)
/// compares pairwise against every existing member.
#[derive(Debug, Clone)]
pub struct CausingEntityMapping<A, C> {
    affected_element: A,
    causing_entities: Vec<C>,
}

impl<A, C: ModelElement> CausingEntityMapping<A, C> {
    pub fn new(affected_element: A, causing_entities: Vec<C>) -> Self {
        Self {
            affected_element,
            causing_entities,
        }
    }

    /// Convenience constructor for a single causing entity.
    pub fn from_single(affected_element: A, causing_entity: C) -> Self {
        Self::new(affected_element, vec![causing_entity])
    }

    pub fn without_causes(affected_element: A) -> Self {
        Self::new(affected_element, Vec::new())
    }

    /// Re-tags another mapping's causing set under a different affected
    /// element, e.g. when a lookup result is narrowed to the model's
    /// concrete type.
    pub fn rederived<B>(affected_element: A, other: &CausingEntityMapping<B, C>) -> Self {
        Self::new(affected_element, other.causing_entities.clone())
    }

    pub fn affected_element(&self) -> &A {
        &self.affected_element
    }

    pub fn causing_entities(&self) -> &[C] {
        &self.causing_entities
    }

    /// Live access to the causing set; mutations are visible to the mapping.
    pub fn causing_entities_mut(&mut self) -> &mut Vec<C> {
        &mut self.causing_entities
    }

    /// Inserts `entity` unless a structurally-equal entity is already
    /// present.
    pub fn add_causing_entity_distinct(&mut self, entity: C) {
        for existing in &self.causing_entities {
            if existing.structurally_equals(&entity) {
                trace!(entity = ?entity, "causing entity already present, skipping");
                return;
            }
        }
        self.causing_entities.push(entity);
    }

    pub fn into_parts(self) -> (A, Vec<C>) {
        (self.affected_element, self.causing_entities)
    }
}
