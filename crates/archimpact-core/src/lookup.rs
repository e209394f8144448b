use crate::element::ModelElement;
use crate::{ArchitectureVersion, CausingEntityMapping, ElementType, ImpactError, Result};
use tracing::debug;

/// Finds all elements assignable to `target_type` that reference one of the
/// `sources`, optionally restricted to references held through a feature
/// named `feature_name`.
///
/// Results are deduplicated by pairwise structural equality: independent
/// traversal paths may hand out distinct handles to "the same" element, so
/// neither identity nor hash membership is trusted here. Order is not
/// significant.
pub fn lookup_backreference<V, I>(
    version: &V,
    target_type: &ElementType,
    feature_name: Option<&str>,
    sources: I,
) -> Result<Vec<V::Element>>
where
    V: ArchitectureVersion,
    I: IntoIterator<Item = V::Element>,
{
    let index = version.cross_references().ok_or_else(|| {
        ImpactError::CapabilityMissing(
            "the architecture version does not expose a reverse-reference index".to_string(),
        )
    })?;

    let mut distinct: Vec<V::Element> = Vec::new();
    for source in sources {
        for reference in index.inverse_references(&source) {
            if !target_type.is_assignable_from(reference.holder.element_type()) {
                continue;
            }
            if let Some(name) = feature_name {
                if reference.feature != name {
                    continue;
                }
            }
            let holder = reference.holder;
            if !distinct.iter().any(|seen| seen.structurally_equals(&holder)) {
                distinct.push(holder);
            }
        }
    }

    debug!(
        target_type = %target_type,
        results = distinct.len(),
        "backreference lookup finished"
    );
    Ok(distinct)
}

/// Applies `lookup_method` to every element currently marked with
/// `source_type` and yields one mapping per (affected element, causing
/// source) pair.
///
/// The stream is lazy and performs no caching or cross-pair merging: if two
/// sources both affect the same element, two mappings are yielded and
/// merging them is the caller's responsibility.
pub fn lookup<'a, V, F>(
    version: &'a V,
    source_type: &ElementType,
    lookup_method: F,
) -> impl Iterator<Item = CausingEntityMapping<V::Element, V::Element>> + 'a
where
    V: ArchitectureVersion,
    F: Fn(&V::Element, &V) -> Vec<V::Element> + 'a,
{
    version
        .marked_elements(source_type)
        .into_iter()
        .flat_map(move |source| {
            lookup_method(&source, version)
                .into_iter()
                .map(move |affected| CausingEntityMapping::from_single(affected, source.clone()))
        })
}
