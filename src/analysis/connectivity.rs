use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::domain::{ElementId, System};

/// A requirement whose `derivedFrom` reference resolves to no known
/// element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingDerivation {
    /// Id of the requirement carrying the reference.
    pub requirement_id: ElementId,
    /// The parent id that could not be resolved.
    pub missing_parent: ElementId,
}

/// Interface endpoint validation and orphan detection for a tree.
///
/// Produced by [`analyze_connectivity`]. A dangling reference is an
/// expected, analyzable condition in an in-progress specification —
/// it lands in [`invalid_interfaces`](Self::invalid_interfaces) or
/// [`dangling_derivations`](Self::dangling_derivations), never in an
/// error.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectivityReport {
    /// Total number of interfaces declared anywhere in the tree.
    pub total_interfaces: usize,
    /// Ids of interfaces whose source and target both resolve to
    /// known elements.
    pub valid_interfaces: Vec<ElementId>,
    /// Ids of interfaces with at least one unresolvable endpoint.
    pub invalid_interfaces: Vec<ElementId>,
    /// Known elements touched by no interface as source or target,
    /// each id reported once, in tree walk order.
    pub orphaned_elements: Vec<ElementId>,
    /// Requirements whose `derivedFrom` parent matches no requirement
    /// id in the tree.
    pub dangling_derivations: Vec<DanglingDerivation>,
    /// `valid / total * 100`, or `100.0` when no interfaces are
    /// declared (vacuously fully connected).
    pub connectivity_score: f64,
}

/// Validates interface endpoints and finds orphaned elements.
///
/// The set of known ids is every system, component, and interface id
/// in the tree, resolved through a lookup table built here — elements
/// never hold direct references to one another. Duplicate ids
/// collapse to a single known id.
#[instrument(skip(system), fields(system = %system.id))]
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn analyze_connectivity(system: &System) -> ConnectivityReport {
    let elements = system.elements();

    // Lookup table of every known id; duplicates collapse.
    let known: HashSet<&ElementId> = elements.iter().map(|element| element.id()).collect();

    let mut valid_interfaces = Vec::new();
    let mut invalid_interfaces = Vec::new();
    let mut touched: HashSet<&ElementId> = HashSet::new();

    for interface in system.all_interfaces() {
        if known.contains(&interface.source) && known.contains(&interface.target) {
            valid_interfaces.push(interface.id.clone());
        } else {
            invalid_interfaces.push(interface.id.clone());
        }
        touched.insert(&interface.source);
        touched.insert(&interface.target);
    }

    let mut seen: HashSet<&ElementId> = HashSet::new();
    let orphaned_elements: Vec<ElementId> = elements
        .iter()
        .map(|element| element.id())
        .filter(|id| seen.insert(*id) && !touched.contains(*id))
        .cloned()
        .collect();

    // Derivation parents are requirements, so they resolve against
    // the requirement id set rather than the element id set.
    let known_requirements: HashSet<&ElementId> = system
        .all_requirements()
        .map(|requirement| &requirement.id)
        .collect();

    let dangling_derivations: Vec<DanglingDerivation> = system
        .all_requirements()
        .filter_map(|requirement| {
            let parent = requirement.derived_from.as_ref()?;
            if known_requirements.contains(parent) {
                None
            } else {
                Some(DanglingDerivation {
                    requirement_id: requirement.id.clone(),
                    missing_parent: parent.clone(),
                })
            }
        })
        .collect();

    let total_interfaces = valid_interfaces.len() + invalid_interfaces.len();
    let connectivity_score = if total_interfaces == 0 {
        100.0
    } else {
        valid_interfaces.len() as f64 / total_interfaces as f64 * 100.0
    };

    debug!(
        total_interfaces,
        valid = valid_interfaces.len(),
        orphans = orphaned_elements.len(),
        connectivity_score
    );

    ConnectivityReport {
        total_interfaces,
        valid_interfaces,
        invalid_interfaces,
        orphaned_elements,
        dangling_derivations,
        connectivity_score,
    }
}
