use tracing::{debug, instrument};

use crate::domain::{ElementId, ElementKind, System};

/// A single link between a requirement and the element it is
/// allocated to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceLink {
    /// Id of the allocated requirement.
    pub requirement_id: ElementId,
    /// Id of the element the requirement is allocated to.
    pub element_id: ElementId,
    /// What kind of element the requirement is allocated to.
    pub element_kind: ElementKind,
}

/// The full set of requirement-to-element trace links for a tree.
///
/// Produced by [`build_traceability_matrix`]. Lookups are linear
/// filters over the link set; at specification scale (tens to low
/// hundreds of requirements) no index structure is warranted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TraceabilityMatrix {
    links: Vec<TraceLink>,
}

impl TraceabilityMatrix {
    /// All trace links, in tree walk order.
    #[must_use]
    pub fn links(&self) -> &[TraceLink] {
        &self.links
    }

    /// Number of trace links.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the matrix holds no links at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Every element a requirement id is allocated to.
    pub fn elements_for(&self, requirement_id: &ElementId) -> impl Iterator<Item = &TraceLink> {
        self.links
            .iter()
            .filter(move |link| &link.requirement_id == requirement_id)
    }

    /// Every requirement allocated to an element id.
    pub fn requirements_for(&self, element_id: &ElementId) -> impl Iterator<Item = &TraceLink> {
        self.links
            .iter()
            .filter(move |link| &link.element_id == element_id)
    }
}

/// Builds the requirement-to-element traceability matrix for a tree.
///
/// Emits one link for every (element, allocated requirement) pair in
/// tree walk order. Elements without requirements contribute no
/// links; duplicated ids are preserved as-is.
#[instrument(skip(system), fields(system = %system.id))]
#[must_use]
pub fn build_traceability_matrix(system: &System) -> TraceabilityMatrix {
    let links: Vec<TraceLink> = system
        .elements()
        .into_iter()
        .flat_map(|element| {
            element.requirements().iter().map(move |requirement| TraceLink {
                requirement_id: requirement.id.clone(),
                element_id: element.id().clone(),
                element_kind: element.kind(),
            })
        })
        .collect();

    debug!(links = links.len());

    TraceabilityMatrix { links }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{
        analysis::analyze_coverage,
        domain::{
            Component, Interface, InterfaceType, Priority, Requirement, RequirementType,
            Verification,
        },
    };

    fn requirement(id: &str) -> Requirement {
        Requirement::new(
            id,
            id,
            "shall",
            RequirementType::Functional,
            Priority::Medium,
            Verification::Test,
        )
    }

    fn sample_tree() -> System {
        let mut root = System::new("SYS-1", "Root");
        root.requirements.push(requirement("R-SYS"));

        let mut component = Component::new("C1", "Comp");
        component.requirements.push(requirement("R1"));
        component.requirements.push(requirement("R2"));
        root.components.push(component);

        let mut interface = Interface::new("IF-1", "Bus", "C1", "C2", InterfaceType::Data);
        interface.requirements.push(requirement("R1"));
        root.interfaces.push(interface);

        root.components.push(Component::new("C2", "Bare"));
        root
    }

    #[test]
    fn one_link_per_allocation() {
        let matrix = build_traceability_matrix(&sample_tree());
        assert_eq!(matrix.len(), 4);
    }

    #[test]
    fn requirement_allocated_twice_traces_to_both_elements() {
        let matrix = build_traceability_matrix(&sample_tree());

        let elements: Vec<_> = matrix
            .elements_for(&ElementId::new("R1"))
            .map(|link| (link.element_id.as_str(), link.element_kind))
            .collect();

        assert_eq!(
            elements,
            vec![
                ("C1", ElementKind::Component),
                ("IF-1", ElementKind::Interface)
            ]
        );
    }

    #[test]
    fn element_lookup_returns_its_allocations() {
        let matrix = build_traceability_matrix(&sample_tree());

        let requirements: Vec<_> = matrix
            .requirements_for(&ElementId::new("C1"))
            .map(|link| link.requirement_id.as_str())
            .collect();
        assert_eq!(requirements, ["R1", "R2"]);

        assert_eq!(matrix.requirements_for(&ElementId::new("C2")).count(), 0);
    }

    /// Distinct element ids in the matrix equal the covered element
    /// count: traceability and coverage agree on who has requirements.
    #[test]
    fn matrix_agrees_with_coverage() {
        let tree = sample_tree();
        let matrix = build_traceability_matrix(&tree);
        let coverage = analyze_coverage(&tree);

        let traced: HashSet<&ElementId> =
            matrix.links().iter().map(|link| &link.element_id).collect();
        assert_eq!(traced.len(), coverage.covered_elements);
    }

    #[test]
    fn empty_tree_yields_empty_matrix() {
        let matrix = build_traceability_matrix(&System::new("S", "S"));
        assert!(matrix.is_empty());
        assert_eq!(matrix.links(), &[]);
    }
}
