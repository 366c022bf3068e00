use tracing::{debug, instrument};

use crate::domain::{ElementId, ElementRef, System};

/// Requirement allocation coverage over a system tree.
///
/// Produced by [`analyze_coverage`]. Coverage is the fraction of
/// elements (systems, components, and interfaces) that carry at least
/// one allocated requirement.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    /// Total number of elements reachable from the root, root
    /// included.
    pub total_elements: usize,
    /// Number of elements with at least one allocated requirement.
    pub covered_elements: usize,
    /// Ids of elements with no allocated requirement, in tree walk
    /// order.
    pub uncovered_elements: Vec<ElementId>,
    /// `covered / total * 100`, or `0.0` for an empty tree.
    pub coverage_percentage: f64,
}

/// Flattens a system tree into every reachable element, root first.
///
/// Equivalent to [`System::elements`]; exposed here so analysis
/// consumers have the full flattened listing alongside the reports
/// that summarize it.
#[must_use]
pub fn collect_all_elements(system: &System) -> Vec<ElementRef<'_>> {
    system.elements()
}

/// Computes requirement allocation coverage for a system tree.
///
/// Partitions the flattened element list into covered (≥ 1 allocated
/// requirement) and uncovered, and reports the coverage percentage.
/// An empty tree yields a percentage of exactly `0.0`.
#[instrument(skip(system), fields(system = %system.id))]
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn analyze_coverage(system: &System) -> CoverageReport {
    let elements = collect_all_elements(system);
    let total_elements = elements.len();

    let uncovered_elements: Vec<ElementId> = elements
        .iter()
        .filter(|element| !element.has_requirements())
        .map(|element| element.id().clone())
        .collect();

    let covered_elements = total_elements - uncovered_elements.len();
    let coverage_percentage = if total_elements == 0 {
        0.0
    } else {
        covered_elements as f64 / total_elements as f64 * 100.0
    };

    debug!(total_elements, covered_elements, coverage_percentage);

    CoverageReport {
        total_elements,
        covered_elements,
        uncovered_elements,
        coverage_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Component, Priority, Requirement, RequirementType, Verification};

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

    /// The scenario from the module contract: a root system holding a
    /// covered component and an orphan component counts three
    /// elements, one covered.
    #[test]
    fn root_and_uncovered_component_are_reported() {
        let mut root = System::new("SYS-1", "Root");

        let mut covered = Component::new("C1", "Covered");
        covered.requirements.push(requirement("R1"));
        root.components.push(covered);
        root.components.push(Component::new("C2", "Orphan"));

        let report = analyze_coverage(&root);

        assert_eq!(report.total_elements, 3);
        assert_eq!(report.covered_elements, 1);
        assert_eq!(
            report.uncovered_elements,
            vec![ElementId::new("SYS-1"), ElementId::new("C2")]
        );
        assert!((report.coverage_percentage - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn fully_covered_tree_scores_exactly_one_hundred() {
        let mut root = System::new("SYS-1", "Root");
        root.requirements.push(requirement("R1"));

        let mut component = Component::new("C1", "Comp");
        component.requirements.push(requirement("R2"));
        root.components.push(component);

        let report = analyze_coverage(&root);
        assert_eq!(report.covered_elements, report.total_elements);
        assert!(report.uncovered_elements.is_empty());
        assert!((report.coverage_percentage - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn coverage_is_bounded() {
        let mut root = System::new("SYS-1", "Root");
        root.subsystems.push(System::new("SUB-1", "Sub"));
        root.components.push(Component::new("C1", "Comp"));

        let report = analyze_coverage(&root);
        assert!(report.coverage_percentage >= 0.0);
        assert!(report.coverage_percentage <= 100.0);
    }

    #[test]
    fn bare_root_has_zero_coverage() {
        // A lone uncovered root: 0 of 1 elements covered.
        let report = analyze_coverage(&System::new("SYS-1", "Root"));
        assert_eq!(report.total_elements, 1);
        assert_eq!(report.covered_elements, 0);
        assert!((report.coverage_percentage - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn subsystem_elements_are_counted() {
        let mut sub = System::new("SUB-1", "Sub");
        sub.components.push(Component::new("C1", "Nested"));
        let mut root = System::new("SYS-1", "Root");
        root.subsystems.push(sub);

        let report = analyze_coverage(&root);
        assert_eq!(report.total_elements, 3);
    }
}
