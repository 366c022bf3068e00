use tracing::{debug, instrument};

use crate::domain::{ElementId, RequirementType, System};

/// A detected conflict between two requirements.
///
/// Pairs are recorded in canonical order — ids sorted ascending — so
/// each unordered pair yields exactly one record regardless of the
/// order the requirements were encountered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// The lexicographically smaller requirement id.
    pub first: ElementId,
    /// The lexicographically larger requirement id.
    pub second: ElementId,
    /// The classification both requirements share.
    pub requirement_type: RequirementType,
}

/// Result of a pairwise conflict scan.
///
/// Produced by [`detect_conflicts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictReport {
    /// Number of requirement occurrences scanned (a requirement
    /// allocated to several elements is counted once per
    /// allocation).
    pub total_requirements: usize,
    /// Detected conflicts, sorted by pair then type, deduplicated.
    pub conflicts: Vec<Conflict>,
}

/// Scans every requirement in a tree for pairwise conflicts.
///
/// Two requirements conflict when both carry `Critical` priority and
/// share the same requirement type — competing non-negotiable demands
/// on the same concern. The scan is all-pairs, excluding pairs with
/// identical ids, so complexity is quadratic in requirement count;
/// acceptable at specification scale (tens to low hundreds of
/// requirements).
#[instrument(skip(system), fields(system = %system.id))]
#[must_use]
pub fn detect_conflicts(system: &System) -> ConflictReport {
    use crate::domain::Priority;

    let requirements: Vec<_> = system.all_requirements().collect();
    let total_requirements = requirements.len();

    let mut conflicts = Vec::new();
    for (index, left) in requirements.iter().enumerate() {
        for right in &requirements[index + 1..] {
            if left.id == right.id {
                continue;
            }
            if left.priority == Priority::Critical
                && right.priority == Priority::Critical
                && left.requirement_type == right.requirement_type
            {
                let (first, second) = if left.id <= right.id {
                    (left.id.clone(), right.id.clone())
                } else {
                    (right.id.clone(), left.id.clone())
                };
                conflicts.push(Conflict {
                    first,
                    second,
                    requirement_type: left.requirement_type,
                });
            }
        }
    }

    // Canonical ordering makes repeated allocations of the same
    // requirement collapse to one record here.
    conflicts.sort_by(|a, b| {
        (a.first.as_str(), a.second.as_str(), a.requirement_type.as_str()).cmp(&(
            b.first.as_str(),
            b.second.as_str(),
            b.requirement_type.as_str(),
        ))
    });
    conflicts.dedup();

    debug!(total_requirements, conflicts = conflicts.len());

    ConflictReport {
        total_requirements,
        conflicts,
    }
}
