use tracing::{debug, instrument};

use crate::domain::{InterfaceType, System};

/// Distribution of interface types across a tree.
///
/// Produced by [`analyze_interface_types`].
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceTypeReport {
    /// Total number of interfaces declared anywhere in the tree.
    pub total_interfaces: usize,
    /// Count per interface type actually used, in registry
    /// ([`InterfaceType::ALL`]) order. Unused types are omitted.
    pub counts: Vec<(InterfaceType, usize)>,
    /// The most-used type, or `None` when no interfaces are declared.
    /// Ties break to the type listed first in the registry.
    pub most_common: Option<InterfaceType>,
    /// The least-used type among those used at all, or `None` when no
    /// interfaces are declared. Ties break to the type listed first
    /// in the registry.
    pub least_common: Option<InterfaceType>,
    /// `distinct types used / total possible types * 100`.
    pub diversity_score: f64,
}

/// Groups a tree's interfaces by type and scores type diversity.
///
/// The denominator of the diversity score is the fixed registry
/// [`InterfaceType::ALL`], a compile-time constant — never discovered
/// at runtime.
#[instrument(skip(system), fields(system = %system.id))]
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn analyze_interface_types(system: &System) -> InterfaceTypeReport {
    let mut per_type = [0_usize; InterfaceType::ALL.len()];
    let mut total_interfaces = 0;

    for interface in system.all_interfaces() {
        per_type[slot(interface.interface_type)] += 1;
        total_interfaces += 1;
    }

    let counts: Vec<(InterfaceType, usize)> = InterfaceType::ALL
        .iter()
        .zip(per_type)
        .filter(|&(_, count)| count > 0)
        .map(|(&ty, count)| (ty, count))
        .collect();

    // Ties break to the first entry in registry order: `max_by`
    // would keep the last equal maximum, so Equal maps to Greater to
    // retain the earlier entry; `min_by_key` already keeps the first
    // equal minimum.
    let most_common = counts
        .iter()
        .max_by(|a, b| a.1.cmp(&b.1).then(std::cmp::Ordering::Greater))
        .map(|&(ty, _)| ty);
    let least_common = counts
        .iter()
        .min_by_key(|&&(_, count)| count)
        .map(|&(ty, _)| ty);

    let diversity_score = counts.len() as f64 / InterfaceType::ALL.len() as f64 * 100.0;

    debug!(total_interfaces, distinct = counts.len(), diversity_score);

    InterfaceTypeReport {
        total_interfaces,
        counts,
        most_common,
        least_common,
        diversity_score,
    }
}

/// Index of a type in [`InterfaceType::ALL`]. Exhaustive, so a new
/// variant breaks this at compile time rather than at scoring time.
const fn slot(ty: InterfaceType) -> usize {
    match ty {
        InterfaceType::Physical => 0,
        InterfaceType::Electrical => 1,
        InterfaceType::Data => 2,
        InterfaceType::Control => 3,
        InterfaceType::Thermal => 4,
        InterfaceType::Optical => 5,
    }
}
