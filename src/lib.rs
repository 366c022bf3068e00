//! Typed modeling and analysis of engineered systems.
//!
//! A [`System`] is a recursive, typed document: subsystems, leaf
//! [`Component`]s, directed [`Interface`]s, and [`Requirement`]s with
//! quantified [`Constraint`]s. The tree is owned by value and
//! immutable once built; cross-references between elements are weak
//! references by [`ElementId`] that may dangle or duplicate.
//!
//! Two layers sit on top of the entity model:
//!
//! - [`codec`] — lossless JSON serialization with a strict round-trip
//!   contract and path-aware decode errors.
//! - [`analysis`] — read-only queries: requirement coverage,
//!   traceability, interface connectivity, dependency graphs, and
//!   conflict detection. Dangling references are reported as data,
//!   never as errors.
//!
//! Everything is synchronous and pure; analyses may run concurrently
//! over the same shared tree without coordination.

pub mod domain;
pub use domain::{
    Component, Constraint, ConstraintType, ElementId, ElementKind, ElementRef, Interface,
    InterfaceType, Priority, PropertyValue, Requirement, RequirementType, System,
    UnknownVariantError, Verification,
};

/// JSON serialization for system models.
pub mod codec;
pub use codec::{decode, decode_value, encode, encode_string, DecodeError};

/// Read-only analysis queries over a system model.
pub mod analysis;
pub use analysis::{
    analyze_connectivity, analyze_coverage, analyze_interface_types, build_traceability_matrix,
    collect_all_elements, detect_conflicts, ConflictReport, ConnectivityReport, CoverageReport,
    DependencyGraph, InterfaceTypeReport, TraceabilityMatrix,
};
