//! Read-only analysis queries over a system model.
//!
//! Every function here takes a borrowed [`System`](crate::domain::System),
//! traverses it without mutation, and returns an owned report value.
//! Dangling or duplicated element ids are expected conditions in an
//! in-progress specification: they are reported as data
//! (invalid interfaces, orphaned elements, uncovered elements), never
//! as errors. No analysis can fail on a structurally valid model.
//!
//! All percentages substitute a defined default when the denominator
//! is zero (coverage 0.0, connectivity 100.0, diversity 0.0) instead
//! of dividing by zero.

/// Requirement allocation coverage.
pub mod coverage;
pub use coverage::{analyze_coverage, collect_all_elements, CoverageReport};

/// Requirement-to-element trace links.
pub mod traceability;
pub use traceability::{build_traceability_matrix, TraceLink, TraceabilityMatrix};

/// Interface endpoint validation and orphan detection.
pub mod connectivity;
pub use connectivity::{analyze_connectivity, ConnectivityReport, DanglingDerivation};

/// The directed dependency graph built from interfaces.
pub mod graph;
pub use graph::{DependencyEdge, DependencyGraph};

/// Interface type distribution and diversity.
pub mod interface_types;
pub use interface_types::{analyze_interface_types, InterfaceTypeReport};

/// Pairwise requirement conflict detection.
pub mod conflicts;
pub use conflicts::{detect_conflicts, Conflict, ConflictReport};
