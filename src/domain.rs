//! Domain model for engineered systems.
//!
//! This module contains the core entity types: the recursive
//! [`System`] tree, its [`Component`]s, [`Interface`]s,
//! [`Requirement`]s and [`Constraint`]s, and the tagged
//! [`PropertyValue`] type used for element properties.
//!
//! All entities are plain immutable data: "mutation" is whole-tree
//! reconstruction by the caller. Cross-references between elements
//! ([`Interface::source`], [`Interface::target`],
//! [`Requirement::derived_from`]) are weak references by
//! [`ElementId`] and are not guaranteed to resolve; the analysis
//! layer reports dangling references as data rather than failing.

/// Element identifiers and borrowed element views.
pub mod element;
pub use element::{ElementId, ElementKind, ElementRef};

/// The tagged property value type.
pub mod property;
pub use property::PropertyValue;

/// Requirements, constraints, and their classification enums.
pub mod requirement;
pub use requirement::{
    Constraint, ConstraintType, Priority, Requirement, RequirementType, Verification,
};

/// Directed interfaces between elements.
pub mod interface;
pub use interface::{Interface, InterfaceType};

/// The recursive system tree and its leaf components.
pub mod system;
pub use system::{Component, System};

/// Error returned when parsing an enum from its literal name fails.
///
/// Every classification enum in the model is a closed set whose
/// variants serialize as their literal name string; this error names
/// both the enum and the offending value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownVariantError {
    /// Human-readable name of the enum being parsed.
    pub kind: &'static str,
    /// The unrecognised input string.
    pub value: String,
}

impl UnknownVariantError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
