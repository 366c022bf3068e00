use std::fmt;

use crate::domain::{Component, Interface, Requirement, System};

/// An opaque identifier for an element of the model.
///
/// Identifiers are plain strings chosen by the caller. The model does
/// *not* enforce uniqueness — two elements anywhere in a tree may share
/// an id, and references (interface endpoints, requirement derivation)
/// may dangle. Analysis routines resolve ids through lookup tables
/// built at analysis time and report unresolved or duplicated ids as
/// data rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(String);

impl ElementId {
    /// Create an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for ElementId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The kind of a model element that can carry allocated requirements.
///
/// Used in flattened element listings and traceability links to record
/// what sort of node an [`ElementId`] referred to at analysis time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A [`System`] node (root or subsystem).
    System,
    /// A leaf [`Component`].
    Component,
    /// A directed [`Interface`].
    Interface,
}

impl ElementKind {
    /// The literal name of the kind, as used in serialized reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Component => "Component",
            Self::Interface => "Interface",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed view of a single element in a [`System`] tree.
///
/// Produced by [`System::elements`]. The view unifies the three element
/// kinds behind common accessors so analysis code can treat the
/// flattened tree uniformly.
#[derive(Debug, Clone, Copy)]
pub enum ElementRef<'a> {
    /// A system node.
    System(&'a System),
    /// A component node.
    Component(&'a Component),
    /// An interface node.
    Interface(&'a Interface),
}

impl<'a> ElementRef<'a> {
    /// The element's identifier.
    #[must_use]
    pub const fn id(&self) -> &'a ElementId {
        match self {
            Self::System(system) => &system.id,
            Self::Component(component) => &component.id,
            Self::Interface(interface) => &interface.id,
        }
    }

    /// The element's human-readable name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        match self {
            Self::System(system) => system.name.as_str(),
            Self::Component(component) => component.name.as_str(),
            Self::Interface(interface) => interface.name.as_str(),
        }
    }

    /// Which kind of element this view refers to.
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::System(_) => ElementKind::System,
            Self::Component(_) => ElementKind::Component,
            Self::Interface(_) => ElementKind::Interface,
        }
    }

    /// The requirements allocated directly to this element.
    #[must_use]
    pub fn requirements(&self) -> &'a [Requirement] {
        match self {
            Self::System(system) => &system.requirements,
            Self::Component(component) => &component.requirements,
            Self::Interface(interface) => &interface.requirements,
        }
    }

    /// Whether at least one requirement is allocated to this element.
    #[must_use]
    pub fn has_requirements(&self) -> bool {
        !self.requirements().is_empty()
    }
}
