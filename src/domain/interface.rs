use std::{fmt, str::FromStr};

use crate::domain::{ElementId, Requirement, UnknownVariantError};

/// A directed connection between two elements of the model.
///
/// The source produces, the target consumes. Both endpoints are weak
/// references by [`ElementId`] into the enclosing [`System`] tree;
/// neither is guaranteed to resolve. Referential integrity is a
/// property to be *checked* (see
/// [`analyze_connectivity`](crate::analysis::analyze_connectivity)),
/// not assumed.
///
/// [`System`]: crate::domain::System
#[derive(Debug, Clone, PartialEq)]
pub struct Interface {
    /// Identifier of the interface.
    pub id: ElementId,
    /// Short name of the interface.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Identifier of the producing element.
    pub source: ElementId,
    /// Identifier of the consuming element.
    pub target: ElementId,
    /// The physical or logical nature of the connection.
    pub interface_type: InterfaceType,
    /// Requirements allocated to the interface itself.
    pub requirements: Vec<Requirement>,
}

impl Interface {
    /// Create an interface with no description and no requirements.
    pub fn new(
        id: impl Into<ElementId>,
        name: impl Into<String>,
        source: impl Into<ElementId>,
        target: impl Into<ElementId>,
        interface_type: InterfaceType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            source: source.into(),
            target: target.into(),
            interface_type,
            requirements: Vec::new(),
        }
    }
}

/// The nature of an [`Interface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterfaceType {
    /// Mechanical attachment or load path.
    Physical,
    /// Electrical power or signal.
    Electrical,
    /// Digital data exchange.
    Data,
    /// Command and control.
    Control,
    /// Heat transfer.
    Thermal,
    /// Optical path.
    Optical,
}

impl InterfaceType {
    /// All interface types, in declaration order.
    ///
    /// This is the fixed registry used for diversity scoring; it is a
    /// compile-time constant, never discovered at runtime.
    pub const ALL: [Self; 6] = [
        Self::Physical,
        Self::Electrical,
        Self::Data,
        Self::Control,
        Self::Thermal,
        Self::Optical,
    ];

    /// The literal name of the variant, as serialized.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Physical => "Physical",
            Self::Electrical => "Electrical",
            Self::Data => "Data",
            Self::Control => "Control",
            Self::Thermal => "Thermal",
            Self::Optical => "Optical",
        }
    }
}

impl fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterfaceType {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Physical" => Ok(Self::Physical),
            "Electrical" => Ok(Self::Electrical),
            "Data" => Ok(Self::Data),
            "Control" => Ok(Self::Control),
            "Thermal" => Ok(Self::Thermal),
            "Optical" => Ok(Self::Optical),
            _ => Err(UnknownVariantError::new("interface type", s)),
        }
    }
}
