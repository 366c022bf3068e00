use std::{fmt, str::FromStr};

use crate::domain::{ElementId, PropertyValue, UnknownVariantError};

/// A quantified constraint attached to a requirement.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Identifier of the constraint.
    pub id: ElementId,
    /// Short name of the constraint.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// The engineering domain the constraint belongs to.
    pub constraint_type: ConstraintType,
    /// The constrained value, typically a unit-tagged number.
    pub value: PropertyValue,
}

impl Constraint {
    /// Create a constraint.
    pub fn new(
        id: impl Into<ElementId>,
        name: impl Into<String>,
        description: impl Into<String>,
        constraint_type: ConstraintType,
        value: PropertyValue,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            constraint_type,
            value,
        }
    }
}

/// The engineering domain of a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintType {
    /// Mass budget.
    Mass,
    /// Power budget.
    Power,
    /// Cost budget.
    Cost,
    /// Physical envelope.
    Size,
    /// Thermal limits.
    Temperature,
    /// Regulatory or compliance obligation.
    Regulatory,
}

impl ConstraintType {
    /// All constraint types, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Mass,
        Self::Power,
        Self::Cost,
        Self::Size,
        Self::Temperature,
        Self::Regulatory,
    ];

    /// The literal name of the variant, as serialized.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mass => "Mass",
            Self::Power => "Power",
            Self::Cost => "Cost",
            Self::Size => "Size",
            Self::Temperature => "Temperature",
            Self::Regulatory => "Regulatory",
        }
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConstraintType {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Mass" => Ok(Self::Mass),
            "Power" => Ok(Self::Power),
            "Cost" => Ok(Self::Cost),
            "Size" => Ok(Self::Size),
            "Temperature" => Ok(Self::Temperature),
            "Regulatory" => Ok(Self::Regulatory),
            _ => Err(UnknownVariantError::new("constraint type", s)),
        }
    }
}

/// A single requirement levied on an element of the model.
#[derive(Debug, Clone, PartialEq)]
pub struct Requirement {
    /// Identifier of the requirement.
    pub id: ElementId,
    /// Short name of the requirement.
    pub name: String,
    /// The "shall" statement.
    pub description: String,
    /// Classification of the requirement.
    pub requirement_type: RequirementType,
    /// How important satisfying the requirement is.
    pub priority: Priority,
    /// How satisfaction will be verified.
    pub verification: Verification,
    /// Constraints quantifying the requirement.
    pub constraints: Vec<Constraint>,
    /// Identifier of the parent requirement this one was derived
    /// from, if any. A weak reference: it may dangle.
    pub derived_from: Option<ElementId>,
}

impl Requirement {
    /// Create a requirement with no constraints and no parent.
    pub fn new(
        id: impl Into<ElementId>,
        name: impl Into<String>,
        description: impl Into<String>,
        requirement_type: RequirementType,
        priority: Priority,
        verification: Verification,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            requirement_type,
            priority,
            verification,
            constraints: Vec::new(),
            derived_from: None,
        }
    }
}

/// Classification of a [`Requirement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequirementType {
    /// What the system shall do.
    Functional,
    /// How well it shall do it.
    Performance,
    /// Obligations on an interface.
    Interface,
    /// Constraints on the design itself.
    Design,
    /// Obligations during operation.
    Operational,
    /// Safety obligations.
    Safety,
    /// Security obligations.
    Security,
}

impl RequirementType {
    /// All requirement types, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Functional,
        Self::Performance,
        Self::Interface,
        Self::Design,
        Self::Operational,
        Self::Safety,
        Self::Security,
    ];

    /// The literal name of the variant, as serialized.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Functional => "Functional",
            Self::Performance => "Performance",
            Self::Interface => "Interface",
            Self::Design => "Design",
            Self::Operational => "Operational",
            Self::Safety => "Safety",
            Self::Security => "Security",
        }
    }
}

impl fmt::Display for RequirementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequirementType {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Functional" => Ok(Self::Functional),
            "Performance" => Ok(Self::Performance),
            "Interface" => Ok(Self::Interface),
            "Design" => Ok(Self::Design),
            "Operational" => Ok(Self::Operational),
            "Safety" => Ok(Self::Safety),
            "Security" => Ok(Self::Security),
            _ => Err(UnknownVariantError::new("requirement type", s)),
        }
    }
}

/// How important satisfying a [`Requirement`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    /// Mission fails without it.
    Critical,
    /// Strongly needed.
    High,
    /// Nominal.
    Medium,
    /// Nice to have.
    Low,
}

impl Priority {
    /// All priorities, highest first.
    pub const ALL: [Self; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    /// The literal name of the variant, as serialized.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Critical" => Ok(Self::Critical),
            "High" => Ok(Self::High),
            "Medium" => Ok(Self::Medium),
            "Low" => Ok(Self::Low),
            _ => Err(UnknownVariantError::new("priority", s)),
        }
    }
}

/// How satisfaction of a [`Requirement`] will be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verification {
    /// Direct test.
    Test,
    /// Analysis or simulation.
    Analysis,
    /// Inspection of the design.
    Inspection,
    /// End-to-end demonstration.
    Demonstration,
}

impl Verification {
    /// All verification methods, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Test,
        Self::Analysis,
        Self::Inspection,
        Self::Demonstration,
    ];

    /// The literal name of the variant, as serialized.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Test => "Test",
            Self::Analysis => "Analysis",
            Self::Inspection => "Inspection",
            Self::Demonstration => "Demonstration",
        }
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verification {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Test" => Ok(Self::Test),
            "Analysis" => Ok(Self::Analysis),
            "Inspection" => Ok(Self::Inspection),
            "Demonstration" => Ok(Self::Demonstration),
            _ => Err(UnknownVariantError::new("verification method", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_names_round_trip_through_from_str() {
        for rt in RequirementType::ALL {
            assert_eq!(rt.as_str().parse::<RequirementType>().unwrap(), rt);
        }
        for p in Priority::ALL {
            assert_eq!(p.as_str().parse::<Priority>().unwrap(), p);
        }
        for v in Verification::ALL {
            assert_eq!(v.as_str().parse::<Verification>().unwrap(), v);
        }
        for ct in ConstraintType::ALL {
            assert_eq!(ct.as_str().parse::<ConstraintType>().unwrap(), ct);
        }
    }

    #[test]
    fn unknown_names_are_rejected_with_the_offending_value() {
        let err = "Whimsical".parse::<Priority>().unwrap_err();
        assert_eq!(err.value, "Whimsical");
        assert_eq!(err.to_string(), "unknown priority `Whimsical`");
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("functional".parse::<RequirementType>().is_err());
        assert!("CRITICAL".parse::<Priority>().is_err());
    }

    #[test]
    fn new_requirement_has_no_constraints_or_parent() {
        let req = Requirement::new(
            "R1",
            "Telemetry rate",
            "The system shall downlink telemetry at 1 Hz.",
            RequirementType::Performance,
            Priority::High,
            Verification::Test,
        );
        assert!(req.constraints.is_empty());
        assert!(req.derived_from.is_none());
    }
}
