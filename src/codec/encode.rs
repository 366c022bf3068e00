use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::domain::{
    Component, Constraint, ElementId, Interface, PropertyValue, Requirement, System,
};

/// Encodes a system tree as a JSON value.
///
/// Field presence is guaranteed for required fields; optional fields
/// (`description`, `unit`, `derivedFrom`) are omitted when absent.
/// Enums encode as their literal name strings.
///
/// # Panics
///
/// Never in practice: the wire model contains only string keys and
/// JSON-representable values, so serialization cannot fail.
#[must_use]
pub fn encode(system: &System) -> Value {
    serde_json::to_value(WireSystem::from(system)).expect("wire model is always JSON-representable")
}

/// Encodes a system tree as a pretty-printed JSON string.
///
/// # Panics
///
/// Never in practice: see [`encode`].
#[must_use]
pub fn encode_string(system: &System) -> String {
    serde_json::to_string_pretty(&WireSystem::from(system))
        .expect("wire model is always JSON-representable")
}

/// Wire form of [`System`]. Field names here are the serialization
/// contract; the decoder in [`super::decode`] is its inverse.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireSystem<'a> {
    id: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    subsystems: Vec<WireSystem<'a>>,
    components: Vec<WireComponent<'a>>,
    interfaces: Vec<WireInterface<'a>>,
    requirements: Vec<WireRequirement<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireComponent<'a> {
    id: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    properties: BTreeMap<&'a str, WireProperty<'a>>,
    requirements: Vec<WireRequirement<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireInterface<'a> {
    id: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    source: &'a str,
    target: &'a str,
    interface_type: &'static str,
    requirements: Vec<WireRequirement<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireRequirement<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    requirement_type: &'static str,
    priority: &'static str,
    verification: &'static str,
    constraints: Vec<WireConstraint<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    derived_from: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireConstraint<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    constraint_type: &'static str,
    value: WireProperty<'a>,
}

/// Wire form of [`PropertyValue`]: a tagged object whose `type` field
/// discriminates the variant.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum WireProperty<'a> {
    String {
        value: &'a str,
    },
    Number {
        value: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        unit: Option<&'a str>,
    },
    Boolean {
        value: bool,
    },
    List {
        values: Vec<WireProperty<'a>>,
    },
}

impl<'a> From<&'a System> for WireSystem<'a> {
    fn from(system: &'a System) -> Self {
        Self {
            id: system.id.as_str(),
            name: &system.name,
            description: system.description.as_deref(),
            subsystems: system.subsystems.iter().map(Self::from).collect(),
            components: system.components.iter().map(WireComponent::from).collect(),
            interfaces: system.interfaces.iter().map(WireInterface::from).collect(),
            requirements: system
                .requirements
                .iter()
                .map(WireRequirement::from)
                .collect(),
        }
    }
}

impl<'a> From<&'a Component> for WireComponent<'a> {
    fn from(component: &'a Component) -> Self {
        Self {
            id: component.id.as_str(),
            name: &component.name,
            description: component.description.as_deref(),
            properties: component
                .properties
                .iter()
                .map(|(key, value)| (key.as_str(), WireProperty::from(value)))
                .collect(),
            requirements: component
                .requirements
                .iter()
                .map(WireRequirement::from)
                .collect(),
        }
    }
}

impl<'a> From<&'a Interface> for WireInterface<'a> {
    fn from(interface: &'a Interface) -> Self {
        Self {
            id: interface.id.as_str(),
            name: &interface.name,
            description: interface.description.as_deref(),
            source: interface.source.as_str(),
            target: interface.target.as_str(),
            interface_type: interface.interface_type.as_str(),
            requirements: interface
                .requirements
                .iter()
                .map(WireRequirement::from)
                .collect(),
        }
    }
}

impl<'a> From<&'a Requirement> for WireRequirement<'a> {
    fn from(requirement: &'a Requirement) -> Self {
        Self {
            id: requirement.id.as_str(),
            name: &requirement.name,
            description: &requirement.description,
            requirement_type: requirement.requirement_type.as_str(),
            priority: requirement.priority.as_str(),
            verification: requirement.verification.as_str(),
            constraints: requirement
                .constraints
                .iter()
                .map(WireConstraint::from)
                .collect(),
            derived_from: requirement.derived_from.as_ref().map(ElementId::as_str),
        }
    }
}

impl<'a> From<&'a Constraint> for WireConstraint<'a> {
    fn from(constraint: &'a Constraint) -> Self {
        Self {
            id: constraint.id.as_str(),
            name: &constraint.name,
            description: &constraint.description,
            constraint_type: constraint.constraint_type.as_str(),
            value: WireProperty::from(&constraint.value),
        }
    }
}

impl<'a> From<&'a PropertyValue> for WireProperty<'a> {
    fn from(value: &'a PropertyValue) -> Self {
        match value {
            PropertyValue::String(s) => Self::String { value: s },
            PropertyValue::Number { value, unit } => Self::Number {
                value: *value,
                unit: unit.as_deref(),
            },
            PropertyValue::Boolean(b) => Self::Boolean { value: *b },
            PropertyValue::List(values) => Self::List {
                values: values.iter().map(Self::from).collect(),
            },
        }
    }
}
