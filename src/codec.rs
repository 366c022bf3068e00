//! JSON serialization for system models.
//!
//! JSON is the model's only wire format. Encoding is structural and
//! field-preserving: enums serialize as their literal name strings,
//! identifiers as their underlying strings, and
//! [`PropertyValue`](crate::domain::PropertyValue) as a tagged object
//! carrying a `type` discriminant (`"string"`, `"number"`,
//! `"boolean"`, `"list"`).
//!
//! The round-trip law is the contract: for every valid
//! [`System`](crate::domain::System) value `x`,
//! `decode_value(&encode(&x)) == x` under structural equality.
//!
//! Decoding never panics and never fails past the decode boundary:
//! malformed input is returned as a [`DecodeError`] that names the
//! offending field or value and the JSON path it was found at.

mod encode;
pub use encode::{encode, encode_string};

mod decode;
pub use decode::{decode, decode_value};

/// Errors produced when decoding a JSON document into a system model.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The input was not syntactically valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required field was absent.
    #[error("missing field `{field}` at {path}")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
        /// JSON path of the object the field was expected in.
        path: String,
    },

    /// A value had the wrong JSON type.
    #[error("expected {expected} at {path}")]
    TypeMismatch {
        /// Description of the expected JSON type.
        expected: &'static str,
        /// JSON path of the offending value.
        path: String,
    },

    /// A closed-set discriminant or enum name was not recognised.
    #[error("unknown {what} `{value}` at {path}")]
    UnknownVariant {
        /// What kind of name was being parsed.
        what: &'static str,
        /// The unrecognised value.
        value: String,
        /// JSON path of the offending value.
        path: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{decode, decode_value, encode, encode_string};
    use crate::domain::{
        Component, Constraint, ConstraintType, Interface, InterfaceType, Priority, PropertyValue,
        Requirement, RequirementType, System, Verification,
    };

    fn sample_system() -> System {
        let mut requirement = Requirement::new(
            "R1",
            "Pointing accuracy",
            "The payload shall point within 0.1 degrees.",
            RequirementType::Performance,
            Priority::Critical,
            Verification::Analysis,
        );
        requirement.derived_from = Some("R0".into());
        requirement.constraints.push(Constraint::new(
            "CON-1",
            "Mass budget",
            "Total mass under 4 kg.",
            ConstraintType::Mass,
            PropertyValue::quantity(4.0, "kg"),
        ));

        let mut component = Component::new("C1", "Star tracker");
        component.description = Some("Attitude sensor".to_string());
        component
            .properties
            .insert("mass".to_string(), PropertyValue::quantity(0.8, "kg"));
        component.properties.insert(
            "modes".to_string(),
            PropertyValue::List(vec![
                PropertyValue::from("coarse"),
                PropertyValue::List(vec![
                    PropertyValue::from("fine"),
                    PropertyValue::List(vec![PropertyValue::Boolean(true)]),
                ]),
            ]),
        );
        component.requirements.push(requirement);

        let mut interface = Interface::new("IF-1", "Power feed", "C1", "C2", InterfaceType::Electrical);
        interface.description = Some("28V regulated".to_string());
        interface.requirements.push(Requirement::new(
            "R2",
            "Ripple",
            "Supply ripple shall stay under 50 mV.",
            RequirementType::Interface,
            Priority::Medium,
            Verification::Test,
        ));

        let mut subsystem = System::new("AOCS", "Attitude control");
        subsystem.components.push(component);

        let mut root = System::new("SAT-1", "Satellite");
        root.description = Some("Demonstration bus".to_string());
        root.subsystems.push(subsystem);
        root.components.push(Component::new("C2", "Battery"));
        root.interfaces.push(interface);
        root.requirements.push(Requirement::new(
            "R0",
            "Mission life",
            "The satellite shall operate for two years.",
            RequirementType::Operational,
            Priority::High,
            Verification::Demonstration,
        ));
        root
    }

    #[test]
    fn round_trip_preserves_the_full_tree() {
        let system = sample_system();
        let decoded = decode_value(&encode(&system)).unwrap();
        assert_eq!(decoded, system);
    }

    #[test]
    fn text_round_trip_through_pretty_json() {
        let system = sample_system();
        let decoded = decode(&encode_string(&system)).unwrap();
        assert_eq!(decoded, system);
    }

    #[test]
    fn round_trip_preserves_an_empty_system() {
        let system = System::new("EMPTY", "Empty");
        let decoded = decode_value(&encode(&system)).unwrap();
        assert_eq!(decoded, system);
    }

    #[test]
    fn round_trip_preserves_every_property_variant() {
        let mut component = Component::new("C1", "Probe");
        component
            .properties
            .insert("label".to_string(), PropertyValue::from("flight"));
        component
            .properties
            .insert("bare".to_string(), PropertyValue::number(-3.25));
        component
            .properties
            .insert("tagged".to_string(), PropertyValue::quantity(1.5e6, "Hz"));
        component
            .properties
            .insert("armed".to_string(), PropertyValue::Boolean(false));
        component
            .properties
            .insert("empty".to_string(), PropertyValue::List(Vec::new()));

        let mut system = System::new("S", "S");
        system.components.push(component);

        let decoded = decode_value(&encode(&system)).unwrap();
        assert_eq!(decoded, system);
    }
}
