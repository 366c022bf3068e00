/// A property value attached to a model element.
///
/// This is a closed tagged union: consumers (the codec, comparators,
/// formatters) must handle all four variants exhaustively, so adding a
/// variant is a deliberate breaking change surfaced by the compiler.
///
/// Lists nest to unbounded depth. Numbers carry an optional unit
/// string which the model treats as opaque — no dimensional analysis
/// is performed.
///
/// Equality is structural. Number values compare by `f64` equality,
/// which is what the round-trip law requires (encoding and decoding a
/// finite `f64` through JSON preserves it bit-for-bit); `NaN` property
/// values are not representable in JSON and compare unequal to
/// themselves as usual.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A text value.
    String(String),
    /// A numeric value with an optional unit tag (e.g. `"kg"`).
    Number {
        /// The numeric value.
        value: f64,
        /// Optional unit the value is expressed in.
        unit: Option<String>,
    },
    /// A boolean flag.
    Boolean(bool),
    /// An ordered sequence of nested values.
    List(Vec<PropertyValue>),
}

impl PropertyValue {
    /// Shorthand for a unit-tagged number.
    pub fn quantity(value: f64, unit: impl Into<String>) -> Self {
        Self::Number {
            value,
            unit: Some(unit.into()),
        }
    }

    /// Shorthand for a bare (unitless) number.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number { value, unit: None }
    }

    /// The wire-format discriminant for this variant.
    ///
    /// One of `"string"`, `"number"`, `"boolean"`, `"list"`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Number { .. } => "number",
            Self::Boolean(_) => "boolean",
            Self::List(_) => "list",
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<Vec<Self>> for PropertyValue {
    fn from(values: Vec<Self>) -> Self {
        Self::List(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_cover_all_variants() {
        assert_eq!(PropertyValue::from("x").type_name(), "string");
        assert_eq!(PropertyValue::number(1.0).type_name(), "number");
        assert_eq!(PropertyValue::from(true).type_name(), "boolean");
        assert_eq!(PropertyValue::List(Vec::new()).type_name(), "list");
    }

    #[test]
    fn quantity_carries_its_unit() {
        let mass = PropertyValue::quantity(12.5, "kg");
        assert_eq!(
            mass,
            PropertyValue::Number {
                value: 12.5,
                unit: Some("kg".to_string())
            }
        );
    }

    #[test]
    fn nested_lists_compare_structurally() {
        let a = PropertyValue::List(vec![
            PropertyValue::from("inner"),
            PropertyValue::List(vec![PropertyValue::number(1.0)]),
        ]);
        let b = PropertyValue::List(vec![
            PropertyValue::from("inner"),
            PropertyValue::List(vec![PropertyValue::number(1.0)]),
        ]);
        assert_eq!(a, b);

        let c = PropertyValue::List(vec![
            PropertyValue::from("inner"),
            PropertyValue::List(vec![PropertyValue::number(2.0)]),
        ]);
        assert_ne!(a, c);
    }
}
