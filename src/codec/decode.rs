use std::{collections::BTreeMap, str::FromStr};

use serde_json::{Map, Value};

use super::DecodeError;
use crate::domain::{
    Component, Constraint, Interface, PropertyValue, Requirement, System, UnknownVariantError,
};

/// Decodes a JSON document into a system tree.
///
/// The inverse of [`encode`](super::encode()): required fields must be
/// present, enum fields must hold known literal names, and property
/// values must carry a recognised `type` discriminant. Nested property
/// lists of arbitrary depth are decoded correctly; the parser's own
/// nesting limit bounds recursion before this walker runs.
///
/// # Errors
///
/// Returns [`DecodeError::Parse`] for syntactically invalid JSON, and
/// a [`DecodeError`] naming the offending field or value and its JSON
/// path for structurally invalid documents.
pub fn decode(json: &str) -> Result<System, DecodeError> {
    let value: Value = serde_json::from_str(json)?;
    decode_value(&value)
}

/// Decodes an already-parsed JSON value into a system tree.
///
/// # Errors
///
/// Returns a [`DecodeError`] naming the offending field or value and
/// its JSON path when the document is structurally invalid.
pub fn decode_value(value: &Value) -> Result<System, DecodeError> {
    decode_system(value, "$")
}

fn decode_system(value: &Value, path: &str) -> Result<System, DecodeError> {
    let object = as_object(value, path)?;

    let subsystems = require_array(object, "subsystems", path)?
        .iter()
        .enumerate()
        .map(|(index, item)| decode_system(item, &format!("{path}.subsystems[{index}]")))
        .collect::<Result<_, _>>()?;

    let components = require_array(object, "components", path)?
        .iter()
        .enumerate()
        .map(|(index, item)| decode_component(item, &format!("{path}.components[{index}]")))
        .collect::<Result<_, _>>()?;

    let interfaces = require_array(object, "interfaces", path)?
        .iter()
        .enumerate()
        .map(|(index, item)| decode_interface(item, &format!("{path}.interfaces[{index}]")))
        .collect::<Result<_, _>>()?;

    Ok(System {
        id: require_str(object, "id", path)?.into(),
        name: require_str(object, "name", path)?.to_string(),
        description: optional_str(object, "description", path)?.map(str::to_string),
        subsystems,
        components,
        interfaces,
        requirements: decode_requirements(object, path)?,
    })
}

fn decode_component(value: &Value, path: &str) -> Result<Component, DecodeError> {
    let object = as_object(value, path)?;

    let properties_value = require(object, "properties", path)?;
    let properties_path = format!("{path}.properties");
    let properties = as_object(properties_value, &properties_path)?
        .iter()
        .map(|(key, item)| {
            let property = decode_property(item, &format!("{properties_path}.{key}"))?;
            Ok((key.clone(), property))
        })
        .collect::<Result<BTreeMap<_, _>, DecodeError>>()?;

    Ok(Component {
        id: require_str(object, "id", path)?.into(),
        name: require_str(object, "name", path)?.to_string(),
        description: optional_str(object, "description", path)?.map(str::to_string),
        properties,
        requirements: decode_requirements(object, path)?,
    })
}

fn decode_interface(value: &Value, path: &str) -> Result<Interface, DecodeError> {
    let object = as_object(value, path)?;

    Ok(Interface {
        id: require_str(object, "id", path)?.into(),
        name: require_str(object, "name", path)?.to_string(),
        description: optional_str(object, "description", path)?.map(str::to_string),
        source: require_str(object, "source", path)?.into(),
        target: require_str(object, "target", path)?.into(),
        interface_type: parse_name(object, "interfaceType", path)?,
        requirements: decode_requirements(object, path)?,
    })
}

fn decode_requirements(
    object: &Map<String, Value>,
    path: &str,
) -> Result<Vec<Requirement>, DecodeError> {
    require_array(object, "requirements", path)?
        .iter()
        .enumerate()
        .map(|(index, item)| decode_requirement(item, &format!("{path}.requirements[{index}]")))
        .collect()
}

fn decode_requirement(value: &Value, path: &str) -> Result<Requirement, DecodeError> {
    let object = as_object(value, path)?;

    let constraints = require_array(object, "constraints", path)?
        .iter()
        .enumerate()
        .map(|(index, item)| decode_constraint(item, &format!("{path}.constraints[{index}]")))
        .collect::<Result<_, _>>()?;

    Ok(Requirement {
        id: require_str(object, "id", path)?.into(),
        name: require_str(object, "name", path)?.to_string(),
        description: require_str(object, "description", path)?.to_string(),
        requirement_type: parse_name(object, "requirementType", path)?,
        priority: parse_name(object, "priority", path)?,
        verification: parse_name(object, "verification", path)?,
        constraints,
        derived_from: optional_str(object, "derivedFrom", path)?.map(Into::into),
    })
}

fn decode_constraint(value: &Value, path: &str) -> Result<Constraint, DecodeError> {
    let object = as_object(value, path)?;

    Ok(Constraint {
        id: require_str(object, "id", path)?.into(),
        name: require_str(object, "name", path)?.to_string(),
        description: require_str(object, "description", path)?.to_string(),
        constraint_type: parse_name(object, "constraintType", path)?,
        value: decode_property(require(object, "value", path)?, &format!("{path}.value"))?,
    })
}

fn decode_property(value: &Value, path: &str) -> Result<PropertyValue, DecodeError> {
    let object = as_object(value, path)?;
    let discriminant = require_str(object, "type", path)?;

    match discriminant {
        "string" => Ok(PropertyValue::String(
            require_str(object, "value", path)?.to_string(),
        )),
        "number" => {
            let number = require(object, "value", path)?;
            let number = number.as_f64().ok_or_else(|| DecodeError::TypeMismatch {
                expected: "a number",
                path: format!("{path}.value"),
            })?;
            Ok(PropertyValue::Number {
                value: number,
                unit: optional_str(object, "unit", path)?.map(str::to_string),
            })
        }
        "boolean" => {
            let flag = require(object, "value", path)?;
            let flag = flag.as_bool().ok_or_else(|| DecodeError::TypeMismatch {
                expected: "a boolean",
                path: format!("{path}.value"),
            })?;
            Ok(PropertyValue::Boolean(flag))
        }
        "list" => require_array(object, "values", path)?
            .iter()
            .enumerate()
            .map(|(index, item)| decode_property(item, &format!("{path}.values[{index}]")))
            .collect::<Result<_, _>>()
            .map(PropertyValue::List),
        other => Err(DecodeError::UnknownVariant {
            what: "property value type",
            value: other.to_string(),
            path: format!("{path}.type"),
        }),
    }
}

fn as_object<'v>(value: &'v Value, path: &str) -> Result<&'v Map<String, Value>, DecodeError> {
    value.as_object().ok_or_else(|| DecodeError::TypeMismatch {
        expected: "an object",
        path: path.to_string(),
    })
}

fn require<'v>(
    object: &'v Map<String, Value>,
    field: &'static str,
    path: &str,
) -> Result<&'v Value, DecodeError> {
    object.get(field).ok_or_else(|| DecodeError::MissingField {
        field,
        path: path.to_string(),
    })
}

fn require_str<'v>(
    object: &'v Map<String, Value>,
    field: &'static str,
    path: &str,
) -> Result<&'v str, DecodeError> {
    require(object, field, path)?
        .as_str()
        .ok_or_else(|| DecodeError::TypeMismatch {
            expected: "a string",
            path: format!("{path}.{field}"),
        })
}

fn require_array<'v>(
    object: &'v Map<String, Value>,
    field: &'static str,
    path: &str,
) -> Result<&'v Vec<Value>, DecodeError> {
    require(object, field, path)?
        .as_array()
        .ok_or_else(|| DecodeError::TypeMismatch {
            expected: "an array",
            path: format!("{path}.{field}"),
        })
}

/// Reads an optional string field. Absent and `null` both map to
/// `None`; any other non-string value is a type mismatch.
fn optional_str<'v>(
    object: &'v Map<String, Value>,
    field: &'static str,
    path: &str,
) -> Result<Option<&'v str>, DecodeError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(DecodeError::TypeMismatch {
            expected: "a string",
            path: format!("{path}.{field}"),
        }),
    }
}

fn parse_name<T>(
    object: &Map<String, Value>,
    field: &'static str,
    path: &str,
) -> Result<T, DecodeError>
where
    T: FromStr<Err = UnknownVariantError>,
{
    require_str(object, field, path)?
        .parse()
        .map_err(|err: UnknownVariantError| DecodeError::UnknownVariant {
            what: err.kind,
            value: err.value,
            path: format!("{path}.{field}"),
        })
}
