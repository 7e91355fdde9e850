use crate::location::Location;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single attribute argument as the host resolved it.
///
/// Untagged on the wire: `true`, `3`, `"Has"` and `null` map straight to the
/// matching variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Int(i64),
    Str(String),
    Null,
}

impl RawValue {
    /// Name of the argument's type, used as the formatting argument of the
    /// "wrong type" diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Bool(_) => "bool",
            RawValue::Int(_)  => "int",
            RawValue::Str(_)  => "string",
            RawValue::Null    => "null",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RawValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Bool(b) => write!(f, "{}", b),
            RawValue::Int(i)  => write!(f, "{}", i),
            RawValue::Str(s)  => write!(f, "{}", s),
            RawValue::Null    => f.write_str("null"),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Str(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Str(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Int(value)
    }
}

/// One metadata attribute applied to a type or a member.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawAttribute {
    #[serde(default)]
    pub args:     Vec<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl RawAttribute {
    pub fn new(args: Vec<RawValue>) -> Self {
        RawAttribute { args, location: None }
    }

    /// An attribute applied with no arguments at all.
    pub fn bare() -> Self {
        RawAttribute::default()
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn arg(&self, index: usize) -> Option<&RawValue> {
        self.args.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_values() {
        let values: Vec<RawValue> = serde_json::from_str(r#"[true, 3, "Has", null]"#).unwrap();
        assert_eq!(
            values,
            vec![
                RawValue::Bool(true),
                RawValue::Int(3),
                RawValue::Str("Has".into()),
                RawValue::Null,
            ]
        );
        let names: Vec<&str> = values.iter().map(RawValue::type_name).collect();
        assert_eq!(names, ["bool", "int", "string", "null"]);
    }

    #[test]
    fn test_attribute_defaults() {
        let attr: RawAttribute = serde_json::from_str("{}").unwrap();
        assert!(attr.args.is_empty());
        assert!(attr.location.is_none());
        assert_eq!(attr, RawAttribute::bare());
    }
}
