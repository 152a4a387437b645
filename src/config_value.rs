//! Typed configuration values.

/// A configuration value produced by the coercion engine.
///
/// Every raw textual value in a config file is converted into exactly one
/// of these forms. Lists hold independently coerced elements and are
/// homogeneous by convention only, not enforced.
///
/// Note on `0` and `1`: the numeric coercion stage runs before the boolean
/// stage, so a bare `0` or `1` always becomes [`ConfigValue::Integer`],
/// never [`ConfigValue::Bool`]. Use `yes`/`no`/`true`/`false` for booleans.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    /// An integer value.
    Integer(i64),
    /// A floating-point value.
    Float(f64),
    /// A boolean value.
    Bool(bool),
    /// A string value, either quoted or the plain-string fallback.
    String(String),
    /// A comma-separated list of values.
    List(Vec<ConfigValue>),
}

impl ConfigValue {
    /// Return the integer value, if this is an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Return the float value, if this is a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Return the boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Return the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Return the list elements, if this is a list.
    pub fn as_list(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Integer(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Float(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(items: Vec<ConfigValue>) -> Self {
        ConfigValue::List(items)
    }
}
