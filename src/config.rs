//! The parsed configuration tree.
//!
//! Two levels of insertion-ordered mappings: group name to [`Group`],
//! setting name to [`ConfigValue`]. Lookups of absent keys return `None`
//! at every level; a missing group or setting is an ordinary outcome,
//! not an error.

use indexmap::IndexMap;

use crate::config_value::ConfigValue;

/// A named section of settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    settings: IndexMap<String, ConfigValue>,
}

impl Group {
    /// Look up a setting. Absent keys return `None`.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.settings.get(key)
    }

    /// Look up a string setting.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// Look up an integer setting.
    pub fn get_integer(&self, key: &str) -> Option<i64> {
        self.get(key)?.as_integer()
    }

    /// Look up a float setting.
    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.get(key)?.as_float()
    }

    /// Look up a boolean setting.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }

    /// Look up a list setting.
    pub fn get_list(&self, key: &str) -> Option<&[ConfigValue]> {
        self.get(key)?.as_list()
    }

    /// Number of settings in the group.
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    /// Whether the group holds no settings.
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Iterate over settings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.settings.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn insert(&mut self, key: String, value: ConfigValue) {
        self.settings.insert(key, value);
    }
}

/// A parsed configuration: groups of settings, in file order.
///
/// The tree is a snapshot; nothing mutates it after a successful parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    groups: IndexMap<String, Group>,
}

impl Config {
    /// Look up a group by name. Absent groups return `None`.
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    /// Look up a setting through both levels at once. Absent at either
    /// level returns `None`.
    pub fn get(&self, group: &str, key: &str) -> Option<&ConfigValue> {
        self.group(group)?.get(key)
    }

    /// Whether a group with this name exists.
    pub fn contains_group(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the configuration holds no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over groups in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Group)> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Create a new empty group. The caller checks for duplicates first.
    pub(crate) fn insert_group(&mut self, name: String) {
        self.groups.insert(name, Group::default());
    }

    pub(crate) fn group_mut(&mut self, name: &str) -> &mut Group {
        self.groups.entry(name.to_string()).or_default()
    }
}
