//! Generator configuration.
//!
//! [`GeneratorConfig`] is assembled with `with_*` builders or deserialized
//! from JSON, then handed to a [`Generator`](crate::Generator) which keeps it
//! immutable for its lifetime.
//!
//! ```json
//! {
//!   "strict": false,
//!   "type_map": { "string": "string", "Path": "string" },
//!   "name_mappings": [["get_weather", "weather"]],
//!   "ignore_first_param": true
//! }
//! ```

use crate::policy::ValidationPolicy;
use crate::reflect::HostType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from host primitive types to schema type names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeMap(IndexMap<HostType, String>);

impl Default for TypeMap {
    fn default() -> Self {
        Self::from_iter([
            (HostType::String, "string"),
            (HostType::Integer, "integer"),
            (HostType::Float, "number"),
            (HostType::Boolean, "boolean"),
        ])
    }
}

impl TypeMap {
    /// Creates an empty map. Every lookup falls back.
    #[must_use]
    pub fn empty() -> Self {
        Self(IndexMap::new())
    }

    /// Adds or replaces an entry.
    #[must_use]
    pub fn with(mut self, ty: HostType, schema_type: impl Into<String>) -> Self {
        self.0.insert(ty, schema_type.into());
        self
    }

    /// Returns the schema type name for `ty`, if mapped.
    #[must_use]
    pub fn get(&self, ty: &HostType) -> Option<&str> {
        self.0.get(ty).map(String::as_str)
    }

    /// Returns the schema type name for `ty`, or `fallback` when unmapped.
    #[must_use]
    pub fn resolve<'a>(&'a self, ty: &HostType, fallback: &'a str) -> &'a str {
        self.get(ty).unwrap_or(fallback)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(HostType, S)> for TypeMap {
    fn from_iter<I: IntoIterator<Item = (HostType, S)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(ty, schema_type)| (ty, schema_type.into()))
                .collect(),
        )
    }
}

/// Configuration shared by every introspection in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    type_map: TypeMap,
    strict: bool,
    #[serde(rename = "name_mappings", with = "name_mappings")]
    name_mapping: IndexMap<String, String>,
    ignore_first_param: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            type_map: TypeMap::default(),
            strict: true,
            name_mapping: IndexMap::new(),
            ignore_first_param: false,
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration: strict, default type map, no renames.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] for malformed input.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replaces the type map.
    #[must_use]
    pub fn with_type_map(mut self, type_map: TypeMap) -> Self {
        self.type_map = type_map;
        self
    }

    /// Toggles strict validation.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Adds `(original, display)` name pairs. Later pairs win.
    #[must_use]
    pub fn with_name_mappings<I, K, V>(mut self, mappings: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.name_mapping.extend(
            mappings
                .into_iter()
                .map(|(original, display)| (original.into(), display.into())),
        );
        self
    }

    /// Skips the first declared parameter of every function (method receivers).
    #[must_use]
    pub fn with_ignore_first_param(mut self, ignore: bool) -> Self {
        self.ignore_first_param = ignore;
        self
    }

    /// Returns the type map.
    #[must_use]
    pub fn type_map(&self) -> &TypeMap {
        &self.type_map
    }

    /// Returns whether strict validation is active.
    #[must_use]
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Returns the validation policy implied by [`strict`](Self::strict).
    #[must_use]
    pub fn policy(&self) -> ValidationPolicy {
        ValidationPolicy::from_strict(self.strict)
    }

    /// Returns the original → display name mapping.
    #[must_use]
    pub fn name_mapping(&self) -> &IndexMap<String, String> {
        &self.name_mapping
    }

    /// Returns the output name for a declared function name.
    #[must_use]
    pub fn display_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.name_mapping.get(name).map_or(name, String::as_str)
    }

    /// Returns whether the first declared parameter is skipped.
    #[must_use]
    pub fn ignore_first_param(&self) -> bool {
        self.ignore_first_param
    }
}

/// Name mappings travel as an ordered list of `[original, display]` pairs.
mod name_mappings {
    use indexmap::IndexMap;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(
        map: &IndexMap<String, String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(map.iter())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<IndexMap<String, String>, D::Error> {
        let pairs = Vec::<(String, String)>::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}
