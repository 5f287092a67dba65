//! Output schema types.
//!
//! Provides [`ParameterDescriptor`] for individual parameters,
//! [`FunctionDescriptor`] for a function's name, description and parameter
//! object, and [`ToolDescriptor`] for the `{"type": "function", ...}`
//! wrapper that chat-completion APIs expect.
//!
//! Serialized field names and ordering:
//!
//! ```json
//! {
//!   "type": "function",
//!   "function": {
//!     "name": "add",
//!     "description": "Adds two numbers.",
//!     "parameters": {
//!       "type": "object",
//!       "properties": {
//!         "a": { "type": "integer", "description": "first addend" },
//!         "b": { "type": "integer", "description": "second addend" }
//!       },
//!       "required": ["a", "b"]
//!     }
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Schema for a single parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Schema primitive type name.
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Parameter description, possibly empty.
    pub description: String,
}

impl ParameterDescriptor {
    /// Creates a parameter descriptor.
    pub fn new(schema_type: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            schema_type: schema_type.into(),
            description: description.into(),
        }
    }
}

/// Marker for the `"object"` literal of a parameter schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    /// `"object"`
    #[default]
    Object,
}

/// The `parameters` object of a function descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParametersSchema {
    /// Always `"object"`.
    #[serde(rename = "type")]
    pub kind: ObjectType,
    /// Parameters keyed by name, in declaration order.
    pub properties: IndexMap<String, ParameterDescriptor>,
    /// Every parameter name, in declaration order.
    pub required: Vec<String>,
}

/// Describes one function: name, description and parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    /// Output name (after any remapping).
    pub name: String,
    /// First line of the function's documentation, possibly empty.
    pub description: String,
    /// Parameter object schema.
    pub parameters: ParametersSchema,
}

impl FunctionDescriptor {
    /// Creates a descriptor with no description and no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            parameters: ParametersSchema::default(),
        }
    }

    /// Sets the function description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Appends a parameter to both `properties` and `required`.
    ///
    /// Re-adding an existing name replaces its descriptor and keeps its
    /// original position.
    #[must_use]
    pub fn add_parameter(mut self, name: impl Into<String>, param: ParameterDescriptor) -> Self {
        let name = name.into();
        if self
            .parameters
            .properties
            .insert(name.clone(), param)
            .is_none()
        {
            self.parameters.required.push(name);
        }
        self
    }

    /// Returns the parameter descriptor for `name`.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&ParameterDescriptor> {
        self.parameters.properties.get(name)
    }

    /// Wraps this descriptor as a [`ToolDescriptor`].
    #[must_use]
    pub fn into_tool(self) -> ToolDescriptor {
        ToolDescriptor::new(self)
    }

    /// Renders this descriptor as JSON.
    #[must_use]
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Marker for the `"function"` literal of a tool descriptor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    /// `"function"`
    #[default]
    Function,
}

/// API-facing record for one callable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Always `"function"`.
    #[serde(rename = "type")]
    pub kind: ToolType,
    /// The described function.
    pub function: FunctionDescriptor,
}

impl ToolDescriptor {
    /// Wraps a function descriptor.
    #[must_use]
    pub fn new(function: FunctionDescriptor) -> Self {
        Self {
            kind: ToolType::Function,
            function,
        }
    }

    /// Renders this descriptor as JSON.
    #[must_use]
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_api_field_names() {
        let tool = FunctionDescriptor::new("add")
            .with_description("Adds two numbers.")
            .add_parameter("a", ParameterDescriptor::new("integer", "first addend"))
            .add_parameter("b", ParameterDescriptor::new("integer", "second addend"))
            .into_tool();

        assert_eq!(
            tool.to_value(),
            json!({
                "type": "function",
                "function": {
                    "name": "add",
                    "description": "Adds two numbers.",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "a": { "type": "integer", "description": "first addend" },
                            "b": { "type": "integer", "description": "second addend" }
                        },
                        "required": ["a", "b"]
                    }
                }
            })
        );
    }

    #[test]
    fn property_order_survives_serialization() {
        let descriptor = FunctionDescriptor::new("f")
            .add_parameter("zeta", ParameterDescriptor::new("string", ""))
            .add_parameter("alpha", ParameterDescriptor::new("string", ""));

        let text = serde_json::to_string(&descriptor).unwrap();
        let zeta = text.find("\"zeta\"").unwrap();
        let alpha = text.find("\"alpha\"").unwrap();
        assert!(zeta < alpha, "properties reordered: {text}");
    }

    #[test]
    fn replacing_a_parameter_keeps_position() {
        let descriptor = FunctionDescriptor::new("f")
            .add_parameter("a", ParameterDescriptor::new("string", ""))
            .add_parameter("b", ParameterDescriptor::new("string", ""))
            .add_parameter("a", ParameterDescriptor::new("integer", "again"));

        assert_eq!(descriptor.parameters.required, ["a", "b"]);
        assert_eq!(
            descriptor.parameter("a"),
            Some(&ParameterDescriptor::new("integer", "again"))
        );
    }

    #[test]
    fn empty_parameters_render_empty_collections() {
        let value = FunctionDescriptor::new("noop").to_value();
        assert_eq!(value["parameters"]["properties"], json!({}));
        assert_eq!(value["parameters"]["required"], json!([]));
        assert_eq!(value["description"], "");
    }

    #[test]
    fn deserializes_from_api_shape() {
        let tool: ToolDescriptor = serde_json::from_value(json!({
            "type": "function",
            "function": {
                "name": "f",
                "description": "",
                "parameters": { "type": "object", "properties": {}, "required": [] }
            }
        }))
        .unwrap();
        assert_eq!(tool, FunctionDescriptor::new("f").into_tool());
    }
}
