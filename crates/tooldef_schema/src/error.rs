//! Error types for schema generation and manifest loading.

use thiserror::Error;

/// Errors that can occur while describing functions.
///
/// Every variant points at a defect in a function definition, never at a
/// transient condition, so callers should fix the definition rather than
/// retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The function has no doc comment and strict validation is active.
    #[error("function '{function}' is missing a docstring")]
    MissingDocstring {
        /// Declared name of the offending function.
        function: String,
    },

    /// A parameter carries no type information and strict validation is active.
    #[error("parameter '{parameter}' of function '{function}' is missing a type annotation")]
    MissingAnnotation {
        /// Declared name of the offending function.
        function: String,
        /// Name of the unannotated parameter.
        parameter: String,
    },

    /// A parameter has a type but no paired description and strict validation is active.
    #[error("parameter '{parameter}' of function '{function}' is missing a description")]
    MissingDescription {
        /// Declared name of the offending function.
        function: String,
        /// Name of the undescribed parameter.
        parameter: String,
    },

    /// The function declares a return type other than string.
    #[error("function '{function}' must return a string or leave the return type undeclared, found '{return_type}'")]
    InvalidReturnType {
        /// Declared name of the offending function.
        function: String,
        /// Rendered name of the declared return type.
        return_type: String,
    },
}

impl SchemaError {
    /// Creates a [`MissingDocstring`](Self::MissingDocstring).
    pub fn missing_docstring(function: impl Into<String>) -> Self {
        Self::MissingDocstring {
            function: function.into(),
        }
    }

    /// Creates a [`MissingAnnotation`](Self::MissingAnnotation).
    pub fn missing_annotation(function: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::MissingAnnotation {
            function: function.into(),
            parameter: parameter.into(),
        }
    }

    /// Creates a [`MissingDescription`](Self::MissingDescription).
    pub fn missing_description(function: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::MissingDescription {
            function: function.into(),
            parameter: parameter.into(),
        }
    }

    /// Creates an [`InvalidReturnType`](Self::InvalidReturnType).
    pub fn invalid_return_type(
        function: impl Into<String>,
        return_type: impl Into<String>,
    ) -> Self {
        Self::InvalidReturnType {
            function: function.into(),
            return_type: return_type.into(),
        }
    }

    /// Returns the declared name of the function the error refers to.
    #[must_use]
    pub fn function(&self) -> &str {
        match self {
            Self::MissingDocstring { function }
            | Self::MissingAnnotation { function, .. }
            | Self::MissingDescription { function, .. }
            | Self::InvalidReturnType { function, .. } => function,
        }
    }

    /// Returns the offending parameter name, if the error is parameter-scoped.
    #[must_use]
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::MissingAnnotation { parameter, .. } | Self::MissingDescription { parameter, .. } => {
                Some(parameter)
            }
            Self::MissingDocstring { .. } | Self::InvalidReturnType { .. } => None,
        }
    }
}

/// Errors produced while reading signature manifests.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest is not valid JSON or does not match the expected shape.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A parameter entry carries a description but no type.
    #[error("parameter '{parameter}' of function '{function}' has a description but no type")]
    DescriptionWithoutType {
        /// Name of the function declared by the manifest entry.
        function: String,
        /// Name of the malformed parameter.
        parameter: String,
    },
}
