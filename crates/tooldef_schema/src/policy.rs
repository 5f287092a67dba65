//! Strict/lenient validation as a single decision table.
//!
//! The introspector consults [`ValidationPolicy`] at each point where
//! metadata can be missing. A strict policy turns the gap into a
//! [`SchemaError`]; a lenient one substitutes the documented default and logs
//! a warning.

use crate::error::SchemaError;
use crate::schema::ParameterDescriptor;

/// Schema type used when a parameter has no usable type information.
pub const DEFAULT_SCHEMA_TYPE: &str = "string";

/// How missing function metadata is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ValidationPolicy {
    /// Reject incomplete metadata.
    #[default]
    Strict,
    /// Substitute defaults for incomplete metadata.
    Lenient,
}

impl ValidationPolicy {
    /// Returns [`Strict`](Self::Strict) when `strict` is set, else [`Lenient`](Self::Lenient).
    #[must_use]
    pub fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Lenient }
    }

    /// Returns whether this policy rejects incomplete metadata.
    #[must_use]
    pub fn is_strict(self) -> bool {
        self == Self::Strict
    }

    /// The function has no doc comment. Defaults to an empty description.
    ///
    /// # Errors
    ///
    /// [`SchemaError::MissingDocstring`] under [`Strict`](Self::Strict).
    pub fn on_missing_docstring(self, function: &str) -> Result<String, SchemaError> {
        match self {
            Self::Strict => Err(SchemaError::missing_docstring(function)),
            Self::Lenient => {
                tracing::warn!(function, "missing docstring, using empty description");
                Ok(String::new())
            }
        }
    }

    /// A parameter has no annotation. Defaults to an undescribed string.
    ///
    /// # Errors
    ///
    /// [`SchemaError::MissingAnnotation`] under [`Strict`](Self::Strict).
    pub fn on_missing_annotation(
        self,
        function: &str,
        parameter: &str,
    ) -> Result<ParameterDescriptor, SchemaError> {
        match self {
            Self::Strict => Err(SchemaError::missing_annotation(function, parameter)),
            Self::Lenient => {
                tracing::warn!(
                    function,
                    parameter,
                    "missing type annotation, defaulting to {DEFAULT_SCHEMA_TYPE}"
                );
                Ok(ParameterDescriptor::new(DEFAULT_SCHEMA_TYPE, ""))
            }
        }
    }

    /// A parameter has a type but no description. Defaults to the resolved
    /// type with an empty description.
    ///
    /// # Errors
    ///
    /// [`SchemaError::MissingDescription`] under [`Strict`](Self::Strict).
    pub fn on_missing_description(
        self,
        function: &str,
        parameter: &str,
        schema_type: &str,
    ) -> Result<ParameterDescriptor, SchemaError> {
        match self {
            Self::Strict => Err(SchemaError::missing_description(function, parameter)),
            Self::Lenient => {
                tracing::warn!(function, parameter, "missing parameter description");
                Ok(ParameterDescriptor::new(schema_type, ""))
            }
        }
    }
}
