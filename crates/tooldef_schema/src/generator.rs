//! Batch conversion of functions into tool descriptors.
//!
//! The [`Generator`] owns a [`GeneratorConfig`], checks the return-type
//! contract of every function in a batch, and delegates per-function work to
//! the [`Introspector`].
//!
//! # Usage
//!
//! ```ignore
//! use tooldef_schema::{describe, Generator, GeneratorConfig};
//!
//! #[describe]
//! /// Adds two numbers.
//! fn add(
//!     /// First addend.
//!     a: i64,
//!     /// Second addend.
//!     b: i64,
//! ) -> String {
//!     (a + b).to_string()
//! }
//!
//! let generator = Generator::new(GeneratorConfig::new());
//! let tools = generator.generate([&AddSignature])?;
//! ```

use crate::config::GeneratorConfig;
use crate::error::SchemaError;
use crate::introspect::Introspector;
use crate::reflect::Introspect;
use crate::schema::{FunctionDescriptor, ToolDescriptor};

/// Converts batches of functions into tool descriptors.
///
/// Stateless apart from its immutable configuration, so a single generator
/// can serve any number of calls, including concurrent ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator with the given configuration.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Describes a single function without the return-type check.
    ///
    /// # Errors
    ///
    /// Propagates the introspector's strict-mode validation errors.
    pub fn introspect<F>(&self, function: &F) -> Result<FunctionDescriptor, SchemaError>
    where
        F: Introspect + ?Sized,
    {
        Introspector::new(&self.config).introspect(function)
    }

    /// Describes every function in `functions`, in input order.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidReturnType`] when any function declares a
    /// non-string return type, whatever the strictness. Otherwise propagates
    /// the first introspection error. No descriptors are returned on error.
    pub fn generate<I>(&self, functions: I) -> Result<Vec<ToolDescriptor>, SchemaError>
    where
        I: IntoIterator,
        I::Item: Introspect,
    {
        let introspector = Introspector::new(&self.config);

        let tools = functions
            .into_iter()
            .map(|function| {
                check_return_type(&function)?;
                introspector
                    .introspect(&function)
                    .map(FunctionDescriptor::into_tool)
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(tools = tools.len(), "generated tool descriptors");
        Ok(tools)
    }

    /// Like [`generate`](Self::generate), rendered as a JSON array.
    ///
    /// # Errors
    ///
    /// Same as [`generate`](Self::generate).
    pub fn generate_json<I>(&self, functions: I) -> Result<serde_json::Value, SchemaError>
    where
        I: IntoIterator,
        I::Item: Introspect,
    {
        let tools = self.generate(functions)?;
        Ok(serde_json::Value::Array(
            tools.iter().map(ToolDescriptor::to_value).collect(),
        ))
    }
}

/// Rejects functions whose declared return type is not string.
fn check_return_type<F: Introspect + ?Sized>(function: &F) -> Result<(), SchemaError> {
    match function.return_annotation() {
        Some(ty) if !ty.is_string() => {
            Err(SchemaError::invalid_return_type(function.name(), ty.as_str()))
        }
        _ => Ok(()),
    }
}

/// Describes one function with the default configuration and the given
/// strictness.
///
/// # Errors
///
/// Strict-mode validation errors, as for [`Generator::introspect`].
pub fn introspect<F>(function: &F, strict: bool) -> Result<FunctionDescriptor, SchemaError>
where
    F: Introspect + ?Sized,
{
    Generator::new(GeneratorConfig::new().with_strict(strict)).introspect(function)
}

/// Describes a batch of functions with the default configuration.
///
/// # Errors
///
/// As for [`Generator::generate`].
pub fn generate_tools<I>(functions: I) -> Result<Vec<ToolDescriptor>, SchemaError>
where
    I: IntoIterator,
    I::Item: Introspect,
{
    Generator::default().generate(functions)
}
