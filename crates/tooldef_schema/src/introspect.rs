//! Per-function extraction of name, description and parameters.

use crate::config::GeneratorConfig;
use crate::error::SchemaError;
use crate::policy::{DEFAULT_SCHEMA_TYPE, ValidationPolicy};
use crate::reflect::{Annotation, HostType, Introspect};
use crate::schema::{FunctionDescriptor, ParameterDescriptor};

/// Schema type for described parameters whose type is not in the type map.
pub const UNKNOWN_SCHEMA_TYPE: &str = "unknown";

static ABSENT: Annotation = Annotation::Absent;

/// Builds a [`FunctionDescriptor`] from one function under a configuration.
///
/// Holds only a borrow of the configuration; construct one per call site or
/// use [`Generator::introspect`](crate::Generator::introspect).
#[derive(Debug, Clone, Copy)]
pub struct Introspector<'a> {
    config: &'a GeneratorConfig,
    policy: ValidationPolicy,
}

impl<'a> Introspector<'a> {
    /// Creates an introspector bound to `config`.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self {
            config,
            policy: config.policy(),
        }
    }

    /// Describes `function`.
    ///
    /// # Errors
    ///
    /// Under strict validation, returns [`SchemaError::MissingDocstring`],
    /// [`SchemaError::MissingAnnotation`] or [`SchemaError::MissingDescription`]
    /// for the first gap found. Lenient validation never fails.
    pub fn introspect<F>(&self, function: &F) -> Result<FunctionDescriptor, SchemaError>
    where
        F: Introspect + ?Sized,
    {
        let name = function.name();
        let display_name = self.config.display_name(name);

        // A doc comment with no text counts as missing.
        let description = match function.doc_comment().filter(|doc| !doc.trim().is_empty()) {
            Some(doc) => first_line(doc).to_string(),
            None => self.policy.on_missing_docstring(name)?,
        };

        let declared = function.parameters();
        let skip = usize::from(self.config.ignore_first_param() && !declared.is_empty());

        tracing::debug!(
            function = name,
            display_name,
            parameters = declared.len() - skip,
            "introspecting function"
        );

        let mut descriptor = FunctionDescriptor::new(display_name).with_description(description);
        for param in &declared[skip..] {
            let annotation = function
                .parameter_annotation(param.name())
                .unwrap_or(&ABSENT);
            let resolved = self.resolve_parameter(name, param.name(), annotation)?;
            descriptor = descriptor.add_parameter(param.name(), resolved);
        }

        Ok(descriptor)
    }

    fn resolve_parameter(
        &self,
        function: &str,
        parameter: &str,
        annotation: &Annotation,
    ) -> Result<ParameterDescriptor, SchemaError> {
        let resolved = match annotation {
            Annotation::Absent => self.policy.on_missing_annotation(function, parameter)?,
            Annotation::Bare(ty) => self.policy.on_missing_description(
                function,
                parameter,
                self.schema_type(ty, DEFAULT_SCHEMA_TYPE),
            )?,
            Annotation::Described(ty, text) => {
                ParameterDescriptor::new(self.schema_type(ty, UNKNOWN_SCHEMA_TYPE), &**text)
            }
        };

        tracing::trace!(
            function,
            parameter,
            schema_type = %resolved.schema_type,
            "resolved parameter"
        );

        Ok(resolved)
    }

    fn schema_type(&self, ty: &HostType, fallback: &'a str) -> &'a str {
        self.config.type_map().resolve(ty, fallback)
    }
}

/// Returns the first line of `doc` after trimming, itself trimmed.
///
/// Leading blank lines are skipped by the outer trim.
#[must_use]
pub fn first_line(doc: &str) -> &str {
    doc.trim().lines().next().map_or("", str::trim)
}
