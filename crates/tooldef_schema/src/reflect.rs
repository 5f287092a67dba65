//! The reflection interface consumed by the introspector.
//!
//! Rust has no runtime reflection, so function metadata reaches the
//! generator through the [`Introspect`] trait:
//!
//! - `#[describe]` / `#[describe_methods]` emit static implementations at compile time
//! - [`FunctionSignature`] is a hand-built, owned implementation
//! - signature manifests deserialize into [`FunctionSignature`] values

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Primitive-type identifier of a host type annotation.
///
/// The four primitives are recognized by the default type map; everything
/// else is carried by name in [`HostType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HostType {
    /// Text (`String`, `&str`, `char`).
    String,
    /// Signed or unsigned integers of any width.
    Integer,
    /// Floating point numbers.
    Float,
    /// `true` / `false`.
    Boolean,
    /// Any other host type, identified by its rendered name.
    Other(Cow<'static, str>),
}

impl HostType {
    /// Creates an [`Other`](Self::Other) type from a static name.
    #[must_use]
    pub const fn other(name: &'static str) -> Self {
        Self::Other(Cow::Borrowed(name))
    }

    /// Returns the identifier used for this type in configuration and manifests.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Other(name) => name,
        }
    }

    /// Returns whether this is the string primitive.
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }
}

impl From<String> for HostType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "string" => Self::String,
            "integer" => Self::Integer,
            "float" => Self::Float,
            "boolean" => Self::Boolean,
            _ => Self::Other(Cow::Owned(name)),
        }
    }
}

impl From<&str> for HostType {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<HostType> for String {
    fn from(ty: HostType) -> Self {
        match ty {
            HostType::Other(name) => name.into_owned(),
            primitive => primitive.as_str().to_string(),
        }
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type annotation attached to a single parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Annotation {
    /// No type information at all.
    Absent,
    /// A type without a paired description.
    Bare(HostType),
    /// A type paired with a human-readable description.
    Described(HostType, Cow<'static, str>),
}

impl Annotation {
    /// Creates a [`Described`](Self::Described) annotation.
    pub fn described(ty: HostType, description: impl Into<Cow<'static, str>>) -> Self {
        Self::Described(ty, description.into())
    }

    /// Returns the annotated type, if any.
    #[must_use]
    pub fn host_type(&self) -> Option<&HostType> {
        match self {
            Self::Absent => None,
            Self::Bare(ty) | Self::Described(ty, _) => Some(ty),
        }
    }
}

/// A declared parameter: its name and annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    name: Cow<'static, str>,
    annotation: Annotation,
}

impl Parameter {
    /// Creates a parameter with a static name. Usable in `static` items.
    #[must_use]
    pub const fn new(name: &'static str, annotation: Annotation) -> Self {
        Self {
            name: Cow::Borrowed(name),
            annotation,
        }
    }

    /// Creates a parameter with an owned name.
    pub fn owned(name: impl Into<String>, annotation: Annotation) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            annotation,
        }
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameter annotation.
    #[must_use]
    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }
}

/// Reflection facility over a single callable.
///
/// Parameters are reported in declaration order; for methods the receiver is
/// the first parameter.
pub trait Introspect {
    /// Returns the declared function name.
    fn name(&self) -> &str;

    /// Returns the attached documentation, if any.
    fn doc_comment(&self) -> Option<&str>;

    /// Returns the declared parameters in order.
    fn parameters(&self) -> &[Parameter];

    /// Returns the annotation of the named parameter.
    ///
    /// When a name is declared twice the later declaration wins.
    fn parameter_annotation(&self, name: &str) -> Option<&Annotation> {
        self.parameters()
            .iter()
            .rev()
            .find(|param| param.name() == name)
            .map(Parameter::annotation)
    }

    /// Returns the declared return type, or `None` when undeclared.
    fn return_annotation(&self) -> Option<&HostType>;
}

impl<T: Introspect + ?Sized> Introspect for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn doc_comment(&self) -> Option<&str> {
        (**self).doc_comment()
    }

    fn parameters(&self) -> &[Parameter] {
        (**self).parameters()
    }

    fn parameter_annotation(&self, name: &str) -> Option<&Annotation> {
        (**self).parameter_annotation(name)
    }

    fn return_annotation(&self) -> Option<&HostType> {
        (**self).return_annotation()
    }
}

impl<T: Introspect + ?Sized> Introspect for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn doc_comment(&self) -> Option<&str> {
        (**self).doc_comment()
    }

    fn parameters(&self) -> &[Parameter] {
        (**self).parameters()
    }

    fn parameter_annotation(&self, name: &str) -> Option<&Annotation> {
        (**self).parameter_annotation(name)
    }

    fn return_annotation(&self) -> Option<&HostType> {
        (**self).return_annotation()
    }
}

/// A group of method signatures, generated by `#[describe_methods]`.
pub trait SignatureSet {
    /// Returns the signatures of every described method, in declaration order.
    fn signatures() -> Vec<&'static dyn Introspect>;
}

/// An owned, hand-built function signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    name: String,
    doc: Option<String>,
    parameters: Vec<Parameter>,
    returns: Option<HostType>,
}

impl FunctionSignature {
    /// Creates a signature with no docs, no parameters and no return type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            parameters: Vec::new(),
            returns: None,
        }
    }

    /// Attaches a doc comment.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, annotation: Annotation) -> Self {
        self.parameters.push(Parameter::owned(name, annotation));
        self
    }

    /// Appends an unannotated `self` receiver, as a bound method would declare.
    #[must_use]
    pub fn with_receiver(self) -> Self {
        self.with_parameter("self", Annotation::Absent)
    }

    /// Declares the return type.
    #[must_use]
    pub fn with_return(mut self, ty: HostType) -> Self {
        self.returns = Some(ty);
        self
    }
}

impl Introspect for FunctionSignature {
    fn name(&self) -> &str {
        &self.name
    }

    fn doc_comment(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    fn return_annotation(&self) -> Option<&HostType> {
        self.returns.as_ref()
    }
}
