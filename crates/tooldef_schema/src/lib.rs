//! Tool-calling schema generation for chat-completion APIs.
//!
//! This crate turns function definitions into the `tools` array that
//! chat-completion APIs accept: each function's name, the first line of its
//! documentation, and a typed, described parameter list. Functions are only
//! described, never called.
//!
//! # Quick Start
//!
//! ```ignore
//! use tooldef_schema::{describe, Generator, GeneratorConfig};
//!
//! #[describe]
//! /// Get the current weather for a city.
//! fn get_weather(
//!     /// City name.
//!     city: String,
//!     /// Use metric units.
//!     metric: bool,
//! ) -> String {
//!     format!("Sunny in {city}")
//! }
//!
//! let generator = Generator::new(GeneratorConfig::new());
//! let tools = generator.generate_json([&GetWeatherSignature])?;
//! ```
//!
//! # Architecture
//!
//! - [`Introspect`]: reflection interface over one callable
//! - [`FunctionSignature`]: hand-built [`Introspect`] value
//! - [`SignatureSet`]: method signatures grouped by `#[describe_methods]`
//! - [`GeneratorConfig`] / [`TypeMap`]: strictness, type mapping, renames
//! - [`ValidationPolicy`]: strict/lenient decision table
//! - [`Introspector`]: one function to a [`FunctionDescriptor`]
//! - [`Generator`]: a batch to [`ToolDescriptor`]s, with the return-type check
//! - [`load_manifest`]: signatures for functions defined outside Rust

// Self-reference so that `#[describe]` output can use `tooldef_schema::` paths within this crate.
extern crate self as tooldef_schema;

pub mod config;
pub mod error;
pub mod generator;
pub mod introspect;
pub mod manifest;
pub mod policy;
pub mod reflect;
pub mod schema;

// Re-export core types at crate root.
pub use config::{GeneratorConfig, TypeMap};
pub use error::{ManifestError, SchemaError};
pub use generator::{Generator, generate_tools, introspect};
pub use introspect::Introspector;
pub use manifest::load_manifest;
pub use policy::ValidationPolicy;
pub use reflect::{Annotation, FunctionSignature, HostType, Introspect, Parameter, SignatureSet};
pub use schema::{FunctionDescriptor, ParameterDescriptor, ParametersSchema, ToolDescriptor};

// Re-export proc macros.
pub use signature_macros::{describe, describe_methods};
