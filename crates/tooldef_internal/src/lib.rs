//! # Tooldef Internal Library
//!
//! Re-exports the tooldef crates for convenience.

/// Schema generation from function signatures.
pub use tooldef_schema;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use tooldef_schema::{
        Annotation, FunctionDescriptor, FunctionSignature, Generator, GeneratorConfig, HostType,
        Introspect, ManifestError, SchemaError, SignatureSet, ToolDescriptor, TypeMap, describe,
        describe_methods, generate_tools, introspect, load_manifest,
    };
}
