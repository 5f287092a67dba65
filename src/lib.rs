//! Tool-definition schemas for chat-completion APIs, generated from Rust
//! function signatures.
//!
//! Annotate functions with `#[describe]` (or impl blocks with
//! `#[describe_methods]`), or build [`FunctionSignature`](prelude::FunctionSignature)
//! values by hand, then hand them to a [`Generator`](prelude::Generator).
//!
//! ```
//! use tooldef::prelude::*;
//!
//! let ping = FunctionSignature::new("ping").with_doc("Checks liveness.\nDetails.");
//! let tools = generate_tools([&ping])?;
//!
//! assert_eq!(tools[0].function.name, "ping");
//! assert_eq!(tools[0].function.description, "Checks liveness.");
//! # Ok::<(), SchemaError>(())
//! ```

pub use tooldef_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use tooldef_internal::prelude::*;
}
