//! Procedural macros for the tooldef schema generator.
//!
//! Provides `#[describe]` for standalone functions and `#[describe_methods]`
//! for methods on impl blocks. Both expose a function's name, doc comment,
//! parameter types and parameter docs through `tooldef_schema::Introspect`.

mod common;
mod describe_fn;
mod describe_methods;

use proc_macro::TokenStream;

/// Exposes a standalone function's signature.
///
/// Keeps the function and generates a `<Name>Signature` unit struct that
/// implements `Introspect`.
///
/// # Parameter Annotations
///
/// - `/// doc comment`: pairs the parameter's type with a description
/// - no doc comment: the parameter carries its type only
///
/// Return types are reported with `Result<T, E>` unwrapped to `T`.
///
/// # Example
///
/// ```
/// use tooldef_schema::{describe, Introspect};
///
/// #[describe]
/// /// Adds two numbers.
/// fn add(
///     /// First addend.
///     a: i64,
///     /// Second addend.
///     b: i64,
/// ) -> String {
///     (a + b).to_string()
/// }
///
/// assert_eq!(AddSignature.name(), "add");
/// assert_eq!(AddSignature.parameters().len(), 2);
/// assert_eq!(add(1, 2), "3");
/// ```
#[proc_macro_attribute]
pub fn describe(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as syn::ItemFn);
    describe_fn::generate_describe_fn(&input).into()
}

/// Exposes the signatures of `#[describe]` methods in an impl block.
///
/// Generates a `<Type><Method>Signature` struct per marked method and a
/// `SignatureSet` impl listing them. The receiver is reported as an
/// unannotated first parameter named `self`.
///
/// # Example
///
/// ```
/// use tooldef_schema::{describe_methods, Introspect, SignatureSet};
///
/// struct MathTools;
///
/// #[describe_methods]
/// impl MathTools {
///     #[describe]
///     /// Add two numbers.
///     fn add(
///         &self,
///         /// First number.
///         a: f64,
///         /// Second number.
///         b: f64,
///     ) -> String {
///         (a + b).to_string()
///     }
/// }
///
/// let signatures = MathTools::signatures();
/// assert_eq!(signatures.len(), 1);
/// assert_eq!(signatures[0].parameters()[0].name(), "self");
/// ```
#[proc_macro_attribute]
pub fn describe_methods(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as syn::ItemImpl);
    describe_methods::generate_describe_methods(&input).into()
}
