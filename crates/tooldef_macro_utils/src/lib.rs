//! Shared utilities for tooldef procedural macro crates.
//!
//! Generated code names the `tooldef_schema` runtime crate. A consumer may
//! depend on it directly, possibly renamed, or only through the `tooldef`
//! umbrella, which re-exports it as `tooldef::tooldef_schema`.

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Package name of the runtime crate.
const SCHEMA: &str = "tooldef_schema";

/// Package name of the umbrella crate.
const UMBRELLA: &str = "tooldef";

/// Returns the path generated code should use for `tooldef_schema`.
///
/// Reads the invoking crate's `Cargo.toml`. A missing dependency falls back
/// to the bare crate name, so the compiler reports the unresolved crate.
pub fn schema_crate_path() -> TokenStream {
    let direct = crate_name(SCHEMA).ok();
    // The umbrella only matters when the runtime crate is not a direct dependency.
    let umbrella = match direct {
        Some(_) => None,
        None => crate_name(UMBRELLA).ok(),
    };
    schema_path(direct, umbrella)
}

/// Chooses the path from the two manifest lookups.
fn schema_path(direct: Option<FoundCrate>, umbrella: Option<FoundCrate>) -> TokenStream {
    match (direct, umbrella) {
        (Some(FoundCrate::Name(name)), _) => {
            let ident = format_ident!("{}", name);
            quote!(#ident)
        }
        (None, Some(found)) => {
            // `Itself` here means a test or doctest of the umbrella crate.
            let umbrella = match found {
                FoundCrate::Itself => format_ident!("{}", UMBRELLA),
                FoundCrate::Name(name) => format_ident!("{}", name),
            };
            let schema = format_ident!("{}", SCHEMA);
            quote!(#umbrella::#schema)
        }
        _ => {
            let schema = format_ident!("{}", SCHEMA);
            quote!(#schema)
        }
    }
}
