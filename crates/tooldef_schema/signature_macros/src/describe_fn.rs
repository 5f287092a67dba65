//! Code generation for `#[describe]` on standalone functions.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ItemFn;
use tooldef_macro_utils::schema_crate_path;

use crate::common::{
    SignatureSpec, classify_return, extract_doc_comments, generate_signature, parse_params,
    strip_param_docs, to_pascal_case, validate_free_function, validate_signature,
};

/// Generates a signature struct for a standalone `#[describe]` function.
///
/// The function itself is kept, minus parameter doc comments, alongside:
/// - A `<Name>Signature` unit struct
/// - An `Introspect` impl for it carrying the function's static metadata
pub(crate) fn generate_describe_fn(input: &ItemFn) -> TokenStream {
    if let Some(err) = validate_signature(&input.sig) {
        return err;
    }
    if let Some(err) = validate_free_function(&input.sig) {
        return err;
    }

    let params = match parse_params(&input.sig.inputs) {
        Ok(params) => params,
        Err(err) => return err,
    };

    let pt = schema_crate_path();
    let fn_name = input.sig.ident.to_string();

    let spec = SignatureSpec {
        struct_name: format_ident!("{}Signature", to_pascal_case(&fn_name)),
        vis: &input.vis,
        doc: extract_doc_comments(&input.attrs),
        returns: classify_return(&input.sig.output),
        fn_name,
        params,
    };
    let signature = generate_signature(&spec, &pt);

    let mut cleaned = input.clone();
    strip_param_docs(&mut cleaned.sig);

    quote! {
        #cleaned

        #signature
    }
}
