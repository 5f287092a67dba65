//! Code generation for `#[describe_methods]` on impl blocks.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{ImplItem, ImplItemFn, ItemImpl, Type};
use tooldef_macro_utils::schema_crate_path;

use crate::common::{
    SignatureSpec, classify_return, extract_doc_comments, generate_signature, parse_params,
    strip_param_docs, to_pascal_case, validate_signature,
};

/// Generates signature structs and a `SignatureSet` impl for an impl block
/// with `#[describe]` methods.
pub(crate) fn generate_describe_methods(input: &ItemImpl) -> TokenStream {
    if let Some((_, path, _)) = &input.trait_ {
        return syn::Error::new_spanned(
            path,
            "#[describe_methods] applies to inherent impl blocks, not trait impls",
        )
        .to_compile_error();
    }

    let pt = schema_crate_path();

    let self_ty = &input.self_ty;
    let (impl_generics, _ty_generics, where_clause) = input.generics.split_for_impl();

    let Some(type_name) = type_name_str(self_ty) else {
        return syn::Error::new_spanned(self_ty, "#[describe_methods] impl target must be a path type")
            .to_compile_error();
    };

    // Find all methods marked with #[describe]
    let mut described: Vec<&ImplItemFn> = Vec::new();
    for item in &input.items {
        if let ImplItem::Fn(method) = item
            && method.attrs.iter().any(|attr| attr.path().is_ident("describe"))
        {
            if let Some(err) = validate_signature(&method.sig) {
                return err;
            }
            described.push(method);
        }
    }

    let mut signature_defs = Vec::with_capacity(described.len());
    let mut struct_names = Vec::with_capacity(described.len());
    for method in described {
        let params = match parse_params(&method.sig.inputs) {
            Ok(params) => params,
            Err(err) => return err,
        };

        let fn_name = method.sig.ident.to_string();
        let spec = SignatureSpec {
            struct_name: format_ident!("{}{}Signature", type_name, to_pascal_case(&fn_name)),
            vis: &method.vis,
            doc: extract_doc_comments(&method.attrs),
            returns: classify_return(&method.sig.output),
            fn_name,
            params,
        };

        signature_defs.push(generate_signature(&spec, &pt));
        struct_names.push(spec.struct_name);
    }

    // Remove #[describe] and param doc attrs from the original impl
    let cleaned_items: Vec<_> = input
        .items
        .iter()
        .map(|item| {
            if let ImplItem::Fn(method) = item {
                let mut cleaned = method.clone();
                cleaned.attrs.retain(|attr| !attr.path().is_ident("describe"));
                strip_param_docs(&mut cleaned.sig);
                ImplItem::Fn(cleaned)
            } else {
                item.clone()
            }
        })
        .collect();

    let attrs = &input.attrs;

    quote! {
        // Original impl block with attributes stripped
        #(#attrs)*
        impl #impl_generics #self_ty #where_clause {
            #(#cleaned_items)*
        }

        #(#signature_defs)*

        impl #impl_generics #pt::SignatureSet for #self_ty #where_clause {
            fn signatures() -> ::std::vec::Vec<&'static dyn #pt::Introspect> {
                ::std::vec![
                    #(&#struct_names as &'static dyn #pt::Introspect),*
                ]
            }
        }
    }
}

fn type_name_str(ty: &Type) -> Option<String> {
    if let Type::Path(type_path) = ty
        && let Some(segment) = type_path.path.segments.last()
    {
        return Some(segment.ident.to_string());
    }
    None
}
