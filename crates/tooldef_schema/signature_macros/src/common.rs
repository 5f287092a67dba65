//! Shared utilities for signature macro code generation.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{
    Attribute, Expr, ExprLit, FnArg, GenericArgument, Ident, Lit, Meta, Pat, PathArguments,
    ReturnType, Signature, Type, Visibility,
};

/// Validates that a function signature can be described statically.
///
/// Rejects generic functions, whose parameter types are not known until
/// instantiation.
pub(crate) fn validate_signature(sig: &Signature) -> Option<TokenStream> {
    if !sig.generics.params.is_empty() {
        return Some(
            syn::Error::new_spanned(
                &sig.generics,
                "#[describe] does not support generic parameters",
            )
            .to_compile_error(),
        );
    }

    None
}

/// Validates that a standalone `#[describe]` function has no receiver (`&self`).
pub(crate) fn validate_free_function(sig: &Signature) -> Option<TokenStream> {
    if let Some(FnArg::Receiver(receiver)) = sig.inputs.first() {
        return Some(
            syn::Error::new_spanned(
                receiver,
                "#[describe] standalone functions cannot have a `self` receiver; \
                 use #[describe_methods] on the impl block instead",
            )
            .to_compile_error(),
        );
    }
    None
}

/// Host type classification of a Rust type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HostKind {
    String,
    Integer,
    Float,
    Boolean,
    Other(String),
}

/// Parsed annotation of a single declared parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParamAnnotation {
    /// Method receiver; carries no type annotation.
    Absent,
    /// Typed parameter without doc comments.
    Bare(HostKind),
    /// Typed parameter with doc comments.
    Described(HostKind, String),
}

/// Parsed information about a single declared parameter.
#[derive(Debug, Clone)]
pub(crate) struct ParamInfo {
    /// Parameter name (`self` for receivers).
    pub name: String,
    /// Classified annotation.
    pub annotation: ParamAnnotation,
}

/// Extracts doc comment text from attributes.
pub(crate) fn extract_doc_comments(attrs: &[Attribute]) -> Option<String> {
    let mut docs = Vec::new();

    for attr in attrs {
        if attr.path().is_ident("doc")
            && let Meta::NameValue(meta) = &attr.meta
            && let Expr::Lit(ExprLit {
                lit: Lit::Str(lit_str),
                ..
            }) = &meta.value
        {
            docs.push(lit_str.value().trim().to_string());
        }
    }

    if docs.is_empty() {
        None
    } else {
        Some(docs.join("\n"))
    }
}

/// Parses every declared parameter, receivers included, in order.
///
/// Fails on parameters bound by a pattern rather than a plain identifier.
pub(crate) fn parse_params(inputs: &Punctuated<FnArg, Comma>) -> Result<Vec<ParamInfo>, TokenStream> {
    inputs
        .iter()
        .map(|arg| match arg {
            FnArg::Receiver(_) => Ok(ParamInfo {
                name: "self".to_string(),
                annotation: ParamAnnotation::Absent,
            }),
            FnArg::Typed(pat_type) => {
                let Pat::Ident(pat_ident) = &*pat_type.pat else {
                    return Err(syn::Error::new_spanned(
                        &pat_type.pat,
                        "#[describe] parameters must be plain identifiers",
                    )
                    .to_compile_error());
                };

                let kind = classify_type(&pat_type.ty);
                let annotation = match extract_doc_comments(&pat_type.attrs) {
                    Some(description) => ParamAnnotation::Described(kind, description),
                    None => ParamAnnotation::Bare(kind),
                };

                Ok(ParamInfo {
                    name: pat_ident.ident.to_string(),
                    annotation,
                })
            }
        })
        .collect()
}

/// Removes doc comments from typed parameters; rustc rejects them there.
pub(crate) fn strip_param_docs(sig: &mut Signature) {
    for input in &mut sig.inputs {
        if let FnArg::Typed(pat_type) = input {
            pat_type.attrs.retain(|attr| !attr.path().is_ident("doc"));
        }
    }
}

/// Classifies a Rust type, looking through references and parentheses.
pub(crate) fn classify_type(ty: &Type) -> HostKind {
    match ty {
        Type::Reference(reference) => classify_type(&reference.elem),
        Type::Paren(paren) => classify_type(&paren.elem),
        Type::Group(group) => classify_type(&group.elem),
        Type::Path(type_path) if type_path.qself.is_none() => {
            let Some(segment) = type_path.path.segments.last() else {
                return HostKind::Other(render_type(ty));
            };
            let ident = segment.ident.to_string();
            let plain = matches!(segment.arguments, PathArguments::None);

            match ident.as_str() {
                "String" | "str" | "char" if plain => HostKind::String,
                "Cow" if is_cow_str(&segment.arguments) => HostKind::String,
                "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32"
                | "u64" | "u128" | "usize"
                    if plain =>
                {
                    HostKind::Integer
                }
                "f32" | "f64" if plain => HostKind::Float,
                "bool" if plain => HostKind::Boolean,
                _ => HostKind::Other(render_type(ty)),
            }
        }
        _ => HostKind::Other(render_type(ty)),
    }
}

/// Returns whether the arguments of `Cow<..>` borrow `str`.
fn is_cow_str(arguments: &PathArguments) -> bool {
    let PathArguments::AngleBracketed(args) = arguments else {
        return false;
    };
    args.args.iter().any(|arg| {
        matches!(arg, GenericArgument::Type(Type::Path(inner))
            if inner.path.is_ident("str"))
    })
}

/// Renders a type as compact source text, e.g. `Vec<String>`.
pub(crate) fn render_type(ty: &Type) -> String {
    let spaced = quote!(#ty).to_string();
    let chars: Vec<char> = spaced.chars().collect();
    let is_word = |c: char| c.is_alphanumeric() || c == '_' || c == '\'';

    let mut rendered = String::with_capacity(spaced.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' {
            let before = i.checked_sub(1).map(|j| chars[j]);
            let after = chars.get(i + 1).copied();
            if matches!((before, after), (Some(b), Some(a)) if is_word(b) && is_word(a)) {
                rendered.push(' ');
            }
        } else {
            rendered.push(c);
        }
    }
    rendered
}

/// Extracts the declared return type, looking through `Result<T, E>` to `T`.
pub(crate) fn classify_return(output: &ReturnType) -> Option<HostKind> {
    let ReturnType::Type(_, ty) = output else {
        return None;
    };
    let ty: &Type = ty;

    Some(classify_type(unwrap_result_inner(ty).unwrap_or(ty)))
}

/// Extracts `T` from `Result<T, E>`, returning `None` if the type is not `Result`.
fn unwrap_result_inner(ty: &Type) -> Option<&Type> {
    if let Type::Path(type_path) = ty
        && let Some(segment) = type_path.path.segments.last()
        && segment.ident == "Result"
        && let PathArguments::AngleBracketed(args) = &segment.arguments
        && let Some(GenericArgument::Type(inner)) = args.args.first()
    {
        Some(inner)
    } else {
        None
    }
}

/// Converts a `snake_case` string to `PascalCase`.
pub(crate) fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
            }
        })
        .collect()
}

fn host_type_tokens(kind: &HostKind, pt: &TokenStream) -> TokenStream {
    match kind {
        HostKind::String => quote! { #pt::HostType::String },
        HostKind::Integer => quote! { #pt::HostType::Integer },
        HostKind::Float => quote! { #pt::HostType::Float },
        HostKind::Boolean => quote! { #pt::HostType::Boolean },
        HostKind::Other(name) => quote! { #pt::HostType::other(#name) },
    }
}

fn annotation_tokens(annotation: &ParamAnnotation, pt: &TokenStream) -> TokenStream {
    match annotation {
        ParamAnnotation::Absent => quote! { #pt::Annotation::Absent },
        ParamAnnotation::Bare(kind) => {
            let ty = host_type_tokens(kind, pt);
            quote! { #pt::Annotation::Bare(#ty) }
        }
        ParamAnnotation::Described(kind, description) => {
            let ty = host_type_tokens(kind, pt);
            quote! {
                #pt::Annotation::Described(#ty, ::std::borrow::Cow::Borrowed(#description))
            }
        }
    }
}

/// Everything needed to emit one signature struct.
pub(crate) struct SignatureSpec<'a> {
    pub struct_name: Ident,
    pub vis: &'a Visibility,
    pub fn_name: String,
    pub doc: Option<String>,
    pub params: Vec<ParamInfo>,
    pub returns: Option<HostKind>,
}

/// Generates a unit struct implementing `Introspect` with static metadata.
pub(crate) fn generate_signature(spec: &SignatureSpec<'_>, pt: &TokenStream) -> TokenStream {
    let SignatureSpec {
        struct_name,
        vis,
        fn_name,
        doc,
        params,
        returns,
    } = spec;

    let struct_doc = format!("Signature of the `{fn_name}` function.");

    let doc_code = match doc {
        Some(text) => quote! { ::core::option::Option::Some(#text) },
        None => quote! { ::core::option::Option::None },
    };

    let param_count = params.len();
    let param_entries: Vec<_> = params
        .iter()
        .map(|param| {
            let name = &param.name;
            let annotation = annotation_tokens(&param.annotation, pt);
            quote! { #pt::Parameter::new(#name, #annotation) }
        })
        .collect();

    let returns_code = match returns {
        Some(kind) => {
            let ty = host_type_tokens(kind, pt);
            quote! { ::core::option::Option::Some(#ty) }
        }
        None => quote! { ::core::option::Option::None },
    };

    let parameters_ident = format_ident!("PARAMETERS");
    let returns_ident = format_ident!("RETURNS");

    quote! {
        #[doc = #struct_doc]
        #[derive(Debug, Clone, Copy, Default)]
        #vis struct #struct_name;

        impl #pt::Introspect for #struct_name {
            fn name(&self) -> &str {
                #fn_name
            }

            fn doc_comment(&self) -> ::core::option::Option<&str> {
                #doc_code
            }

            fn parameters(&self) -> &[#pt::Parameter] {
                static #parameters_ident: [#pt::Parameter; #param_count] = [
                    #(#param_entries),*
                ];
                &#parameters_ident
            }

            fn return_annotation(&self) -> ::core::option::Option<&#pt::HostType> {
                static #returns_ident: ::core::option::Option<#pt::HostType> = #returns_code;
                #returns_ident.as_ref()
            }
        }
    }
}
