//! Shared utilities for schema macro code generation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{
    Attribute, Expr, ExprLit, FnArg, GenericArgument, Lit, Meta, Pat, PatType, PathArguments,
    ReturnType, Signature, Type,
};

/// Validates that a function signature can be described by `#[tool_schema]`.
///
/// Rejects methods, generic functions, `impl Trait` in argument or return
/// position, and destructuring argument patterns.
pub(crate) fn validate_signature(sig: &Signature) -> Option<TokenStream> {
    if let Some(FnArg::Receiver(receiver)) = sig.inputs.first() {
        return Some(
            syn::Error::new_spanned(
                receiver,
                "#[tool_schema] cannot be applied to methods; \
                 describe a free function instead",
            )
            .to_compile_error(),
        );
    }

    if !sig.generics.params.is_empty() {
        return Some(
            syn::Error::new_spanned(
                &sig.generics,
                "#[tool_schema] does not support generic parameters",
            )
            .to_compile_error(),
        );
    }

    for arg in &sig.inputs {
        let FnArg::Typed(pat_type) = arg else {
            continue;
        };
        if !matches!(*pat_type.pat, Pat::Ident(_)) {
            return Some(
                syn::Error::new_spanned(
                    &pat_type.pat,
                    "#[tool_schema] parameters must be plain identifiers",
                )
                .to_compile_error(),
            );
        }
        if let Type::ImplTrait(impl_trait) = &*pat_type.ty {
            return Some(
                syn::Error::new_spanned(
                    impl_trait,
                    "#[tool_schema] cannot describe `impl Trait` parameters; use a concrete type",
                )
                .to_compile_error(),
            );
        }
    }

    if let ReturnType::Type(_, ty) = &sig.output
        && let Type::ImplTrait(impl_trait) = ty.as_ref()
    {
        return Some(
            syn::Error::new_spanned(
                impl_trait,
                "#[tool_schema] cannot describe an `impl Trait` return type; use a concrete type",
            )
            .to_compile_error(),
        );
    }

    None
}

/// Parsed information about a single function parameter.
#[derive(Debug, Clone)]
pub(crate) struct ParamInfo {
    /// Parameter name, without any `r#` prefix.
    pub name: String,
    /// Parameter type.
    pub ty: Type,
    /// Whether the parameter carries a `#[default]` marker.
    pub has_default: bool,
}

/// Collects doc comment text from attributes, one line per attribute.
///
/// Lines are kept verbatim (including the space after `///`); indentation
/// is normalized when the docstring is parsed.
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
            docs.push(lit_str.value());
        }
    }

    if docs.is_empty() {
        None
    } else {
        Some(docs.join("\n"))
    }
}

/// Parses a typed function parameter into a [`ParamInfo`].
pub(crate) fn parse_param(pat_type: &PatType) -> Option<ParamInfo> {
    let Pat::Ident(pat_ident) = &*pat_type.pat else {
        return None;
    };

    Some(ParamInfo {
        name: pat_ident.ident.unraw().to_string(),
        ty: (*pat_type.ty).clone(),
        has_default: pat_type
            .attrs
            .iter()
            .any(|attr| attr.path().is_ident("default")),
    })
}

/// Returns the type a function produces for its caller.
///
/// `Result<T, E>` (under any path) yields `T`; `()` and `!` yield nothing.
pub(crate) fn described_return_type(return_type: &ReturnType) -> Option<&Type> {
    let ReturnType::Type(_, ty) = return_type else {
        return None;
    };
    let ty: &Type = ty;
    let ty = unwrap_result_ok(ty).unwrap_or(ty);

    let produces_nothing = matches!(ty, Type::Never(_))
        || matches!(ty, Type::Tuple(tuple) if tuple.elems.is_empty());
    (!produces_nothing).then_some(ty)
}

/// Extracts `T` from `Result<T, ..>`, returning `None` if the type is not a `Result`.
fn unwrap_result_ok(ty: &Type) -> Option<&Type> {
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

/// Generates the `signature()` body, producing a `Signature`.
pub(crate) fn generate_signature(
    fn_name: &str,
    docstring: Option<&str>,
    params: &[ParamInfo],
    return_type: Option<&Type>,
    ts: &TokenStream,
) -> TokenStream {
    let doc_builder = docstring
        .map(|doc| quote! { .with_docstring(#doc) })
        .unwrap_or_default();

    let param_builders = params.iter().map(|param| {
        let name = &param.name;
        let ty = &param.ty;
        let default_code = if param.has_default {
            quote! { .with_default() }
        } else {
            quote! {}
        };
        quote! {
            .parameter(
                #ts::Parameter::new(#name, <#ty as #ts::Describe>::describe())
                    #default_code
            )
        }
    });

    let return_builder = return_type
        .map(|ty| quote! { .returns(<#ty as #ts::Describe>::describe()) })
        .unwrap_or_default();

    quote! {
        #ts::Signature::new(#fn_name)
            #doc_builder
            #(#param_builders)*
            #return_builder
    }
}
