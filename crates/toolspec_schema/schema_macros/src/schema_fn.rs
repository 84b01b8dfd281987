//! Code generation for `#[tool_schema]` on free functions.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{FnArg, ItemFn};

use crate::common::{
    described_return_type, extract_doc_comments, generate_signature, parse_param, to_pascal_case,
    validate_signature,
};
use crate::crate_path::schema_crate;

/// Generates a `Callable` struct for a `#[tool_schema]` function.
///
/// The macro emits:
/// - The original function, with `#[default]` parameter markers removed
/// - A `<Name>Schema` unit struct implementing `Callable`
pub(crate) fn generate_schema_fn(input: &ItemFn) -> TokenStream {
    if let Some(err) = validate_signature(&input.sig) {
        return err;
    }

    let ts = schema_crate();

    let fn_name = &input.sig.ident;
    let fn_name_str = fn_name.unraw().to_string();
    let struct_name = format_ident!("{}Schema", to_pascal_case(&fn_name_str));
    let struct_doc = format!("Schema source for `{fn_name_str}`.");

    let docstring = extract_doc_comments(&input.attrs);

    let params: Vec<_> = input
        .sig
        .inputs
        .iter()
        .filter_map(|arg| {
            if let FnArg::Typed(pat_type) = arg {
                parse_param(pat_type)
            } else {
                None
            }
        })
        .collect();

    let signature_code = generate_signature(
        &fn_name_str,
        docstring.as_deref(),
        &params,
        described_return_type(&input.sig.output),
        &ts,
    );

    // Parameter attributes are only markers for this macro; rustc rejects them.
    let mut cleaned = input.clone();
    for arg in &mut cleaned.sig.inputs {
        if let FnArg::Typed(pat_type) = arg {
            pat_type
                .attrs
                .retain(|attr| !attr.path().is_ident("default") && !attr.path().is_ident("doc"));
        }
    }

    let vis = &input.vis;

    quote! {
        #cleaned

        #[doc = #struct_doc]
        #[derive(Debug, Clone, Copy, Default)]
        #vis struct #struct_name;

        impl #ts::Callable for #struct_name {
            fn signature(&self) -> #ts::Signature {
                #signature_code
            }
        }
    }
}
