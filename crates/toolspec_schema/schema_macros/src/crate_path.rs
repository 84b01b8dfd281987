//! Locating `toolspec_schema` from the expansion site.

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

const SCHEMA_CRATE: &str = "toolspec_schema";
const UMBRELLA_CRATE: &str = "toolspec";

/// Path under which generated code reaches `toolspec_schema` items.
///
/// A direct dependency wins, under whatever name `Cargo.toml` gives it.
/// Otherwise the `toolspec` umbrella's re-export is used. If neither is
/// found the bare crate name is emitted and rustc reports the missing
/// dependency at the call site.
pub(crate) fn schema_crate() -> TokenStream {
    let schema = Ident::new(SCHEMA_CRATE, Span::call_site());

    match crate_name(SCHEMA_CRATE) {
        // `toolspec_schema` aliases itself with `extern crate self`.
        Ok(FoundCrate::Itself) => quote!(#schema),
        Ok(FoundCrate::Name(renamed)) => {
            let renamed = Ident::new(&renamed, Span::call_site());
            quote!(#renamed)
        }
        Err(_) => match crate_name(UMBRELLA_CRATE) {
            Ok(FoundCrate::Name(umbrella)) => {
                let umbrella = Ident::new(&umbrella, Span::call_site());
                quote!(#umbrella::#schema)
            }
            _ => quote!(#schema),
        },
    }
}
