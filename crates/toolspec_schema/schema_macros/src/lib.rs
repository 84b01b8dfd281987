//! Procedural macros for toolspec schema generation.
//!
//! Provides `#[tool_schema]`, which derives a `Callable` from a function's
//! signature and doc comments.

mod common;
mod crate_path;
mod schema_fn;

use proc_macro::TokenStream;

/// Derives a schema source from a documented function.
///
/// The function is left in place. Alongside it the macro generates a unit
/// struct `<Name>Schema` implementing `Callable`, whose signature carries
/// the function's name, its doc comments as the docstring, one parameter
/// per argument typed through `Describe`, and the return type (`T` for
/// `-> T` and `-> Result<T, E>`; none for `()`).
///
/// # Parameter Attributes
///
/// - `#[default]` or `#[default(value)]` — the parameter has a default and
///   is left out of `required`
///
/// # Example
///
/// ```
/// use toolspec_schema::{tool_schema, Callable};
///
/// /// Search for documents.
/// ///
/// /// Args:
/// ///     query: The search query.
/// ///     limit: Max results.
/// #[tool_schema]
/// fn search(query: String, #[default(10)] limit: usize) -> Vec<String> {
///     vec![format!("{query}:{limit}")]
/// }
///
/// let schema = SearchSchema.json_schema().unwrap();
/// assert_eq!(schema.parameters.required, ["query"]);
/// ```
#[proc_macro_attribute]
pub fn tool_schema(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new_spanned(
            proc_macro2::TokenStream::from(attr),
            "#[tool_schema] does not take arguments",
        )
        .to_compile_error()
        .into();
    }
    let input = syn::parse_macro_input!(item as syn::ItemFn);
    schema_fn::generate_schema_fn(&input).into()
}
