//! Schema generation for LLM-callable tools.
//!
//! Turns a callable's declared parameter types and its docstring into a
//! single JSON record describing the callable's name, purpose, parameters
//! and (optionally) its return value, ready to be advertised to a model
//! that must produce valid call arguments.
//!
//! # Quick Start
//!
//! ```
//! use toolspec_schema::{tool_schema, Callable};
//!
//! /// Multiplies two numbers.
//! ///
//! /// Args:
//! ///     x: first factor
//! ///     y: second factor
//! #[tool_schema]
//! fn multiply(x: f64, y: f64) -> f64 {
//!     x * y
//! }
//!
//! let schema = MultiplySchema.json_schema().unwrap();
//! assert_eq!(schema.name, "multiply");
//! assert_eq!(schema.parameters.required, ["x", "y"]);
//! ```
//!
//! # Architecture
//!
//! - [`TypeDescriptor`] — the closed set of type shapes
//! - [`convert`] — type descriptor → schema fragment
//! - [`docstring::parse`] — docstring → description, `Args:`, `Returns:`
//! - [`build_schema`] — merges both into a [`SchemaRecord`]
//! - [`Signature`] / [`Callable`] — the input boundary
//! - [`Describe`] — Rust type → [`TypeDescriptor`]

// Lets `#[tool_schema]`-generated code name `toolspec_schema::` paths from within this crate.
extern crate self as toolspec_schema;

pub mod convert;
pub mod describe;
pub mod descriptor;
pub mod docstring;
pub mod error;
pub mod schema;
pub mod signature;

pub use convert::{SchemaFragment, convert};
pub use describe::Describe;
pub use descriptor::{PrimitiveKind, TypeDescriptor};
pub use docstring::{DocstringSections, ParamDoc};
pub use error::{DocstringError, SchemaError, TypeError};
pub use schema::{ParameterInfo, ParametersSchema, RETURN_KEY, SchemaRecord, build_schema};
pub use signature::{Callable, Parameter, Signature};

#[cfg(feature = "macros")]
pub use schema_macros::tool_schema;
