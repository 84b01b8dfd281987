//! Callable signatures: the input side of schema generation.
//!
//! A [`Signature`] carries what a schema is built from: the callable's name,
//! its docstring, its parameters in declaration order and, optionally, its
//! return type. The `#[tool_schema]` macro produces one from a function
//! definition; it can also be assembled by hand.

use crate::descriptor::TypeDescriptor;
use crate::error::SchemaError;
use crate::schema::{SchemaRecord, build_schema};

/// A declared parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Parameter name, unique within its signature.
    pub name: String,
    /// Declared type, if any.
    pub type_descriptor: Option<TypeDescriptor>,
    /// Whether the parameter has a default value.
    pub has_default: bool,
}

impl Parameter {
    /// Creates a typed parameter without a default.
    pub fn new(name: impl Into<String>, type_descriptor: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            type_descriptor: Some(type_descriptor),
            has_default: false,
        }
    }

    /// Creates a parameter that was declared without a type.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_descriptor: None,
            has_default: false,
        }
    }

    /// Marks the parameter as having a default value.
    #[must_use]
    pub fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }

    /// Returns `true` when callers must supply this parameter.
    #[must_use]
    pub fn is_required(&self) -> bool {
        !self.has_default
    }
}

/// A callable's name, docstring, parameters and return type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signature {
    /// Callable name.
    pub name: String,
    /// Raw docstring text.
    pub docstring: Option<String>,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
    /// Declared return type.
    pub returns: Option<TypeDescriptor>,
}

impl Signature {
    /// Creates an empty signature for the callable `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the docstring.
    #[must_use]
    pub fn with_docstring(mut self, docstring: impl Into<String>) -> Self {
        self.docstring = Some(docstring.into());
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Sets the return type.
    #[must_use]
    pub fn returns(mut self, type_descriptor: TypeDescriptor) -> Self {
        self.returns = Some(type_descriptor);
        self
    }
}

/// Anything that can describe its own signature.
///
/// Implemented by [`Signature`] itself and by the structs the
/// `#[tool_schema]` macro generates.
pub trait Callable {
    /// Returns the callable's signature.
    fn signature(&self) -> Signature;

    /// Builds the callable's schema record.
    fn json_schema(&self) -> Result<SchemaRecord, SchemaError> {
        build_schema(self)
    }
}

impl Callable for Signature {
    fn signature(&self) -> Signature {
        self.clone()
    }
}
