//! Error types for schema generation.
//!
//! [`TypeError`] and [`DocstringError`] come from the converter and the
//! docstring parser, which know nothing about the callable they serve.
//! [`SchemaError`] wraps them with the callable's name (and the parameter's,
//! where there is one) so a failing docstring can be fixed without reading
//! the source.

use crate::descriptor::TypeDescriptor;
use thiserror::Error;

/// Errors raised while converting a [`TypeDescriptor`].
#[derive(Debug, Error)]
pub enum TypeError {
    /// The descriptor is outside the supported vocabulary.
    #[error("unsupported type `{descriptor}`; only primitives, optionals, unions, lists, tuples and string-keyed maps can be described")]
    Unsupported {
        /// Rendered descriptor.
        descriptor: String,
    },

    /// A tuple with exactly one element.
    #[error(
        "tuple[{element}] has a single element; use the unwrapped type `{element}` instead, \
         list each position explicitly (e.g. tuple[{element}, {element}]), \
         or use list[{element}] for variable-length input"
    )]
    SingleElementTuple {
        /// Rendered element type.
        element: String,
    },

    /// A tuple containing the `...` marker.
    #[error("`...` is not supported in tuple types ({descriptor}); use a list for variable-length input")]
    VariadicTuple {
        /// Rendered tuple descriptor.
        descriptor: String,
    },

    /// The `...` marker outside of a union or list.
    #[error("`...` can only appear inside a union or list")]
    StrayVariadic,
}

impl TypeError {
    /// Creates an [`Unsupported`](Self::Unsupported) error.
    pub fn unsupported(descriptor: &TypeDescriptor) -> Self {
        Self::Unsupported {
            descriptor: descriptor.to_string(),
        }
    }
}

/// Errors raised while parsing a docstring.
#[derive(Debug, Error)]
pub enum DocstringError {
    /// An `Args:` line without a `name: description` separator.
    #[error("Args line `{line}` is not of the form `name: description`")]
    MissingSeparator {
        /// The offending line, trimmed.
        line: String,
    },

    /// An `Args:` line whose name part is empty.
    #[error("Args line `{line}` has an empty parameter name")]
    EmptyParameterName {
        /// The offending line, trimmed.
        line: String,
    },

    /// A `(choices: ...)` annotation that is not a JSON array of strings.
    #[error("choices for parameter '{parameter}' must be a JSON array of strings: {source}")]
    InvalidChoices {
        /// Parameter whose description carries the annotation.
        parameter: String,
        /// The underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised by [`build_schema`](crate::build_schema).
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The callable has no docstring, or only whitespace.
    #[error("cannot generate a schema for `{function}`: it has no docstring")]
    MissingDocstring {
        /// Callable name.
        function: String,
    },

    /// A parameter was declared without a type.
    #[error("cannot generate a schema for `{function}`: parameter '{parameter}' is missing a type")]
    MissingTypeHint {
        /// Callable name.
        function: String,
        /// Parameter name.
        parameter: String,
    },

    /// A parameter has no entry in the docstring's `Args:` block.
    #[error("cannot generate a schema for `{function}`: the docstring has no description for parameter '{parameter}'")]
    MissingDescription {
        /// Callable name.
        function: String,
        /// Parameter name.
        parameter: String,
    },

    /// The docstring does not follow the section grammar.
    #[error("cannot generate a schema for `{function}`: malformed docstring: {source}")]
    DocstringFormat {
        /// Callable name.
        function: String,
        /// What went wrong.
        #[source]
        source: DocstringError,
    },

    /// A parameter or return type cannot be converted.
    #[error("cannot generate a schema for `{function}`: invalid type for '{parameter}': {source}")]
    InvalidType {
        /// Callable name.
        function: String,
        /// Parameter name, or `return`.
        parameter: String,
        /// What went wrong.
        #[source]
        source: TypeError,
    },
}

impl SchemaError {
    /// Creates a [`MissingDocstring`](Self::MissingDocstring) error.
    pub fn missing_docstring(function: impl Into<String>) -> Self {
        Self::MissingDocstring {
            function: function.into(),
        }
    }

    /// Creates a [`MissingTypeHint`](Self::MissingTypeHint) error.
    pub fn missing_type_hint(function: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::MissingTypeHint {
            function: function.into(),
            parameter: parameter.into(),
        }
    }

    /// Creates a [`MissingDescription`](Self::MissingDescription) error.
    pub fn missing_description(function: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::MissingDescription {
            function: function.into(),
            parameter: parameter.into(),
        }
    }

    /// Creates a [`DocstringFormat`](Self::DocstringFormat) error.
    pub fn docstring_format(function: impl Into<String>, source: DocstringError) -> Self {
        Self::DocstringFormat {
            function: function.into(),
            source,
        }
    }

    /// Creates an [`InvalidType`](Self::InvalidType) error.
    pub fn invalid_type(
        function: impl Into<String>,
        parameter: impl Into<String>,
        source: TypeError,
    ) -> Self {
        Self::InvalidType {
            function: function.into(),
            parameter: parameter.into(),
            source,
        }
    }

    /// Returns the name of the callable the error was raised for.
    #[must_use]
    pub fn function(&self) -> &str {
        match self {
            Self::MissingDocstring { function }
            | Self::MissingTypeHint { function, .. }
            | Self::MissingDescription { function, .. }
            | Self::DocstringFormat { function, .. }
            | Self::InvalidType { function, .. } => function,
        }
    }

    /// Returns the offending parameter, when the error concerns one.
    #[must_use]
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::MissingTypeHint { parameter, .. }
            | Self::MissingDescription { parameter, .. }
            | Self::InvalidType { parameter, .. }
            | Self::DocstringFormat {
                source: DocstringError::InvalidChoices { parameter, .. },
                ..
            } => Some(parameter),
            Self::MissingDocstring { .. } | Self::DocstringFormat { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_function_and_parameter() {
        let err = SchemaError::missing_description("multiply", "y");
        let msg = err.to_string();
        assert!(msg.contains("multiply"), "got: {msg}");
        assert!(msg.contains("'y'"), "got: {msg}");
        assert_eq!(err.function(), "multiply");
        assert_eq!(err.parameter(), Some("y"));
    }

    #[test]
    fn single_element_tuple_message_gives_guidance() {
        let err = TypeError::SingleElementTuple {
            element: "integer".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("list[integer]"), "got: {msg}");
        assert!(msg.contains("tuple[integer, integer]"), "got: {msg}");
    }

    #[test]
    fn missing_docstring_has_no_parameter() {
        let err = SchemaError::missing_docstring("noop");
        assert_eq!(err.parameter(), None);
        assert!(err.to_string().contains("no docstring"));
    }
}
