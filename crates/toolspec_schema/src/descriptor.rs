//! The closed vocabulary of type shapes the converter understands.
//!
//! A [`TypeDescriptor`] is an already-materialized view of a declared type.
//! Descriptors are produced by [`Describe`](crate::Describe) impls, by the
//! `#[tool_schema]` macro, or assembled by hand through the constructors
//! below.

use core::fmt;

/// Scalar kinds carried by [`TypeDescriptor::Primitive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Whole numbers.
    Integer,
    /// Floating point numbers.
    Number,
    /// Text.
    String,
    /// `true` / `false`.
    Boolean,
    /// The absent value.
    Null,
    /// Anything at all; converts to an unconstrained fragment.
    Any,
}

impl PrimitiveKind {
    /// Returns the JSON Schema `type` name, or `None` for [`Any`](Self::Any).
    #[must_use]
    pub fn json_type(self) -> Option<&'static str> {
        match self {
            Self::Integer => Some("integer"),
            Self::Number => Some("number"),
            Self::String => Some("string"),
            Self::Boolean => Some("boolean"),
            Self::Null => Some("null"),
            Self::Any => None,
        }
    }

    fn as_str(self) -> &'static str {
        self.json_type().unwrap_or("any")
    }
}

/// Abstract representation of a declared parameter or return type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// A scalar.
    Primitive(PrimitiveKind),
    /// The inner type, or null. Build with [`TypeDescriptor::optional`] to
    /// keep optionals from nesting.
    Optional(Box<TypeDescriptor>),
    /// Exactly one of the members. Expected to hold at least two members.
    Union(Vec<TypeDescriptor>),
    /// A homogeneous or heterogeneous list. No element types means the
    /// items are unconstrained.
    List(Vec<TypeDescriptor>),
    /// A fixed-length list with one type per position.
    Tuple(Vec<TypeDescriptor>),
    /// A string-keyed map, optionally constraining its values.
    Map(Option<Box<TypeDescriptor>>),
    /// The open-ended `...` marker. Dropped from unions and list elements,
    /// rejected everywhere else.
    Variadic,
    /// Anything outside the vocabulary, named for error reporting.
    Unsupported(String),
}

impl TypeDescriptor {
    /// `integer`
    pub const INTEGER: Self = Self::Primitive(PrimitiveKind::Integer);
    /// `number`
    pub const NUMBER: Self = Self::Primitive(PrimitiveKind::Number);
    /// `string`
    pub const STRING: Self = Self::Primitive(PrimitiveKind::String);
    /// `boolean`
    pub const BOOLEAN: Self = Self::Primitive(PrimitiveKind::Boolean);
    /// `null`
    pub const NULL: Self = Self::Primitive(PrimitiveKind::Null);
    /// Unconstrained.
    pub const ANY: Self = Self::Primitive(PrimitiveKind::Any);

    /// Wraps `inner` as optional. An already-optional `inner` is returned
    /// unchanged.
    #[must_use]
    pub fn optional(inner: Self) -> Self {
        match inner {
            Self::Optional(_) => inner,
            other => Self::Optional(Box::new(other)),
        }
    }

    /// Creates a union of `members`.
    #[must_use]
    pub fn union(members: impl IntoIterator<Item = Self>) -> Self {
        Self::Union(members.into_iter().collect())
    }

    /// Creates a list constrained to `elements`.
    #[must_use]
    pub fn list(elements: impl IntoIterator<Item = Self>) -> Self {
        Self::List(elements.into_iter().collect())
    }

    /// Creates a list of a single element type.
    #[must_use]
    pub fn list_of(element: Self) -> Self {
        Self::List(vec![element])
    }

    /// Creates a fixed-length tuple.
    #[must_use]
    pub fn tuple(elements: impl IntoIterator<Item = Self>) -> Self {
        Self::Tuple(elements.into_iter().collect())
    }

    /// Creates a string-keyed map with values of type `value`.
    #[must_use]
    pub fn map_of(value: Self) -> Self {
        Self::Map(Some(Box::new(value)))
    }

    /// Creates a descriptor for a type outside the supported vocabulary.
    #[must_use]
    pub fn unsupported(name: impl Into<String>) -> Self {
        Self::Unsupported(name.into())
    }

    /// Returns `true` for [`Primitive`](Self::Primitive) descriptors.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Returns `true` for the `null` primitive.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Primitive(PrimitiveKind::Null))
    }
}

impl From<PrimitiveKind> for TypeDescriptor {
    fn from(kind: PrimitiveKind) -> Self {
        Self::Primitive(kind)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(kind) => write!(f, "{kind}"),
            Self::Optional(inner) => write!(f, "optional[{inner}]"),
            Self::Union(members) => write_generic(f, "union", members),
            Self::List(elements) => write_generic(f, "list", elements),
            Self::Tuple(elements) => write_generic(f, "tuple", elements),
            Self::Map(Some(value)) => write!(f, "map[string, {value}]"),
            Self::Map(None) => f.write_str("map"),
            Self::Variadic => f.write_str("..."),
            Self::Unsupported(name) => f.write_str(name),
        }
    }
}

fn write_generic(f: &mut fmt::Formatter<'_>, head: &str, args: &[TypeDescriptor]) -> fmt::Result {
    f.write_str(head)?;
    if args.is_empty() {
        return Ok(());
    }
    f.write_str("[")?;
    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{arg}")?;
    }
    f.write_str("]")
}
