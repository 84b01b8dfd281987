//! Mapping Rust types onto type descriptors.
//!
//! - [`Describe`] — implemented for the standard scalar, collection, tuple
//!   and map types, and for the common smart pointers, which describe as
//!   their pointee.
//!
//! Implement it for your own types to make them usable in `#[tool_schema]`
//! functions.

use crate::descriptor::TypeDescriptor;
use indexmap::{IndexMap, IndexSet};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// A type with a known [`TypeDescriptor`].
pub trait Describe {
    /// Returns the descriptor for `Self`.
    fn describe() -> TypeDescriptor;
}

macro_rules! describe_as {
    ($descriptor:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe() -> TypeDescriptor {
                    $descriptor
                }
            }
        )+
    };
}

describe_as!(TypeDescriptor::INTEGER =>
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
);
describe_as!(TypeDescriptor::NUMBER => f32, f64);
describe_as!(TypeDescriptor::STRING => String, str, char, Cow<'_, str>);
describe_as!(TypeDescriptor::BOOLEAN => bool);
describe_as!(TypeDescriptor::NULL => ());
describe_as!(TypeDescriptor::ANY => serde_json::Value);
describe_as!(TypeDescriptor::map_of(TypeDescriptor::ANY) => serde_json::Map<String, serde_json::Value>);

// Transparent wrappers.

impl<T: Describe + ?Sized> Describe for &T {
    fn describe() -> TypeDescriptor {
        T::describe()
    }
}

impl<T: Describe + ?Sized> Describe for &mut T {
    fn describe() -> TypeDescriptor {
        T::describe()
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn describe() -> TypeDescriptor {
        T::describe()
    }
}

impl<T: Describe + ?Sized> Describe for Rc<T> {
    fn describe() -> TypeDescriptor {
        T::describe()
    }
}

impl<T: Describe + ?Sized> Describe for Arc<T> {
    fn describe() -> TypeDescriptor {
        T::describe()
    }
}

impl<T: Describe> Describe for Option<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::optional(T::describe())
    }
}

// Sequences.

impl<T: Describe> Describe for [T] {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::list_of(T::describe())
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::list_of(T::describe())
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::list_of(T::describe())
    }
}

impl<T: Describe> Describe for VecDeque<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::list_of(T::describe())
    }
}

impl<T: Describe> Describe for BTreeSet<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::list_of(T::describe())
    }
}

impl<T: Describe, S> Describe for HashSet<T, S> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::list_of(T::describe())
    }
}

impl<T: Describe, S> Describe for IndexSet<T, S> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::list_of(T::describe())
    }
}

// Maps. Keys serialize as JSON object keys, so only the value type matters.

impl<K, V: Describe> Describe for BTreeMap<K, V> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::map_of(V::describe())
    }
}

impl<K, V: Describe, S> Describe for HashMap<K, V, S> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::map_of(V::describe())
    }
}

impl<K, V: Describe, S> Describe for IndexMap<K, V, S> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::map_of(V::describe())
    }
}

// Tuples. `(T,)` is describable but fails conversion: a one-element tuple
// is almost always a mistake for `T` or `Vec<T>`.

macro_rules! describe_tuple {
    ($($name:ident),+) => {
        impl<$($name: Describe),+> Describe for ($($name,)+) {
            fn describe() -> TypeDescriptor {
                TypeDescriptor::tuple([$($name::describe()),+])
            }
        }
    };
}

describe_tuple!(A);
describe_tuple!(A, B);
describe_tuple!(A, B, C);
describe_tuple!(A, B, C, D);
describe_tuple!(A, B, C, D, E);
describe_tuple!(A, B, C, D, E, F);
