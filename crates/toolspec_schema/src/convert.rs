//! Type descriptor to schema fragment conversion.
//!
//! [`convert`] maps a [`TypeDescriptor`] to a JSON-Schema-like fragment.
//! Nullability is expressed with a `nullable: true` flag rather than a
//! `"null"` entry in `type`, which is what most function-calling consumers
//! expect even though strict JSON Schema would spell it differently.
//!
//! Unions and lists share one rule for their members: when every member is
//! a primitive, the group collapses to a compact `type` list; otherwise each
//! member is converted on its own and combined under `anyOf`. The decision
//! is made once per union or list and is not re-applied to the members.

use crate::descriptor::{PrimitiveKind, TypeDescriptor};
use crate::error::TypeError;
use serde_json::{Map, Value};

/// A JSON object describing the shape of one value.
pub type SchemaFragment = Map<String, Value>;

/// Key of the nullability flag.
pub const NULLABLE: &str = "nullable";

/// Converts a type descriptor into a schema fragment.
///
/// Fails only on [`TypeDescriptor::Unsupported`], on a stray
/// [`TypeDescriptor::Variadic`] marker, and on tuples that are not of fixed
/// arity two or more.
pub fn convert(descriptor: &TypeDescriptor) -> Result<SchemaFragment, TypeError> {
    match descriptor {
        TypeDescriptor::Primitive(kind) => Ok(primitive(*kind)),
        TypeDescriptor::Optional(inner) => {
            let mut fragment = convert(inner)?;
            fragment.insert(NULLABLE.to_string(), Value::Bool(true));
            Ok(fragment)
        }
        TypeDescriptor::Union(members) => {
            let alternatives = Alternatives::collect(members);
            let mut fragment = alternatives.combine()?;
            if alternatives.nullable {
                fragment.insert(NULLABLE.to_string(), Value::Bool(true));
            }
            Ok(fragment)
        }
        TypeDescriptor::List(elements) => convert_list(elements),
        TypeDescriptor::Tuple(elements) => convert_tuple(descriptor, elements),
        TypeDescriptor::Map(value) => {
            let mut fragment = typed("object");
            if let Some(value) = value {
                fragment.insert(
                    "additionalProperties".to_string(),
                    Value::Object(convert(value)?),
                );
            }
            Ok(fragment)
        }
        TypeDescriptor::Variadic => Err(TypeError::StrayVariadic),
        TypeDescriptor::Unsupported(_) => Err(TypeError::unsupported(descriptor)),
    }
}

fn primitive(kind: PrimitiveKind) -> SchemaFragment {
    match kind.json_type() {
        Some(name) => typed(name),
        None => SchemaFragment::new(),
    }
}

fn typed(name: &str) -> SchemaFragment {
    let mut fragment = SchemaFragment::new();
    fragment.insert("type".to_string(), Value::String(name.to_string()));
    fragment
}

fn convert_list(elements: &[TypeDescriptor]) -> Result<SchemaFragment, TypeError> {
    let mut fragment = typed("array");
    if elements.is_empty() {
        return Ok(fragment);
    }

    let alternatives = Alternatives::collect(elements);
    fragment.insert("items".to_string(), Value::Object(alternatives.combine()?));
    if alternatives.nullable {
        fragment.insert(NULLABLE.to_string(), Value::Bool(true));
    }
    Ok(fragment)
}

fn convert_tuple(
    descriptor: &TypeDescriptor,
    elements: &[TypeDescriptor],
) -> Result<SchemaFragment, TypeError> {
    match elements {
        [] => return Ok(typed("array")),
        [element] => {
            return Err(TypeError::SingleElementTuple {
                element: element.to_string(),
            });
        }
        _ => {}
    }

    if elements.contains(&TypeDescriptor::Variadic) {
        return Err(TypeError::VariadicTuple {
            descriptor: descriptor.to_string(),
        });
    }

    let prefix_items = elements
        .iter()
        .map(|element| convert(element).map(Value::Object))
        .collect::<Result<Vec<_>, _>>()?;

    let mut fragment = typed("array");
    fragment.insert("prefixItems".to_string(), Value::Array(prefix_items));
    Ok(fragment)
}

/// Members of a union or list with `null` and `...` markers set aside.
struct Alternatives<'a> {
    members: Vec<&'a TypeDescriptor>,
    nullable: bool,
}

impl<'a> Alternatives<'a> {
    fn collect(members: &'a [TypeDescriptor]) -> Self {
        let nullable = members.iter().any(TypeDescriptor::is_null);
        let members = members
            .iter()
            .filter(|member| !member.is_null() && **member != TypeDescriptor::Variadic)
            .collect();
        Self { members, nullable }
    }

    /// Builds the fragment for the remaining members, without nullability.
    ///
    /// With nothing left, a group that held `null` admits only null; one
    /// that held only `...` markers is unconstrained.
    fn combine(&self) -> Result<SchemaFragment, TypeError> {
        if self.members.is_empty() {
            return Ok(if self.nullable {
                typed("null")
            } else {
                SchemaFragment::new()
            });
        }

        let kinds: Option<Vec<PrimitiveKind>> = self
            .members
            .iter()
            .map(|member| match member {
                TypeDescriptor::Primitive(kind) => Some(*kind),
                _ => None,
            })
            .collect();

        match kinds {
            Some(kinds) => Ok(collapse(&kinds)),
            None => {
                let mut any_of = self
                    .members
                    .iter()
                    .map(|member| convert(member))
                    .collect::<Result<Vec<_>, _>>()?;
                if any_of.len() == 1 {
                    return Ok(any_of.remove(0));
                }

                let mut fragment = SchemaFragment::new();
                fragment.insert(
                    "anyOf".to_string(),
                    Value::Array(any_of.into_iter().map(Value::Object).collect()),
                );
                Ok(fragment)
            }
        }
    }
}

/// Collapses primitive kinds into a `type` field.
///
/// An `any` member swallows the rest, since nothing narrower than an
/// unconstrained fragment can express it.
fn collapse(kinds: &[PrimitiveKind]) -> SchemaFragment {
    let mut names: Vec<&'static str> = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let Some(name) = kind.json_type() else {
            return SchemaFragment::new();
        };
        if !names.contains(&name) {
            names.push(name);
        }
    }

    let mut fragment = SchemaFragment::new();
    let type_value = match names.as_slice() {
        [single] => Value::String((*single).to_string()),
        _ => Value::Array(names.iter().map(|name| Value::from(*name)).collect()),
    };
    fragment.insert("type".to_string(), type_value);
    fragment
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn to_json(descriptor: &TypeDescriptor) -> Value {
        Value::Object(convert(descriptor).unwrap())
    }

    #[test]
    fn primitives_map_to_json_types() {
        assert_eq!(to_json(&TypeDescriptor::INTEGER), json!({"type": "integer"}));
        assert_eq!(to_json(&TypeDescriptor::NUMBER), json!({"type": "number"}));
        assert_eq!(to_json(&TypeDescriptor::STRING), json!({"type": "string"}));
        assert_eq!(to_json(&TypeDescriptor::BOOLEAN), json!({"type": "boolean"}));
        assert_eq!(to_json(&TypeDescriptor::NULL), json!({"type": "null"}));
        assert_eq!(to_json(&TypeDescriptor::ANY), json!({}));
    }

    #[test]
    fn optional_primitive_sets_nullable_flag() {
        let descriptor = TypeDescriptor::optional(TypeDescriptor::STRING);
        assert_eq!(
            to_json(&descriptor),
            json!({"type": "string", "nullable": true})
        );
    }

    #[test]
    fn optional_structure_keeps_shape_and_adds_flag() {
        let descriptor = TypeDescriptor::optional(TypeDescriptor::list_of(TypeDescriptor::INTEGER));
        assert_eq!(
            to_json(&descriptor),
            json!({"type": "array", "items": {"type": "integer"}, "nullable": true})
        );
    }

    #[test]
    fn primitive_union_collapses_to_type_list() {
        let descriptor = TypeDescriptor::union([TypeDescriptor::INTEGER, TypeDescriptor::NUMBER]);
        assert_eq!(to_json(&descriptor), json!({"type": ["integer", "number"]}));
    }

    #[test]
    fn null_member_becomes_flag_not_type() {
        let descriptor = TypeDescriptor::union([
            TypeDescriptor::STRING,
            TypeDescriptor::NULL,
            TypeDescriptor::BOOLEAN,
        ]);
        assert_eq!(
            to_json(&descriptor),
            json!({"type": ["string", "boolean"], "nullable": true})
        );

        let single = TypeDescriptor::union([TypeDescriptor::NULL, TypeDescriptor::INTEGER]);
        assert_eq!(
            to_json(&single),
            json!({"type": "integer", "nullable": true})
        );
    }

    #[test]
    fn union_with_structure_uses_any_of() {
        let descriptor = TypeDescriptor::union([
            TypeDescriptor::INTEGER,
            TypeDescriptor::list_of(TypeDescriptor::STRING),
        ]);
        assert_eq!(
            to_json(&descriptor),
            json!({"anyOf": [
                {"type": "integer"},
                {"type": "array", "items": {"type": "string"}}
            ]})
        );
    }

    #[test]
    fn structural_union_with_single_survivor_unwraps() {
        let descriptor = TypeDescriptor::union([
            TypeDescriptor::map_of(TypeDescriptor::INTEGER),
            TypeDescriptor::NULL,
        ]);
        assert_eq!(
            to_json(&descriptor),
            json!({
                "type": "object",
                "additionalProperties": {"type": "integer"},
                "nullable": true
            })
        );
    }

    #[test]
    fn optional_any_of_keeps_alternatives_and_adds_flag() {
        let descriptor = TypeDescriptor::optional(TypeDescriptor::union([
            TypeDescriptor::INTEGER,
            TypeDescriptor::list_of(TypeDescriptor::STRING),
        ]));
        let fragment = convert(&descriptor).unwrap();
        assert_eq!(fragment.keys().collect::<Vec<_>>(), ["anyOf", "nullable"]);
        assert_eq!(
            Value::Object(fragment),
            json!({
                "anyOf": [
                    {"type": "integer"},
                    {"type": "array", "items": {"type": "string"}}
                ],
                "nullable": true
            })
        );
    }

    #[test]
    fn null_member_beside_structures_flags_any_of() {
        let descriptor = TypeDescriptor::union([
            TypeDescriptor::NULL,
            TypeDescriptor::list_of(TypeDescriptor::STRING),
            TypeDescriptor::map_of(TypeDescriptor::INTEGER),
        ]);
        assert_eq!(
            to_json(&descriptor),
            json!({
                "anyOf": [
                    {"type": "array", "items": {"type": "string"}},
                    {"type": "object", "additionalProperties": {"type": "integer"}}
                ],
                "nullable": true
            })
        );
    }

    #[test]
    fn groups_emptied_by_filtering() {
        assert_eq!(
            to_json(&TypeDescriptor::list([TypeDescriptor::Variadic])),
            json!({"type": "array", "items": {}})
        );
        assert_eq!(
            to_json(&TypeDescriptor::union([TypeDescriptor::Variadic])),
            json!({})
        );
        assert_eq!(
            to_json(&TypeDescriptor::list([TypeDescriptor::NULL, TypeDescriptor::Variadic])),
            json!({"type": "array", "items": {"type": "null"}, "nullable": true})
        );
        assert_eq!(
            to_json(&TypeDescriptor::union([TypeDescriptor::NULL])),
            json!({"type": "null", "nullable": true})
        );
    }

    #[test]
    fn repeated_primitives_are_deduplicated() {
        assert_eq!(
            to_json(&TypeDescriptor::list([TypeDescriptor::INTEGER, TypeDescriptor::INTEGER])),
            json!({"type": "array", "items": {"type": "integer"}})
        );
        assert_eq!(
            to_json(&TypeDescriptor::union([
                TypeDescriptor::STRING,
                TypeDescriptor::NUMBER,
                TypeDescriptor::STRING,
            ])),
            json!({"type": ["string", "number"]})
        );
    }

    #[test]
    fn collapse_is_not_reapplied_inside_members() {
        let inner = TypeDescriptor::union([TypeDescriptor::STRING, TypeDescriptor::BOOLEAN]);
        let descriptor = TypeDescriptor::union([TypeDescriptor::INTEGER, inner]);
        assert_eq!(
            to_json(&descriptor),
            json!({"anyOf": [
                {"type": "integer"},
                {"type": ["string", "boolean"]}
            ]})
        );
    }

    #[test]
    fn any_member_leaves_union_unconstrained() {
        let descriptor = TypeDescriptor::union([
            TypeDescriptor::ANY,
            TypeDescriptor::INTEGER,
            TypeDescriptor::NULL,
        ]);
        assert_eq!(to_json(&descriptor), json!({"nullable": true}));
    }

    #[test]
    fn lists() {
        assert_eq!(to_json(&TypeDescriptor::list([])), json!({"type": "array"}));
        assert_eq!(
            to_json(&TypeDescriptor::list([
                TypeDescriptor::INTEGER,
                TypeDescriptor::STRING,
                TypeDescriptor::NULL,
            ])),
            json!({
                "type": "array",
                "items": {"type": ["integer", "string"]},
                "nullable": true
            })
        );
        assert_eq!(
            to_json(&TypeDescriptor::list([
                TypeDescriptor::list_of(TypeDescriptor::NUMBER),
                TypeDescriptor::BOOLEAN,
            ])),
            json!({
                "type": "array",
                "items": {"anyOf": [
                    {"type": "array", "items": {"type": "number"}},
                    {"type": "boolean"}
                ]}
            })
        );
    }

    #[test]
    fn tuples_use_prefix_items() {
        let descriptor = TypeDescriptor::tuple([
            TypeDescriptor::STRING,
            TypeDescriptor::optional(TypeDescriptor::INTEGER),
        ]);
        assert_eq!(
            to_json(&descriptor),
            json!({
                "type": "array",
                "prefixItems": [
                    {"type": "string"},
                    {"type": "integer", "nullable": true}
                ]
            })
        );
        assert_eq!(to_json(&TypeDescriptor::tuple([])), json!({"type": "array"}));
    }

    #[test]
    fn single_element_tuple_is_rejected() {
        let err = convert(&TypeDescriptor::tuple([TypeDescriptor::INTEGER])).unwrap_err();
        assert!(
            matches!(err, TypeError::SingleElementTuple { ref element } if element == "integer"),
            "got: {err:?}"
        );
    }

    #[test]
    fn variadic_tuple_is_rejected() {
        let err = convert(&TypeDescriptor::tuple([
            TypeDescriptor::INTEGER,
            TypeDescriptor::Variadic,
        ]))
        .unwrap_err();
        assert!(matches!(err, TypeError::VariadicTuple { .. }), "got: {err:?}");
    }

    #[test]
    fn maps() {
        assert_eq!(to_json(&TypeDescriptor::Map(None)), json!({"type": "object"}));
        assert_eq!(
            to_json(&TypeDescriptor::map_of(TypeDescriptor::ANY)),
            json!({"type": "object", "additionalProperties": {}})
        );
    }

    #[test]
    fn unsupported_fails_with_its_name() {
        let err = convert(&TypeDescriptor::list_of(TypeDescriptor::unsupported(
            "SocketAddr",
        )))
        .unwrap_err();
        assert!(err.to_string().contains("SocketAddr"), "got: {err}");
    }

    #[test]
    fn variadic_is_dropped_from_unions_and_rejected_alone() {
        let descriptor = TypeDescriptor::union([TypeDescriptor::INTEGER, TypeDescriptor::Variadic]);
        assert_eq!(to_json(&descriptor), json!({"type": "integer"}));
        assert!(matches!(
            convert(&TypeDescriptor::Variadic),
            Err(TypeError::StrayVariadic)
        ));
    }
}
