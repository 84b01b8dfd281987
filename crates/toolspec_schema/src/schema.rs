//! Schema assembly.
//!
//! [`build_schema`] combines a callable's [`Signature`] with its parsed
//! docstring into a [`SchemaRecord`]. Every parameter must be typed and
//! documented; there is no partial result.

use crate::convert::{SchemaFragment, convert};
use crate::docstring::{self, ParamDoc, clean_docstring};
use crate::error::SchemaError;
use crate::signature::{Callable, Signature};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key under which the return schema is emitted.
pub const RETURN_KEY: &str = "return";

/// Schema information for a single parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterInfo {
    /// Parameter name.
    pub name: String,
    /// Description from the docstring, with any choices annotation removed.
    pub description: String,
    /// Schema fragment for the parameter's type.
    pub schema: SchemaFragment,
    /// Legal values from a `(choices: [...])` annotation.
    pub choices: Option<Vec<String>>,
    /// Whether callers must supply the parameter.
    pub required: bool,
}

impl ParameterInfo {
    /// Merges the description and choices into the type fragment.
    #[must_use]
    pub fn into_property(self) -> SchemaFragment {
        let mut property = self.schema;
        if let Some(choices) = self.choices {
            property.insert(
                "enum".to_string(),
                Value::Array(choices.into_iter().map(Value::String).collect()),
            );
        }
        property.insert("description".to_string(), Value::String(self.description));
        property
    }
}

/// The `parameters` object of a schema record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParametersSchema {
    /// Always `"object"`.
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Property fragments keyed by parameter name, in declaration order.
    pub properties: IndexMap<String, SchemaFragment>,
    /// Names of parameters without a default, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl ParametersSchema {
    /// Builds the object schema from per-parameter information.
    pub fn from_parameters(parameters: impl IntoIterator<Item = ParameterInfo>) -> Self {
        let mut properties = IndexMap::new();
        let mut required = Vec::new();

        for param in parameters {
            if param.required {
                required.push(param.name.clone());
            }
            properties.insert(param.name.clone(), param.into_property());
        }

        Self {
            schema_type: "object".to_string(),
            properties,
            required,
        }
    }
}

/// A complete, machine-readable description of a callable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaRecord {
    /// Callable name.
    pub name: String,
    /// Main docstring description.
    pub description: String,
    /// Parameter object schema.
    pub parameters: ParametersSchema,
    /// Return value schema, when the callable declares a return type.
    #[serde(rename = "return", default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<SchemaFragment>,
}

impl SchemaRecord {
    /// Serializes the record to JSON.
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Wraps the record in the `{"type": "function", "function": ...}`
    /// envelope used by function-calling APIs and chat templates.
    pub fn to_tool_definition(&self) -> Result<Value, serde_json::Error> {
        Ok(serde_json::json!({
            "type": "function",
            "function": self.to_json()?
        }))
    }
}

/// Builds the schema record for `callable`.
///
/// # Errors
///
/// Fails with [`SchemaError`] when the docstring is missing or malformed,
/// when a parameter has no type or no `Args:` entry, or when a type cannot
/// be converted.
pub fn build_schema<C: Callable + ?Sized>(callable: &C) -> Result<SchemaRecord, SchemaError> {
    let signature = callable.signature();
    let function = signature.name.as_str();

    let docstring = signature
        .docstring
        .as_deref()
        .map(clean_docstring)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| SchemaError::missing_docstring(function))?;
    let sections = docstring::parse(&docstring)
        .map_err(|source| SchemaError::docstring_format(function, source))?;

    tracing::debug!(
        function,
        parameters = signature.parameters.len(),
        "building tool schema"
    );

    let mut return_type = signature.returns.as_ref();
    let mut parameters = Vec::with_capacity(signature.parameters.len());

    for parameter in &signature.parameters {
        let name = parameter.name.as_str();
        if name == RETURN_KEY {
            return_type = parameter.type_descriptor.as_ref().or(return_type);
            continue;
        }

        let descriptor = parameter
            .type_descriptor
            .as_ref()
            .ok_or_else(|| SchemaError::missing_type_hint(function, name))?;
        let ParamDoc {
            description,
            choices,
        } = sections
            .parameters
            .get(name)
            .cloned()
            .ok_or_else(|| SchemaError::missing_description(function, name))?;
        let schema =
            convert(descriptor).map_err(|source| SchemaError::invalid_type(function, name, source))?;

        tracing::trace!(function, parameter = name, %descriptor, "converted parameter");

        parameters.push(ParameterInfo {
            name: name.to_string(),
            description,
            schema,
            choices,
            required: parameter.is_required(),
        });
    }

    warn_about_unknown_args(&signature, &sections.parameters);

    let returns = match return_type {
        Some(descriptor) => {
            let mut fragment = convert(descriptor)
                .map_err(|source| SchemaError::invalid_type(function, RETURN_KEY, source))?;
            if let Some(description) = sections.returns {
                fragment.insert("description".to_string(), Value::String(description));
            }
            Some(fragment)
        }
        None => {
            if sections.returns.is_some() {
                tracing::warn!(
                    function,
                    "docstring has a Returns section but no return type is declared; ignoring it"
                );
            }
            None
        }
    };

    let record = SchemaRecord {
        name: signature.name.clone(),
        description: sections.description.unwrap_or_default(),
        parameters: ParametersSchema::from_parameters(parameters),
        returns,
    };

    tracing::debug!(
        function,
        properties = record.parameters.properties.len(),
        required = record.parameters.required.len(),
        "built tool schema"
    );
    Ok(record)
}

fn warn_about_unknown_args(signature: &Signature, documented: &IndexMap<String, ParamDoc>) {
    for name in documented.keys() {
        if !signature.parameters.iter().any(|param| &param.name == name) {
            tracing::warn!(
                function = signature.name.as_str(),
                parameter = name.as_str(),
                "docstring documents a parameter the signature does not declare"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::TypeDescriptor;
    use crate::signature::Parameter;
    use serde_json::json;

    #[test]
    fn parameter_info_merges_enum_before_description() {
        let mut schema = SchemaFragment::new();
        schema.insert("type".to_string(), json!("string"));
        let info = ParameterInfo {
            name: "mode".to_string(),
            description: "mode".to_string(),
            schema,
            choices: Some(vec!["fast".to_string(), "slow".to_string()]),
            required: true,
        };

        let property = info.into_property();
        assert_eq!(
            property.keys().collect::<Vec<_>>(),
            ["type", "enum", "description"]
        );
    }

    #[test]
    fn required_is_omitted_when_empty() {
        let signature = Signature::new("ping")
            .with_docstring("Ping.\n\nArgs:\n    host: where")
            .parameter(Parameter::new("host", TypeDescriptor::STRING).with_default());

        let json = build_schema(&signature).unwrap().to_json().unwrap();
        assert!(json["parameters"].get("required").is_none());
        assert!(json.get("return").is_none());
    }

    #[test]
    fn tool_definition_envelope() {
        let signature = Signature::new("noop").with_docstring("Does nothing.");
        let definition = build_schema(&signature)
            .unwrap()
            .to_tool_definition()
            .unwrap();
        assert_eq!(
            definition,
            json!({
                "type": "function",
                "function": {
                    "name": "noop",
                    "description": "Does nothing.",
                    "parameters": {"type": "object", "properties": {}}
                }
            })
        );
    }
}
