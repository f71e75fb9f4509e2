use crate::error::{ConversionError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Property map keyed by name, kept in declaration order.
pub type Properties = IndexMap<String, JsonSchema>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum JsonSchema {
    Boolean(bool),
    Object(Box<SchemaObject>),
}

impl JsonSchema {
    /// Interpret an already parsed JSON value. Anything that is neither a
    /// boolean nor an object is not a schema.
    pub fn from_value(value: Value) -> Option<Self> {
        serde_json::from_value(value).ok()
    }

    pub fn as_object(&self) -> Option<&SchemaObject> {
        match self {
            JsonSchema::Object(obj) => Some(obj),
            JsonSchema::Boolean(_) => None,
        }
    }
}

/// The subset of JSON Schema the generators understand. Unknown keys are
/// dropped, and known keys with an unexpected shape read as absent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchemaObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type", default, deserialize_with = "type_tag")]
    pub type_: Option<TypeTag>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default, deserialize_with = "lenient_properties")]
    pub properties: Option<Properties>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "enum", default, deserialize_with = "lenient_enum")]
    pub enum_: Option<Vec<Value>>,

    // `null` is a present value here, so these keep it as `Some(Value::Null)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default, deserialize_with = "present")]
    pub default: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default, deserialize_with = "present")]
    pub minimum: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default, deserialize_with = "present")]
    pub maximum: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_firmware_version: Option<Value>,
}

impl SchemaObject {
    /// Object-shaped children in declaration order. Boolean schemas carry no
    /// fields and are skipped.
    pub fn properties(&self) -> impl Iterator<Item = (&String, &SchemaObject)> {
        self.properties
            .iter()
            .flatten()
            .filter_map(|(key, schema)| schema.as_object().map(|obj| (key, obj)))
    }

    pub fn kind(&self) -> Option<PropertyKind> {
        self.type_.as_ref().map(PropertyKind::of)
    }

    pub fn description_text(&self) -> &str {
        match &self.description {
            Some(Value::String(s)) => s.as_str(),
            _ => "",
        }
    }

    pub fn firmware_version(&self) -> Option<String> {
        self.minimum_firmware_version
            .as_ref()
            .map(|version| match version {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
    }
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

fn type_tag<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<TypeTag>, D::Error> {
    Value::deserialize(deserializer).map(|value| Some(TypeTag::from(value)))
}

fn lenient_enum<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<Vec<Value>>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => Some(values),
        _ => None,
    })
}

fn lenient_properties<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<Properties>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => Some(
            map.into_iter()
                .filter_map(|(key, value)| JsonSchema::from_value(value).map(|schema| (key, schema)))
                .collect(),
        ),
        _ => None,
    })
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum TypeTag {
    Single(String),
    Multiple(Vec<String>),
    /// Any other shape, kept as written.
    Other(Value),
}

impl From<Value> for TypeTag {
    fn from(value: Value) -> Self {
        match value {
            Value::String(tag) => TypeTag::Single(tag),
            Value::Array(items) if items.iter().all(Value::is_string) => TypeTag::Multiple(
                items
                    .into_iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
            ),
            other => TypeTag::Other(other),
        }
    }
}

impl TypeTag {
    /// Text shown in the table's type column.
    pub fn label(&self) -> String {
        match self {
            TypeTag::Single(tag) => tag.clone(),
            TypeTag::Multiple(tags) => tags.join("|"),
            TypeTag::Other(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Object,
    String,
    Integer,
    Number,
    Boolean,
    Other,
}

impl PropertyKind {
    pub fn of(tag: &TypeTag) -> Self {
        match tag {
            TypeTag::Single(tag) => match tag.as_str() {
                "object" => PropertyKind::Object,
                "string" => PropertyKind::String,
                "integer" => PropertyKind::Integer,
                "number" => PropertyKind::Number,
                "boolean" => PropertyKind::Boolean,
                _ => PropertyKind::Other,
            },
            TypeTag::Multiple(_) | TypeTag::Other(_) => PropertyKind::Other,
        }
    }
}

/// Parse schema text held in memory. Only JSON syntax errors fail; a
/// document that is not a schema object reads as an empty schema.
pub fn parse_schema(json_schema: &str) -> Result<JsonSchema> {
    let value: Value = serde_json::from_str(json_schema)
        .map_err(|e| ConversionError::MalformedInput(e.to_string()))?;
    Ok(JsonSchema::from_value(value).unwrap_or(JsonSchema::Boolean(true)))
}

/// Read and parse a schema file.
pub fn load_schema(path: impl AsRef<Path>) -> Result<JsonSchema> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied | ErrorKind::IsADirectory => {
            ConversionError::FileNotFound(path.to_path_buf())
        }
        ErrorKind::InvalidData => ConversionError::MalformedInput(e.to_string()),
        _ => ConversionError::Io(e),
    })?;
    log::debug!("Loaded {} bytes from {}", content.len(), path.display());
    parse_schema(&content)
}
