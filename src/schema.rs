//! Schema nodes
//!
//! A schema node is a JSON object describing one position in the data tree:
//!
//! ```json
//! {
//!     "type": "object",
//!     "properties": {
//!         "id": { "type": "integer" },
//!         "tags": { "type": "array", "items": { "type": "string" } }
//!     }
//! }
//! ```
//!
//! Nodes are read lazily while the data is walked, so a malformed part of a
//! schema is only reported when the walker actually reaches it.

use serde_json::{Map, Value};

use crate::error::{Result, SchemaError};
use crate::path::FieldPath;

const NODE_FORMAT: &str =
    "Type description (schema) must be an object of form {\"type\": .., \"properties\"?: {..}, \"items\"?: {..}}";
const ITEMS_FORMAT: &str =
    "Type description (schema) of values must be an object of form {\"type\": .., \"properties\"?: {..}, \"items\"?: {..}}";
const PROPERTIES_FORMAT: &str =
    "Description of properties must be an object mapping property names to type descriptions";
const PROPERTY_FORMAT: &str =
    "Type description (schema) of property value must be an object of form {\"type\": .., \"properties\"?: {..}, \"items\"?: {..}}";
const TYPE_FORMAT: &str = "Type name must be a string";

/// Whether a value counts as "nothing" in a schema position.
///
/// `null`, `false`, `0`, `""`, `"0"`, `[]` and `{}` are all blank.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Borrowed view of one schema node
#[derive(Debug, Clone, Copy)]
pub struct SchemaNode<'a> {
    raw: &'a Map<String, Value>,
}

impl<'a> SchemaNode<'a> {
    /// View `value` as a schema node located at `path`
    pub fn new(value: &'a Value, path: &FieldPath) -> Result<Self> {
        Self::with_format(value, path, NODE_FORMAT)
    }

    fn with_format(value: &'a Value, path: &FieldPath, format: &str) -> Result<Self> {
        match value {
            Value::Object(raw) => Ok(Self { raw }),
            _ => Err(SchemaError::InvalidFormat {
                path: path.clone(),
                message: format.to_string(),
            }),
        }
    }

    /// The declared type name
    pub fn type_name(&self, path: &FieldPath) -> Result<&'a str> {
        match self.raw.get("type") {
            None | Some(Value::Null) => Err(SchemaError::TypeNotDefined { path: path.clone() }),
            Some(Value::String(name)) => Ok(name.as_str()),
            Some(_) => Err(SchemaError::InvalidFormat {
                path: path.clone(),
                message: TYPE_FORMAT.to_string(),
            }),
        }
    }

    /// Schema shared by all children, if one is given
    pub fn items(&self, path: &FieldPath) -> Result<Option<SchemaNode<'a>>> {
        match self.raw.get("items") {
            Some(items) if !is_blank(items) => {
                Self::with_format(items, path, ITEMS_FORMAT).map(Some)
            }
            _ => Ok(None),
        }
    }

    /// Declared properties, if any are given
    pub fn properties(&self, path: &FieldPath) -> Result<Option<Properties<'a>>> {
        match self.raw.get("properties") {
            Some(Value::Object(raw)) if !raw.is_empty() => Ok(Some(Properties { raw })),
            Some(properties) if !is_blank(properties) => Err(SchemaError::InvalidFormat {
                path: path.clone(),
                message: PROPERTIES_FORMAT.to_string(),
            }),
            _ => Ok(None),
        }
    }
}

/// The `properties` object of a schema node
#[derive(Debug, Clone, Copy)]
pub struct Properties<'a> {
    raw: &'a Map<String, Value>,
}

impl<'a> Properties<'a> {
    /// Property names with their raw descriptions, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Value)> {
        self.raw.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// View one property description as a schema node
    pub fn node(description: &'a Value, path: &FieldPath) -> Result<SchemaNode<'a>> {
        SchemaNode::with_format(description, path, PROPERTY_FORMAT)
    }
}
