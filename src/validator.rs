//! JSON data validation against a schema of named types
//!
//! The schema and the data are walked together. Each schema node names a type
//! in the [`TypeRegistry`]; the value at that position is coerced by the
//! type's validator and, for container types, the walk continues into its
//! children.
//!
//! Schema sample:
//!
//! ```json
//! {
//!     "type": "object",
//!     "properties": {
//!         "obj": {
//!             "type": "object",
//!             "properties": {
//!                 "objProp1": { "type": "integer" },
//!                 "objProp2": { "type": "phone" },
//!                 "objProp3": { "type": "array", "items": { "type": "string" } }
//!             }
//!         },
//!         "arrFloat": { "type": "array", "items": { "type": "float" } },
//!         "str": { "type": "string" },
//!         "arr": { "type": "array" },
//!         "objInt": { "type": "object", "items": { "type": "integer" } }
//!     }
//! }
//! ```
//!
//! `arr` is an array of anything, `objInt` is a mapping with arbitrary keys
//! whose values are all integers.
//!
//! Two kinds of failure are kept apart. A value that does not fit its type, or
//! a declared property that is missing, is recorded in
//! [`ValidationResult::errors`] and the walk goes on with the siblings. A
//! schema that cannot be interpreted aborts the whole call with a
//! [`SchemaError`].

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::ValidatorConfig;
use crate::error::{Result, SchemaError};
use crate::path::FieldPath;
use crate::registry::TypeRegistry;
use crate::schema::{is_blank, Properties, SchemaNode};
use crate::types::TypeShape;

/// Nesting limit applied when none is configured
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Outcome of a validation that could be carried out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Path-prefixed data errors, in the order they were found
    pub errors: Vec<String>,
    /// The coerced data
    pub data: Value,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validates JSON data against a schema
#[derive(Debug, Clone)]
pub struct JsonSchemaValidator {
    registry: TypeRegistry,
    max_depth: usize,
}

impl JsonSchemaValidator {
    pub fn new(registry: TypeRegistry) -> Self {
        Self {
            registry,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Limit how deep below the root the walk may go
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Build a validator from configuration: built-ins, configured custom
    /// types and the configured depth limit
    pub fn from_config(config: &ValidatorConfig) -> Result<Self> {
        let registry = config.build_registry()?;
        Ok(Self::new(registry).with_max_depth(config.validation.max_depth))
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Validate the JSON text `raw_data` against the JSON text `schema`
    pub fn validate(&self, schema: &str, raw_data: &str) -> Result<ValidationResult> {
        let data = decode(raw_data).map_err(|e| SchemaError::InvalidData(e.to_string()))?;
        let schema = decode(schema).map_err(|e| SchemaError::InvalidSchema(e.to_string()))?;
        self.validate_value(&schema, data)
    }

    /// Validate already decoded data against an already decoded schema
    pub fn validate_value(&self, schema: &Value, data: Value) -> Result<ValidationResult> {
        if is_empty_data(&data) {
            tracing::debug!("no data to validate");
            return Ok(ValidationResult {
                errors: Vec::new(),
                data,
            });
        }
        if is_blank(schema) {
            return Err(SchemaError::SchemaNotDefined);
        }

        tracing::debug!(max_depth = self.max_depth, "validating data");
        let root = FieldPath::root();
        let mut walker = Walker {
            registry: &self.registry,
            max_depth: self.max_depth,
            errors: Vec::new(),
        };
        let node = SchemaNode::new(schema, &root)?;
        let data = walker.walk_type(node, data, &root)?;

        tracing::debug!(errors = walker.errors.len(), "validation finished");
        Ok(ValidationResult {
            errors: walker.errors,
            data,
        })
    }
}

impl Default for JsonSchemaValidator {
    fn default() -> Self {
        Self::new(TypeRegistry::new())
    }
}

/// Blank input text decodes to `null`
fn decode(text: &str) -> serde_json::Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text)
}

fn is_empty_data(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// State of one validation call
struct Walker<'r> {
    registry: &'r TypeRegistry,
    max_depth: usize,
    errors: Vec<String>,
}

impl Walker<'_> {
    fn walk_type(&mut self, node: SchemaNode<'_>, value: Value, path: &FieldPath) -> Result<Value> {
        if path.depth() > self.max_depth {
            return Err(SchemaError::DepthExceeded {
                path: path.clone(),
                limit: self.max_depth,
            });
        }

        let type_name = node.type_name(path)?;
        let registry = self.registry;
        let validator = registry
            .resolve(type_name)
            .ok_or_else(|| SchemaError::UnsupportedType {
                path: path.clone(),
                name: type_name.to_string(),
            })?;
        tracing::trace!(path = %path, type_name, "validating value");

        let outcome = validator.validate(&value).map(|coerced| match coerced {
            Cow::Borrowed(_) => None,
            Cow::Owned(coerced) => Some(coerced),
        });
        let value = match outcome {
            Ok(Some(coerced)) => coerced,
            Ok(None) => value,
            Err(mismatch) => {
                self.errors.push(path.message(&mismatch));
                return Ok(value);
            }
        };

        match validator.shape() {
            TypeShape::Scalar => Ok(value),
            TypeShape::Sequence => self.walk_sequence(node, value, path),
            TypeShape::Mapping => self.walk_mapping(node, value, path),
        }
    }

    fn walk_sequence(&mut self, node: SchemaNode<'_>, value: Value, path: &FieldPath) -> Result<Value> {
        let items = match value {
            Value::Array(items) if !items.is_empty() => items,
            other => return Ok(other),
        };
        let Some(item_node) = node.items(path)? else {
            return Ok(Value::Array(items));
        };

        items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| self.walk_type(item_node, item, &path.index(idx)))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }

    fn walk_mapping(&mut self, node: SchemaNode<'_>, value: Value, path: &FieldPath) -> Result<Value> {
        let map = match value {
            Value::Object(map) if !map.is_empty() => map,
            other => return Ok(other),
        };

        // `items` wins over `properties` when both are given
        if let Some(item_node) = node.items(path)? {
            let mut coerced = Map::with_capacity(map.len());
            for (key, child) in map {
                let child = self.walk_type(item_node, child, &path.child(key.as_str()))?;
                coerced.insert(key, child);
            }
            return Ok(Value::Object(coerced));
        }

        match node.properties(path)? {
            Some(properties) => self.walk_properties(properties, map, path),
            None => Ok(Value::Object(map)),
        }
    }

    /// Only declared properties make it into the output
    fn walk_properties(
        &mut self,
        properties: Properties<'_>,
        mut map: Map<String, Value>,
        path: &FieldPath,
    ) -> Result<Value> {
        let mut coerced = Map::with_capacity(properties.len());
        for (name, description) in properties.iter() {
            let child_path = path.child(name);
            let Some(child) = map.remove(name) else {
                self.errors
                    .push(child_path.message(format_args!("Property \"{}\" is not defined", name)));
                continue;
            };
            let child_node = Properties::node(description, &child_path)?;
            let child = self.walk_type(child_node, child, &child_path)?;
            coerced.insert(name.to_string(), child);
        }
        Ok(Value::Object(coerced))
    }
}
