//! Container types: ordered sequences (`array`) and keyed mappings (`object`)

use std::borrow::Cow;

use serde_json::{Map, Value};

use super::{TypeShape, TypeValidator};
use crate::error::TypeMismatch;

/// Ordered sequence with contiguous zero-based indices
///
/// JSON arrays always qualify. A mapping qualifies when its keys are exactly
/// `"0"`, `"1"`, ... `"n-1"` in insertion order; it is converted to an array.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexedArrayType;

impl IndexedArrayType {
    pub const ERROR_MESSAGE: &'static str = "Value is not an indexed array.";

    /// Whether the mapping's keys form the range `0..len` in order
    pub fn is_index_sequence(map: &Map<String, Value>) -> bool {
        !map.is_empty()
            && map
                .keys()
                .enumerate()
                .all(|(idx, key)| *key == idx.to_string())
    }
}

impl TypeValidator for IndexedArrayType {
    fn validate<'v>(&self, value: &'v Value) -> Result<Cow<'v, Value>, TypeMismatch> {
        match value {
            Value::Null | Value::Array(_) => Ok(Cow::Borrowed(value)),
            Value::Object(map) if Self::is_index_sequence(map) => {
                Ok(Cow::Owned(Value::Array(map.values().cloned().collect())))
            }
            _ => Err(TypeMismatch::new(Self::ERROR_MESSAGE)),
        }
    }

    fn shape(&self) -> TypeShape {
        TypeShape::Sequence
    }
}

/// Keyed mapping with arbitrary keys
///
/// Every JSON object qualifies. A sequence qualifies only when it is not a
/// genuine ordered sequence, which for decoded JSON leaves the empty array;
/// it is converted to an empty mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssocArrayType;

impl AssocArrayType {
    pub const ERROR_MESSAGE: &'static str = "Value is not associative array";
}

impl TypeValidator for AssocArrayType {
    fn validate<'v>(&self, value: &'v Value) -> Result<Cow<'v, Value>, TypeMismatch> {
        match value {
            Value::Null | Value::Object(_) => Ok(Cow::Borrowed(value)),
            Value::Array(items) if items.is_empty() => Ok(Cow::Owned(Value::Object(Map::new()))),
            _ => Err(TypeMismatch::new(Self::ERROR_MESSAGE)),
        }
    }

    fn shape(&self) -> TypeShape {
        TypeShape::Mapping
    }
}
