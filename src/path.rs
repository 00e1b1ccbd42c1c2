//! Field paths used to locate values in error messages
//!
//! The root has no rendering at all. A first-level child renders as its bare
//! key or index (`obj`, `0`); every deeper level is appended in brackets
//! (`obj[objProp2]`, `arrFloat[0]`, `matrix[1][2]`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Location of a value inside the data tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// The root of the data tree
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of a mapping entry below this one
    pub fn child(&self, key: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(key.into());
        Self { segments }
    }

    /// Path of a sequence element below this one
    pub fn index(&self, idx: usize) -> Self {
        self.child(idx.to_string())
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of levels below the root
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// `"<path>: "` for nested paths, empty at the root
    pub fn prefix(&self) -> String {
        if self.is_root() {
            String::new()
        } else {
            format!("{}: ", self)
        }
    }

    /// Attach a message to this location
    pub fn message(&self, message: impl fmt::Display) -> String {
        format!("{}{}", self.prefix(), message)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut segments = self.segments.iter();
        if let Some(first) = segments.next() {
            write!(f, "{}", first)?;
        }
        for segment in segments {
            write!(f, "[{}]", segment)?;
        }
        Ok(())
    }
}
