//! Type Registry
//!
//! Maps type names used in schemas (`"type": "integer"`) to type validators.
//! Built once per validator and read-only afterwards, so a single registry
//! can be shared across threads.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Result, SchemaError};
use crate::types::{
    AssocArrayType, FloatType, IndexedArrayType, IntegerType, RuPhoneNumberType, StringType,
    TypeValidator,
};

/// Extension kind name for the bundled Russian phone number type
pub const RU_PHONE_EXTENSION: &str = "ru_phone";

/// The type registry
#[derive(Clone)]
pub struct TypeRegistry {
    types: HashMap<String, Arc<dyn TypeValidator>>,
}

impl TypeRegistry {
    /// Registry seeded with the built-in types
    pub fn new() -> Self {
        let mut registry = Self {
            types: HashMap::new(),
        };
        registry
            .register("integer", IntegerType)
            .register("float", FloatType)
            .register("string", StringType)
            .register("array", IndexedArrayType)
            .register("object", AssocArrayType);
        registry
    }

    /// Built-in types overlaid with caller-supplied entries
    ///
    /// A custom entry with a built-in's name replaces the built-in.
    pub fn with_custom<I, S>(custom: I) -> Self
    where
        I: IntoIterator<Item = (S, Arc<dyn TypeValidator>)>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for (name, validator) in custom {
            registry.types.insert(name.into(), validator);
        }
        registry
    }

    /// Register a type, replacing any existing entry with the same name
    pub fn register(
        &mut self,
        name: impl Into<String>,
        validator: impl TypeValidator + 'static,
    ) -> &mut Self {
        self.types.insert(name.into(), Arc::new(validator));
        self
    }

    /// Look up a type by name
    pub fn resolve(&self, name: &str) -> Option<&dyn TypeValidator> {
        self.types.get(name).map(|v| v.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// All registered type names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Bundled validator for an extension kind named in configuration
    pub fn extension(kind: &str) -> Result<Arc<dyn TypeValidator>> {
        match kind {
            RU_PHONE_EXTENSION => Ok(Arc::new(RuPhoneNumberType::default())),
            other => Err(SchemaError::Config(format!(
                "unknown type extension \"{}\"",
                other
            ))),
        }
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TypeMismatch;
    use crate::types::TypeShape;
    use serde_json::{json, Value};
    use std::borrow::Cow;

    struct Uppercase;

    impl TypeValidator for Uppercase {
        fn validate<'v>(&self, value: &'v Value) -> std::result::Result<Cow<'v, Value>, TypeMismatch> {
            match value {
                Value::String(s) => Ok(Cow::Owned(Value::String(s.to_uppercase()))),
                Value::Null => Ok(Cow::Borrowed(value)),
                _ => Err(TypeMismatch::new("Value is not uppercase text")),
            }
        }
    }

    #[test]
    fn test_builtins_are_registered() {
        let registry = TypeRegistry::new();
        assert_eq!(
            registry.names(),
            vec!["array", "float", "integer", "object", "string"]
        );
        assert!(registry.resolve("phone").is_none());
    }

    #[test]
    fn test_resolved_builtins_keep_their_shape() {
        let registry = TypeRegistry::new();
        assert_eq!(registry.resolve("array").map(|t| t.shape()), Some(TypeShape::Sequence));
        assert_eq!(registry.resolve("object").map(|t| t.shape()), Some(TypeShape::Mapping));
        assert_eq!(registry.resolve("integer").map(|t| t.shape()), Some(TypeShape::Scalar));
    }

    #[test]
    fn test_custom_types_overlay_builtins() {
        let phone: Arc<dyn TypeValidator> = Arc::new(RuPhoneNumberType::default());
        let upper: Arc<dyn TypeValidator> = Arc::new(Uppercase);
        let registry = TypeRegistry::with_custom(vec![("phone", phone), ("string", upper)]);

        assert_eq!(registry.len(), 6);
        let string = registry.resolve("string").unwrap();
        assert_eq!(string.coerce(&json!("abc")), Ok(json!("ABC")));
        assert!(registry.contains("phone"));
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = TypeRegistry::new();
        registry.register("integer", Uppercase);
        let integer = registry.resolve("integer").unwrap();
        assert_eq!(integer.coerce(&json!("x")), Ok(json!("X")));
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_extension_lookup() {
        let phone = TypeRegistry::extension(RU_PHONE_EXTENSION).unwrap();
        assert_eq!(phone.coerce(&json!("8 900 123 45 67")), Ok(json!("79001234567")));
        assert!(matches!(
            TypeRegistry::extension("uuid"),
            Err(SchemaError::Config(_))
        ));
    }

    #[test]
    fn test_registry_is_shareable_across_threads() {
        let registry = Arc::new(TypeRegistry::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    registry
                        .resolve("integer")
                        .map(|t| t.coerce(&json!(i.to_string())))
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), Some(Ok(json!(i))));
        }
    }
}
