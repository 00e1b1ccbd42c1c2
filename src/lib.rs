//! JSON Schema Validator
//!
//! Validates decoded JSON data against a schema of named types, coercing
//! loosely typed input (numeric strings, indexed mappings, formatted phone
//! numbers) into canonical values on the way.
//!
//! ## Features
//!
//! - **Built-in Types**: `integer`, `float`, `string`, `array`, `object`
//! - **Custom Types**: Any name can be registered or overridden in the [`TypeRegistry`]
//! - **Error Accumulation**: Data errors are collected with their path, the walk continues
//! - **Fatal Schema Errors**: A schema that cannot be interpreted aborts the call
//!
//! ## Usage
//!
//! ```
//! use json_schema_validator::{JsonSchemaValidator, TypeRegistry, types::RuPhoneNumberType};
//!
//! let mut registry = TypeRegistry::new();
//! registry.register("phone", RuPhoneNumberType::default());
//! let validator = JsonSchemaValidator::new(registry);
//!
//! let schema = r#"{"type": "object", "properties": {"id": {"type": "integer"}, "tel": {"type": "phone"}}}"#;
//! let result = validator.validate(schema, r#"{"id": "42", "tel": "8 (900) 123-45-67"}"#).unwrap();
//!
//! assert!(result.is_valid());
//! assert_eq!(result.data, serde_json::json!({"id": 42, "tel": "79001234567"}));
//! ```

pub mod config;
pub mod error;
pub mod path;
pub mod registry;
pub mod schema;
pub mod types;
pub mod validator;

pub use config::ValidatorConfig;
pub use error::{Result, SchemaError, TypeMismatch};
pub use path::FieldPath;
pub use registry::TypeRegistry;
pub use types::{TypeShape, TypeValidator};
pub use validator::{JsonSchemaValidator, ValidationResult};
