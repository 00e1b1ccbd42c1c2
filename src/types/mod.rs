//! Type validators
//!
//! A type validator takes one decoded JSON value and either returns the
//! value coerced to its type or fails with a [`TypeMismatch`]. Validators are
//! stateless: the same input always gives the same outcome, so one instance
//! can be shared by any number of concurrent validations.
//!
//! Every validator, built-in or custom, must pass `null` through untouched.
//! Absence of a value is never a type error.

pub mod collection;
pub mod phone;
pub mod scalar;

pub use collection::{AssocArrayType, IndexedArrayType};
pub use phone::RuPhoneNumberType;
pub use scalar::{FloatType, IntegerType, StringType};

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TypeMismatch;

/// How the schema walker treats values of a type after coercion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TypeShape {
    /// Leaf value, nothing to descend into
    #[default]
    Scalar,
    /// Ordered sequence, children described by `items`
    Sequence,
    /// Keyed mapping, children described by `items` or `properties`
    Mapping,
}

/// Validation and coercion of a single value
pub trait TypeValidator: Send + Sync {
    /// Validate `value` and return its coerced representative.
    ///
    /// Return [`Cow::Borrowed`] when the value is already in its coerced form;
    /// the caller then keeps its own copy instead of cloning.
    fn validate<'v>(&self, value: &'v Value) -> Result<Cow<'v, Value>, TypeMismatch>;

    /// Structural shape of the coerced value
    fn shape(&self) -> TypeShape {
        TypeShape::Scalar
    }

    /// Owned variant of [`TypeValidator::validate`]
    fn coerce(&self, value: &Value) -> Result<Value, TypeMismatch> {
        self.validate(value).map(Cow::into_owned)
    }
}

/// Trim the whitespace accepted around numeric strings (space, tab, CR, LF, VT)
pub(crate) fn trim_numeric(s: &str) -> &str {
    s.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b'))
}
