//! Scalar types: integer, float, string
//!
//! Booleans are rejected by every scalar type, including their string
//! spellings (`"true"`, `"false"`), since those never parse as numbers.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Number, Value};

use super::{trim_numeric, TypeValidator};
use crate::error::TypeMismatch;

/// Base-10 integer, optional sign, no leading zeros
static DECIMAL_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(0|[1-9][0-9]*)$").unwrap());

/// Signed or unsigned `0` followed only by octal digits
static OCTAL_LIKE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?0[0-7]+$").unwrap());

/// Decimal float with optional `,` thousands grouping and exponent
static DECIMAL_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[+-]?(?:(?:[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$",
    )
    .unwrap()
});

// i64::MAX is not representable as f64; 2^63 is the first float out of range.
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Decimal integers within the native 64-bit range
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerType;

impl IntegerType {
    pub const ERROR_MESSAGE: &'static str = "Value is not integer";

    fn from_number(n: &Number) -> Option<i64> {
        if let Some(i) = n.as_i64() {
            return Some(i);
        }
        if n.is_u64() {
            return None;
        }
        let f = n.as_f64()?;
        if f.fract() == 0.0 && f >= -I64_UPPER_BOUND && f < I64_UPPER_BOUND {
            Some(f as i64)
        } else {
            None
        }
    }

    fn from_str(s: &str) -> Option<i64> {
        let s = trim_numeric(s);
        if !DECIMAL_INT.is_match(s) {
            return None;
        }
        s.parse::<i64>().ok()
    }
}

impl TypeValidator for IntegerType {
    fn validate<'v>(&self, value: &'v Value) -> Result<Cow<'v, Value>, TypeMismatch> {
        let parsed = match value {
            Value::Null => return Ok(Cow::Borrowed(value)),
            Value::Number(n) if n.is_i64() => return Ok(Cow::Borrowed(value)),
            Value::Number(n) => Self::from_number(n),
            Value::String(s) => Self::from_str(s),
            _ => None,
        };
        parsed
            .map(|i| Cow::Owned(Value::from(i)))
            .ok_or_else(|| TypeMismatch::new(Self::ERROR_MESSAGE))
    }
}

/// Floating point numbers, including scientific notation and thousands separators
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatType;

impl FloatType {
    pub const ERROR_MESSAGE: &'static str = "Value is not a float.";

    fn is_zero_literal(value: &Value) -> bool {
        match value {
            Value::Number(n) => n.as_i64() == Some(0) || n.as_u64() == Some(0),
            Value::String(s) => s == "0",
            _ => false,
        }
    }

    fn from_str(s: &str) -> Option<f64> {
        let s = trim_numeric(s);
        if OCTAL_LIKE.is_match(s) || !DECIMAL_FLOAT.is_match(s) {
            return None;
        }
        s.replace(',', "").parse::<f64>().ok()
    }
}

impl TypeValidator for FloatType {
    fn validate<'v>(&self, value: &'v Value) -> Result<Cow<'v, Value>, TypeMismatch> {
        if value.is_null() {
            return Ok(Cow::Borrowed(value));
        }
        if Self::is_zero_literal(value) {
            return Ok(Cow::Owned(Value::from(0.0)));
        }

        let parsed = match value {
            Value::Number(n) if n.is_f64() => return Ok(Cow::Borrowed(value)),
            Value::Number(n) => n.as_f64(),
            Value::String(s) => Self::from_str(s),
            _ => None,
        };
        parsed
            .and_then(Number::from_f64)
            .map(|n| Cow::Owned(Value::Number(n)))
            .ok_or_else(|| TypeMismatch::new(Self::ERROR_MESSAGE))
    }
}

/// Any non-boolean scalar, rendered as a string
#[derive(Debug, Clone, Copy, Default)]
pub struct StringType;

impl StringType {
    pub const ERROR_MESSAGE: &'static str = "Value is not string";

    fn render_number(n: &Number) -> String {
        match n.as_f64() {
            Some(f) if !n.is_i64() && !n.is_u64() => f.to_string(),
            _ => n.to_string(),
        }
    }
}

impl TypeValidator for StringType {
    fn validate<'v>(&self, value: &'v Value) -> Result<Cow<'v, Value>, TypeMismatch> {
        match value {
            Value::Null | Value::String(_) => Ok(Cow::Borrowed(value)),
            Value::Number(n) => Ok(Cow::Owned(Value::String(Self::render_number(n)))),
            _ => Err(TypeMismatch::new(Self::ERROR_MESSAGE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn int_fails(value: Value) {
        assert_eq!(
            IntegerType.coerce(&value),
            Err(TypeMismatch::new(IntegerType::ERROR_MESSAGE)),
            "expected integer failure for {}",
            value
        );
    }

    fn float_fails(value: Value) {
        assert_eq!(
            FloatType.coerce(&value),
            Err(TypeMismatch::new(FloatType::ERROR_MESSAGE)),
            "expected float failure for {}",
            value
        );
    }

    #[test]
    fn test_integer_accepts_decimal_strings() {
        assert_eq!(IntegerType.coerce(&json!("  123")), Ok(json!(123)));
        assert_eq!(IntegerType.coerce(&json!("0")), Ok(json!(0)));
        assert_eq!(IntegerType.coerce(&json!("-42\n")), Ok(json!(-42)));
        assert_eq!(
            IntegerType.coerce(&json!("+79001234567")),
            Ok(json!(79001234567i64))
        );
    }

    #[test]
    fn test_integer_accepts_numbers() {
        assert_eq!(IntegerType.coerce(&json!(17)), Ok(json!(17)));
        assert_eq!(IntegerType.coerce(&json!(-3)), Ok(json!(-3)));
        assert_eq!(IntegerType.coerce(&json!(5.0)), Ok(json!(5)));
    }

    #[test]
    fn test_integer_rejects_other_notations() {
        int_fails(json!("  -0b11111110"));
        int_fails(json!("-0123"));
        int_fails(json!("0x1E"));
        int_fails(json!("123test"));
        int_fails(json!("+7(900)12-34-567"));
        int_fails(json!("1e3"));
        int_fails(json!("true"));
        int_fails(json!(""));
    }

    #[test]
    fn test_integer_rejects_non_integers() {
        int_fails(json!(0.123));
        int_fails(json!(true));
        int_fails(json!([0, "1", 3]));
        int_fails(json!({"foo": "bar"}));
    }

    #[test]
    fn test_integer_rejects_out_of_range() {
        int_fails(json!(1e19));
        int_fails(json!(10_000_000_000_000_000_000u64));
        int_fails(json!("9223372036854775808"));
        assert_eq!(
            IntegerType.coerce(&json!("9223372036854775807")),
            Ok(json!(i64::MAX))
        );
    }

    #[test]
    fn test_float_accepts_numeric_strings() {
        assert_eq!(FloatType.coerce(&json!("  123")), Ok(json!(123.0)));
        assert_eq!(FloatType.coerce(&json!("1,200.44")), Ok(json!(1200.44)));
        assert_eq!(FloatType.coerce(&json!("1e7")), Ok(json!(1e7)));
        assert_eq!(FloatType.coerce(&json!("-2.22")), Ok(json!(-2.22)));
        assert_eq!(
            FloatType.coerce(&json!("+790012345678")),
            Ok(json!(790012345678.0))
        );
    }

    #[test]
    fn test_float_zero_short_circuit() {
        assert_eq!(FloatType.coerce(&json!(0)), Ok(json!(0.0)));
        assert_eq!(FloatType.coerce(&json!("0")), Ok(json!(0.0)));
    }

    #[test]
    fn test_float_accepts_numbers() {
        assert_eq!(FloatType.coerce(&json!(0.123)), Ok(json!(0.123)));
        assert_eq!(FloatType.coerce(&json!(1.2e+2)), Ok(json!(120.0)));
        assert_eq!(FloatType.coerce(&json!(7)), Ok(json!(7.0)));
    }

    #[test]
    fn test_float_rejects_invalid() {
        float_fails(json!("-0b11111110"));
        float_fails(json!("-0123"));
        float_fails(json!("0x1E"));
        float_fails(json!("123test"));
        float_fails(json!("+7(900)12-34-5678"));
        float_fails(json!("1,20.5"));
        float_fails(json!("1e999"));
        float_fails(json!("false"));
        float_fails(json!(true));
        float_fails(json!([0, "1", 3]));
        float_fails(json!({"foo": "bar"}));
    }

    #[test]
    fn test_string_renders_scalars() {
        assert_eq!(StringType.coerce(&json!("123")), Ok(json!("123")));
        assert_eq!(StringType.coerce(&json!("-0123")), Ok(json!("-0123")));
        assert_eq!(StringType.coerce(&json!("0x1E")), Ok(json!("0x1E")));
        assert_eq!(StringType.coerce(&json!(0.123)), Ok(json!("0.123")));
        assert_eq!(StringType.coerce(&json!(42)), Ok(json!("42")));
        assert_eq!(StringType.coerce(&json!(1.0)), Ok(json!("1")));
        assert_eq!(StringType.coerce(&json!("")), Ok(json!("")));
    }

    #[test]
    fn test_string_rejects_non_scalars() {
        let expected = Err(TypeMismatch::new(StringType::ERROR_MESSAGE));
        assert_eq!(StringType.coerce(&json!(true)), expected);
        assert_eq!(StringType.coerce(&json!([0, "1", 3])), expected);
        assert_eq!(StringType.coerce(&json!({"foo": "bar"})), expected);
    }
}
