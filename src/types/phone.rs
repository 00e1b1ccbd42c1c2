//! Russian phone numbers, layered on the string type
//!
//! The value is first coerced by [`StringType`], then punctuation, whitespace
//! and `+` are stripped. What remains must be 11 digits starting with 7 or 8;
//! a leading 8 is normalized to 7.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::{StringType, TypeValidator};
use crate::error::TypeMismatch;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\p{P}\s+]").unwrap());

static RU_PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[78][0-9]{10}$").unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub struct RuPhoneNumberType {
    base: StringType,
}

impl RuPhoneNumberType {
    pub const ERROR_MESSAGE: &'static str = "Value is not phone number (RU)";

    fn normalize(raw: &str) -> Option<String> {
        let digits = SEPARATORS.replace_all(raw, "");
        if !RU_PHONE.is_match(&digits) {
            return None;
        }
        match digits.strip_prefix('8') {
            Some(rest) => Some(format!("7{}", rest)),
            None => Some(digits.into_owned()),
        }
    }
}

impl TypeValidator for RuPhoneNumberType {
    fn validate<'v>(&self, value: &'v Value) -> Result<Cow<'v, Value>, TypeMismatch> {
        if value.is_null() {
            return Ok(Cow::Borrowed(value));
        }

        let mismatch = || TypeMismatch::new(Self::ERROR_MESSAGE);
        match &*self.base.validate(value).map_err(|_| mismatch())? {
            Value::String(s) => Self::normalize(s)
                .map(|phone| Cow::Owned(Value::String(phone)))
                .ok_or_else(mismatch),
            _ => Err(mismatch()),
        }
    }
}
