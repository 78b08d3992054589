//! Parsing fluid amounts written by hand in data files.
//!
//! Accepted shapes:
//! - `{"buckets": 2}`
//! - `{"droplets": 500}`
//! - `250`, a bare number of millibuckets. Deprecated, logs a warning. Fractions
//!   are truncated.

use std::str::FromStr;

use serde_json::{Map, Number, Value};
use thiserror::Error;

use super::FluidValue;

/// Errors raised while parsing a [`FluidValue`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FluidValueError {
    /// The input doesn't match any accepted shape.
    #[error("could not parse fluid value: {0}")]
    Malformed(String),
}

impl FluidValue {
    /// Parses a fluid amount from a json tree.
    pub fn parse(json: &Value) -> Result<Self, FluidValueError> {
        match json {
            Value::Object(object) => Self::parse_object(object),
            Value::Number(number) => {
                let value = Self::from_millibuckets(legacy_millibuckets(number));
                log::warn!(
                    "Fluid value `{number}` uses the deprecated millibucket shorthand, use {{\"droplets\": {}}} instead",
                    value.raw_value()
                );
                Ok(value)
            }
            other => Err(FluidValueError::Malformed(format!(
                "expected an object or a number, found {}",
                kind(other)
            ))),
        }
    }

    /// Parses a fluid amount from json5 text.
    pub fn parse_str(text: &str) -> Result<Self, FluidValueError> {
        let json: Value = serde_json5::from_str(text)
            .map_err(|err| FluidValueError::Malformed(err.to_string()))?;
        Self::parse(&json)
    }

    fn parse_object(object: &Map<String, Value>) -> Result<Self, FluidValueError> {
        if let Some(buckets) = object.get("buckets") {
            return integer_field(buckets, "buckets").map(Self::from_buckets);
        }
        if let Some(droplets) = object.get("droplets") {
            return integer_field(droplets, "droplets").map(Self::from_raw);
        }
        Err(FluidValueError::Malformed(
            "expected a `buckets` or `droplets` key".to_string(),
        ))
    }
}

impl FromStr for FluidValue {
    type Err = FluidValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

fn integer_field(value: &Value, key: &str) -> Result<i64, FluidValueError> {
    value
        .as_i64()
        .ok_or_else(|| FluidValueError::Malformed(format!("`{key}` must be an integer, found {value}")))
}

/// Fractions truncate toward zero. Anything outside `i64` saturates.
#[allow(clippy::cast_possible_truncation)]
fn legacy_millibuckets(number: &Number) -> i64 {
    if let Some(n) = number.as_i64() {
        return n;
    }
    if number.is_u64() {
        return i64::MAX;
    }
    number.as_f64().map_or(0, |n| n as i64)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
