//! Type checks for dynamically typed `add_error_value` input.
use serde_json::Value;

use crate::entry::Code;
use crate::error::{RegistryError, ValueField};

const EXPECTED_CODE: &str = "an integer number";
const EXPECTED_DESCRIPTION: &str = "a string";

/// Accepts JSON numbers with an integral value inside the `i64` range.
pub(crate) fn expect_code(value: &Value) -> Result<Code, RegistryError> {
    let invalid = |found: &'static str| RegistryError::InvalidType {
        field: ValueField::Code,
        expected: EXPECTED_CODE,
        found,
    };

    let Value::Number(number) = value else {
        return Err(invalid(type_name(value)));
    };
    if let Some(code) = number.as_i64() {
        return Ok(code);
    }

    // 404.0 is still a valid code; 2^63 and above are not
    match number.as_f64() {
        Some(float) if float.fract() != 0.0 => Err(invalid("fractional number")),
        Some(float) if float >= i64::MIN as f64 && float < i64::MAX as f64 => Ok(float as Code),
        _ => Err(invalid("out-of-range number")),
    }
}

pub(crate) fn expect_description(value: &Value) -> Result<&str, RegistryError> {
    value.as_str().ok_or_else(|| RegistryError::InvalidType {
        field: ValueField::Description,
        expected: EXPECTED_DESCRIPTION,
        found: type_name(value),
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integral_codes() {
        assert_eq!(expect_code(&json!(404)).unwrap(), 404);
        assert_eq!(expect_code(&json!(-1)).unwrap(), -1);
        assert_eq!(expect_code(&json!(404.0)).unwrap(), 404);
    }

    #[test]
    fn test_rejected_codes() {
        let cases = [
            (json!("404"), "string"),
            (json!(null), "null"),
            (json!(true), "boolean"),
            (json!([404]), "array"),
            (json!({ "code": 404 }), "object"),
            (json!(404.5), "fractional number"),
            (json!(u64::MAX), "out-of-range number"),
        ];

        for (value, found) in cases {
            match expect_code(&value) {
                Err(RegistryError::InvalidType { field, found: actual, .. }) => {
                    assert_eq!(field, ValueField::Code);
                    assert_eq!(actual, found, "value {value}");
                }
                other => panic!("expected InvalidType for {value}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_description_must_be_string() {
        assert_eq!(expect_description(&json!("Not Found")).unwrap(), "Not Found");
        assert_eq!(expect_description(&json!("")).unwrap(), "");

        let err = expect_description(&json!(12345)).unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidType {
                field: ValueField::Description,
                expected: "a string",
                found: "number",
            }
        );
    }
}
