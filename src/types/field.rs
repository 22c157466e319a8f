use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::Validate;

use crate::types::{check, error::ValidationErrors};

pub const REQUIRED: &str = "This field is required.";
pub const NOT_NULL: &str = "This field may not be null.";
pub const NOT_A_STRING: &str = "Not a valid string.";
pub const NOT_AN_INTEGER: &str = "A valid integer is required.";

/// A body field as it arrived: left out, sent as `null`, or some JSON value.
/// Typing happens later in [`FieldReader`] so that a wrong type is a field
/// error and not a body parse error.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Field {
    #[default]
    Missing,
    Null,
    Given(Value),
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => Field::Null,
            value => Field::Given(value),
        })
    }
}

impl From<Value> for Field {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Field::Null,
            value => Field::Given(value),
        }
    }
}

macro_rules! field_from {
    ($($t:ty),*) => {
        $(impl From<$t> for Field {
            fn from(value: $t) -> Self {
                Field::from(Value::from(value))
            }
        })*
    };
}

field_from!(&str, String, i32, i64, Option<String>, Option<i32>);

impl Field {
    /// PATCH: a field left out falls back to the stored value.
    pub fn or_stored(self, stored: impl Into<Field>) -> Field {
        match self {
            Field::Missing => stored.into(),
            sent => sent,
        }
    }
}

/// Turns raw fields into trimmed, typed values, collecting errors per field.
#[derive(Debug, Default)]
pub struct FieldReader {
    errors: ValidationErrors,
}

impl FieldReader {
    pub fn new() -> Self {
        Self::default()
    }

    fn absent(&mut self, name: &str, field: &Field, required: bool) {
        match field {
            Field::Missing if required => self.errors.add(name, REQUIRED),
            Field::Null if required => self.errors.add(name, NOT_NULL),
            _ => {}
        }
    }

    /// Trimmed string. Numbers are taken as their text; blank optional
    /// values read as `None`, blank required ones are left to `not_blank`.
    pub fn text(&mut self, name: &str, field: &Field, required: bool) -> Option<String> {
        let raw = match field {
            Field::Given(Value::String(s)) => s.trim().to_string(),
            Field::Given(Value::Number(n)) => n.to_string(),
            Field::Given(_) => {
                self.errors.add(name, NOT_A_STRING);
                return None;
            }
            absent => {
                self.absent(name, absent, required);
                return None;
            }
        };
        if raw.is_empty() && !required {
            return None;
        }
        Some(raw)
    }

    /// Integer from a JSON number or a numeric string.
    pub fn integer(&mut self, name: &str, field: &Field, required: bool) -> Option<i64> {
        let parsed = match field {
            Field::Given(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
            Field::Given(Value::String(s)) => s.trim().parse::<i64>().ok(),
            Field::Given(_) => None,
            absent => {
                self.absent(name, absent, required);
                return None;
            }
        };
        if parsed.is_none() {
            self.errors.add(name, NOT_AN_INTEGER);
        }
        parsed
    }

    /// Runs the declarative rules over the normalized values and returns
    /// every error collected so far.
    pub fn finish<T: Validate>(mut self, normalized: &T) -> ValidationErrors {
        self.errors.merge(check(normalized));
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize, Default)]
    #[serde(default)]
    struct Body {
        a: Field,
        b: Field,
        c: Field,
    }

    #[test]
    fn missing_null_and_given_are_distinct() {
        let body: Body = serde_json::from_value(json!({"a": null, "b": "x"})).unwrap();
        assert_eq!(body.a, Field::Null);
        assert_eq!(body.b, Field::Given(json!("x")));
        assert_eq!(body.c, Field::Missing);
        assert_eq!(Field::from(None::<i32>), Field::Null);
        assert_eq!(Field::Missing.or_stored(Some(3)), Field::Given(json!(3)));
        assert_eq!(Field::Null.or_stored(Some(3)), Field::Null);
    }

    #[test]
    fn text_is_trimmed_and_typed() {
        let mut r = FieldReader::new();
        assert_eq!(r.text("a", &json!("  Kazan ").into(), true).as_deref(), Some("Kazan"));
        assert_eq!(r.text("b", &json!("   ").into(), false), None);
        assert_eq!(r.text("c", &json!(12345).into(), false).as_deref(), Some("12345"));
        assert_eq!(r.text("d", &json!(true).into(), false), None);
        assert_eq!(r.text("e", &Field::Null, true), None);
        assert_eq!(r.text("f", &Field::Missing, true), None);
        assert_eq!(r.text("g", &Field::Null, false), None);

        let errors = r.errors;
        assert_eq!(errors.get("d").unwrap(), [NOT_A_STRING]);
        assert_eq!(errors.get("e").unwrap(), [NOT_NULL]);
        assert_eq!(errors.get("f").unwrap(), [REQUIRED]);
        assert!(!errors.has("g"));
    }

    #[test]
    fn integers_accept_numeric_strings() {
        let mut r = FieldReader::new();
        assert_eq!(r.integer("a", &json!(5).into(), true), Some(5));
        assert_eq!(r.integer("b", &json!(" 42 ").into(), true), Some(42));
        assert_eq!(r.integer("c", &json!(7.0).into(), true), Some(7));
        assert_eq!(r.integer("d", &json!("abc").into(), true), None);
        assert_eq!(r.integer("e", &json!(1.5).into(), true), None);
        assert_eq!(r.integer("f", &Field::Null, false), None);

        let errors = r.errors;
        assert_eq!(errors.get("d").unwrap(), [NOT_AN_INTEGER]);
        assert_eq!(errors.get("e").unwrap(), [NOT_AN_INTEGER]);
        assert!(!errors.has("f"));
    }
}
