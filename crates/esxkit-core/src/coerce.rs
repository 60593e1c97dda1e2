// ── Value coercion ──
//
// Converts a user-supplied string into the runtime type of an advanced
// option's current value and reports whether it differs.

use esxkit_api::models::{OptionValue, TypedValue, ValueKind};
use serde_json::Value;

use crate::error::CoreError;

/// Result of [`coerce`]: the typed replacement and whether it differs
/// from the current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Coercion {
    pub value: OptionValue,
    pub changed: bool,
}

/// Coerce `supplied` to the type of `current.value`.
///
/// Integers are parsed as `i64` after trimming whitespace. Strings compare
/// verbatim. Booleans accept the usual automation vocabulary (`yes`/`no`,
/// `on`/`off`, `1`/`0`, ...), case-insensitively. Any other kind is
/// [`CoreError::UnsupportedValueType`].
pub fn coerce(current: &OptionValue, supplied: &str) -> Result<Coercion, CoreError> {
    let (coerced, changed) = match &current.value.kind {
        ValueKind::Integer => {
            let parsed: i64 =
                supplied
                    .trim()
                    .parse()
                    .map_err(|_| CoreError::ValidationFailed {
                        message: format!("'{supplied}' is not a valid integer for {}", current.key),
                    })?;
            (Value::from(parsed), current.value.value.as_i64() != Some(parsed))
        }
        ValueKind::String => (
            Value::from(supplied),
            current.value.value.as_str() != Some(supplied),
        ),
        ValueKind::Boolean => {
            let parsed = parse_bool(supplied).ok_or_else(|| CoreError::ValidationFailed {
                message: format!("'{supplied}' is not a valid boolean for {}", current.key),
            })?;
            (Value::from(parsed), current_bool(&current.value.value) != Some(parsed))
        }
        ValueKind::Other(type_name) => {
            return Err(CoreError::UnsupportedValueType {
                type_name: type_name.clone(),
            });
        }
    };

    Ok(Coercion {
        value: OptionValue {
            key: current.key.clone(),
            value: TypedValue {
                kind: current.value.kind.clone(),
                value: coerced,
            },
        },
        changed,
    })
}

/// Normalize an option path to dotted form.
///
/// A single leading `/` is dropped, then every remaining `/` becomes `.`:
/// `/UserVars/SuppressShellWarning` -> `UserVars.SuppressShellWarning`.
pub fn normalize_option_key(key: &str) -> String {
    key.strip_prefix('/').unwrap_or(key).replace('/', ".")
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" | "y" | "t" => Some(true),
        "false" | "no" | "off" | "0" | "n" | "f" => Some(false),
        _ => None,
    }
}

// Some hosts report booleans as 0/1 or as strings.
fn current_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        Value::String(s) => parse_bool(s),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn option(kind: ValueKind, value: Value) -> OptionValue {
        OptionValue {
            key: "Test.Key".into(),
            value: TypedValue { kind, value },
        }
    }

    #[test]
    fn integer_equal_is_unchanged() {
        let c = coerce(&option(ValueKind::Integer, json!(5)), "5").unwrap();
        assert!(!c.changed);
        assert_eq!(c.value.value.value, json!(5));
    }

    #[test]
    fn integer_differs() {
        let c = coerce(&option(ValueKind::Integer, json!(5)), " 7 ").unwrap();
        assert!(c.changed);
        assert_eq!(c.value.value.value, json!(7));
        assert_eq!(c.value.value.kind, ValueKind::Integer);
    }

    #[test]
    fn integer_rejects_garbage() {
        let err = coerce(&option(ValueKind::Integer, json!(5)), "five").unwrap_err();
        assert!(matches!(err, CoreError::ValidationFailed { .. }));
    }

    #[test]
    fn string_compares_verbatim() {
        let current = option(ValueKind::String, json!("abc"));
        assert!(!coerce(&current, "abc").unwrap().changed);
        assert!(coerce(&current, "abc ").unwrap().changed);
    }

    #[test]
    fn boolean_vocabulary() {
        let current = option(ValueKind::Boolean, json!(true));
        for raw in ["true", "YES", "on", "1", "y", "T"] {
            assert!(!coerce(&current, raw).unwrap().changed, "{raw}");
        }
        let c = coerce(&current, "off").unwrap();
        assert!(c.changed);
        assert_eq!(c.value.value.value, json!(false));
    }

    #[test]
    fn boolean_rejects_garbage() {
        let err = coerce(&option(ValueKind::Boolean, json!(false)), "maybe").unwrap_err();
        assert!(matches!(err, CoreError::ValidationFailed { .. }));
    }

    #[test]
    fn unknown_kind_is_unsupported() {
        let err = coerce(&option(ValueKind::Other("float".into()), json!(1.5)), "2.0").unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedValueType { ref type_name } if type_name == "float"));
    }

    #[test]
    fn key_normalization() {
        assert_eq!(
            normalize_option_key("/UserVars/SuppressShellWarning"),
            "UserVars.SuppressShellWarning"
        );
        assert_eq!(
            normalize_option_key("UserVars.SuppressShellWarning"),
            "UserVars.SuppressShellWarning"
        );
        assert_eq!(normalize_option_key("//a/b"), ".a.b");
        assert_eq!(normalize_option_key("Misc/Hostname"), "Misc.Hostname");
    }
}
