//! Conversion of bound values into template text.
//!
//! Bindings are [`serde_json::Value`]s, so anything with an `Into<Value>` impl
//! (`&str`, `String`, integers, floats, `bool`, `Vec<T>`, `Option<T>`) can be bound.
//!
//! | Value | Rendered as |
//! |---|---|
//! | string | verbatim |
//! | number | base-10 positional text (`42`, `0.9`, never `1e20`) |
//! | bool | `true` / `false` |
//! | null | empty |
//! | array | elements concatenated, nulls skipped |
//! | object | compact JSON |

use serde_json::Value;

/// Render a single value the way it appears in substituted output.
pub fn to_template_string(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

pub(crate) fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => match n.as_f64().filter(|_| n.is_f64()) {
            // Positional notation, never exponents.
            Some(f) => out.push_str(&f.to_string()),
            None => out.push_str(&n.to_string()),
        },
        Value::String(s) => out.push_str(s),
        Value::Array(items) => {
            for item in items {
                write_value(out, item);
            }
        }
        Value::Object(_) => out.push_str(&value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(to_template_string(&json!("text")), "text");
        assert_eq!(to_template_string(&json!(42)), "42");
        assert_eq!(to_template_string(&json!(-7)), "-7");
        assert_eq!(to_template_string(&json!(0.9)), "0.9");
        assert_eq!(to_template_string(&json!(true)), "true");
        assert_eq!(to_template_string(&json!(false)), "false");
    }

    #[test]
    fn test_floats_never_use_exponents() {
        assert_eq!(to_template_string(&json!(1e20)), "100000000000000000000");
        assert_eq!(to_template_string(&json!(1.5e-7)), "0.00000015");
        assert_eq!(to_template_string(&json!(u64::MAX)), "18446744073709551615");
    }

    #[test]
    fn test_null_is_empty() {
        assert_eq!(to_template_string(&Value::Null), "");
    }

    #[test]
    fn test_array_concatenates_and_skips_nulls() {
        assert_eq!(to_template_string(&json!(["a", null, 1, true])), "a1true");
        assert_eq!(to_template_string(&json!([["x"], ["y", "z"]])), "xyz");
    }

    #[test]
    fn test_object_is_compact_json() {
        assert_eq!(to_template_string(&json!({"k": 1})), r#"{"k":1}"#);
    }
}
