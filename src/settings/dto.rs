use std::collections::BTreeMap;

use serde_json::Value;

/// Bulk update body: any JSON object, every value stored as text.
pub type SettingsUpdate = BTreeMap<String, Value>;

/// Strings are stored as-is, `null` as empty text, everything else as its JSON form.
pub fn value_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn values_coerce_to_text() {
        assert_eq!(value_to_text(json!("2100")), "2100");
        assert_eq!(value_to_text(json!(2100)), "2100");
        assert_eq!(value_to_text(json!(98.5)), "98.5");
        assert_eq!(value_to_text(json!(true)), "true");
        assert_eq!(value_to_text(Value::Null), "");
    }
}
