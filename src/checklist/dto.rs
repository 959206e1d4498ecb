use serde::{Deserialize, Deserializer};

use crate::error::{required, ApiResult};

#[derive(Debug, Deserialize)]
pub struct ChecklistPayload {
    pub date: Option<String>,
    pub item_key: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub checked: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct ChecklistWrite {
    pub date: String,
    pub item_key: String,
    pub checked: bool,
}

impl ChecklistPayload {
    pub fn validate(self) -> ApiResult<ChecklistWrite> {
        Ok(ChecklistWrite {
            date: required(self.date, "date")?,
            item_key: required(self.item_key, "item_key")?,
            checked: required(self.checked, "checked")?,
        })
    }
}

/// Accepts `true`/`false` as well as `0`/`1`.
fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(Option::<Flag>::deserialize(deserializer)?.map(|f| match f {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn checked(body: serde_json::Value) -> Option<bool> {
        serde_json::from_value::<ChecklistPayload>(body).unwrap().checked
    }

    #[test]
    fn checked_accepts_bool_or_int() {
        assert_eq!(checked(json!({ "checked": true })), Some(true));
        assert_eq!(checked(json!({ "checked": 0 })), Some(false));
        assert_eq!(checked(json!({ "checked": 1 })), Some(true));
        assert_eq!(checked(json!({})), None);
    }

    #[test]
    fn checked_rejects_text() {
        let res = serde_json::from_value::<ChecklistPayload>(json!({ "checked": "yes" }));
        assert!(res.is_err());
    }
}
