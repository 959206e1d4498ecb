use serde::Deserialize;

use crate::error::{required, ApiResult};

/// Body for creating or fully replacing a shopping item. Descriptive fields
/// fall back to an empty string.
#[derive(Debug, Deserialize)]
pub struct ShoppingPayload {
    pub name: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub spec: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub weekly_amount: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone)]
pub struct NewShoppingItem {
    pub name: String,
    pub category: String,
    pub brand: String,
    pub spec: String,
    pub price: String,
    pub weekly_amount: String,
    pub note: String,
}

impl ShoppingPayload {
    pub fn validate(self) -> ApiResult<NewShoppingItem> {
        Ok(NewShoppingItem {
            name: required(self.name, "name")?,
            category: required(self.category, "category")?,
            brand: self.brand,
            spec: self.spec,
            price: self.price,
            weekly_amount: self.weekly_amount,
            note: self.note,
        })
    }
}
