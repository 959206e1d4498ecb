use serde::Deserialize;

use crate::{
    error::{required, ApiResult},
    types::MealType,
};

/// Body for creating or fully replacing a catalog meal.
#[derive(Debug, Deserialize)]
pub struct MealPayload {
    pub name: Option<String>,
    pub meal_type: Option<MealType>,
    pub ingredients: Option<String>,
    pub calories: Option<i64>,
    pub protein: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct NewMeal {
    pub name: String,
    pub meal_type: MealType,
    pub ingredients: String,
    pub calories: i64,
    pub protein: i64,
}

impl MealPayload {
    pub fn validate(self) -> ApiResult<NewMeal> {
        Ok(NewMeal {
            name: required(self.name, "name")?,
            meal_type: required(self.meal_type, "meal_type")?,
            ingredients: required(self.ingredients, "ingredients")?,
            calories: required(self.calories, "calories")?,
            protein: required(self.protein, "protein")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn validate_reports_first_missing_field() {
        let payload: MealPayload = serde_json::from_value(serde_json::json!({
            "name": "雞胸便當",
            "meal_type": "lunch",
            "ingredients": "糙米飯 180g",
            "protein": 92
        }))
        .unwrap();
        match payload.validate() {
            Err(ApiError::MissingField(field)) => assert_eq!(field, "calories"),
            other => panic!("expected missing calories, got {other:?}"),
        }
    }
}
