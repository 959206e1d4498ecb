use serde::Deserialize;

use crate::{
    error::{required, ApiResult},
    types::MealType,
};

#[derive(Debug, Deserialize)]
pub struct DailyMealPayload {
    pub date: Option<String>,
    pub meal_type: Option<MealType>,
    pub meal_id: Option<i64>,
    pub meal_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewDailyMeal {
    pub date: String,
    pub meal_type: MealType,
    pub meal_id: Option<i64>, // weak reference into the catalog
    pub meal_name: String,
}

impl DailyMealPayload {
    pub fn validate(self) -> ApiResult<NewDailyMeal> {
        Ok(NewDailyMeal {
            date: required(self.date, "date")?,
            meal_type: required(self.meal_type, "meal_type")?,
            meal_id: self.meal_id,
            meal_name: required(self.meal_name, "meal_name")?,
        })
    }
}

/// Selects one meal slot of one day.
#[derive(Debug, Deserialize)]
pub struct ClearPayload {
    pub date: Option<String>,
    pub meal_type: Option<MealType>,
}

impl ClearPayload {
    pub fn validate(self) -> ApiResult<(String, MealType)> {
        Ok((
            required(self.date, "date")?,
            required(self.meal_type, "meal_type")?,
        ))
    }
}
