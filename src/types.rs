use serde::{Deserialize, Serialize};

/// Meal slot of the day. Stored as its lowercase name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub fn as_str(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }
}

/// SQL fragment ordering rows breakfast, lunch, dinner.
pub const MEAL_TYPE_ORDER: &str =
    "CASE meal_type WHEN 'breakfast' THEN 1 WHEN 'lunch' THEN 2 WHEN 'dinner' THEN 3 ELSE 4 END";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_type_uses_lowercase_names() {
        let t: MealType = serde_json::from_str("\"lunch\"").unwrap();
        assert_eq!(t, MealType::Lunch);
        assert_eq!(t.as_str(), "lunch");
        assert!(serde_json::from_str::<MealType>("\"brunch\"").is_err());
    }
}
