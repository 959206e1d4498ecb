use serde::Deserialize;

use crate::error::{required, ApiResult};

#[derive(Debug, Deserialize)]
pub struct ExercisePayload {
    pub name: Option<String>,
    pub duration: Option<String>,
    pub intensity: Option<String>,
    pub distance: Option<String>,
    pub calories: Option<String>,
}

/// All fields are free text, e.g. `"40-50 分鐘"` or `"250-350 kcal"`.
#[derive(Debug, Clone)]
pub struct NewExercise {
    pub name: String,
    pub duration: String,
    pub intensity: String,
    pub distance: String,
    pub calories: String,
}

impl ExercisePayload {
    pub fn validate(self) -> ApiResult<NewExercise> {
        Ok(NewExercise {
            name: required(self.name, "name")?,
            duration: required(self.duration, "duration")?,
            intensity: required(self.intensity, "intensity")?,
            distance: required(self.distance, "distance")?,
            calories: required(self.calories, "calories")?,
        })
    }
}
