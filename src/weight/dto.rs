use serde::Deserialize;

use crate::error::{required, ApiResult};

#[derive(Debug, Deserialize)]
pub struct WeightPayload {
    pub date: Option<String>,
    pub weight: Option<f64>,
    pub day: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct NewWeightRecord {
    pub date: String,
    pub weight: f64,
    pub day: i64, // plan day number, 1 when omitted
}

impl WeightPayload {
    pub fn validate(self) -> ApiResult<NewWeightRecord> {
        Ok(NewWeightRecord {
            date: required(self.date, "date")?,
            weight: required(self.weight, "weight")?,
            day: self.day.unwrap_or(1),
        })
    }
}
