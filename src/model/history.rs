use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One 13th-month pay calculation. `employee_id` is not a constraint: the
/// row outlives the employee it points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct History {
    #[schema(example = "0b8f7c1e-6a0a-4f59-8d0e-3f1a7d2c9b44")]
    pub id: String,
    #[schema(example = "5f0c3c59-2f5e-4c3b-9d55-0b6a4b3c1e01")]
    pub employee_id: String,
    #[schema(example = 216.67)]
    pub pay: f64,
    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewHistory {
    pub employee_id: String,
    pub pay: f64,
}
