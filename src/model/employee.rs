use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": "5f0c3c59-2f5e-4c3b-9d55-0b6a4b3c1e01",
        "name": "Ana",
        "position": "Clerk",
        "department": "HR",
        "monthlySalary": 2600.0,
        "timeIn": "08:00",
        "timeOut": "17:00",
        "createdAt": "2026-01-05T08:00:00Z",
        "updatedAt": "2026-01-05T08:00:00Z"
    })
)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub position: String,
    pub department: String,
    pub monthly_salary: f64,

    #[schema(nullable = true)]
    pub time_in: Option<String>,
    #[schema(nullable = true)]
    pub time_out: Option<String>,

    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String, format = "date-time")]
    pub updated_at: DateTime<Utc>,
}

/// Employee payload as sent by the caller. Every field is optional here so
/// that missing values are reported per field instead of as a parse failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployee {
    #[schema(example = "Ana")]
    pub name: Option<String>,
    #[schema(example = "Clerk")]
    pub position: Option<String>,
    #[schema(example = "HR")]
    pub department: Option<String>,
    #[schema(example = 2600.0)]
    pub monthly_salary: Option<f64>,
    #[schema(example = "08:00", nullable = true)]
    pub time_in: Option<String>,
    #[schema(example = "17:00", nullable = true)]
    pub time_out: Option<String>,
}

/// A checked employee, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub position: String,
    pub department: String,
    pub monthly_salary: f64,
    pub time_in: Option<String>,
    pub time_out: Option<String>,
}
