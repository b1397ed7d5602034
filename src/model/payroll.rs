use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use utoipa::ToSchema;

/// A stored pay computation. Figures come from the caller as-is; nothing here
/// is derived server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Payroll {
    pub id: String,

    #[serde(rename = "employeeName")]
    pub employee_name: String,

    #[serde(rename = "RateperHour")]
    pub rate_per_hour: f64,

    #[serde(rename = "HoursperDay")]
    pub hours_per_day: f64,

    #[serde(rename = "NumbersofDaysWorked")]
    pub days_worked: f64,

    #[serde(rename = "GrossSalary")]
    pub gross_salary: f64,

    #[serde(rename = "Tax")]
    pub tax: f64,

    #[serde(rename = "Philhealth")]
    pub philhealth: f64,

    #[serde(rename = "SSS")]
    pub sss: f64,

    #[serde(rename = "TotalDeductions")]
    pub total_deductions: f64,

    #[serde(rename = "NetSalary")]
    pub net_salary: f64,

    #[schema(value_type = String, format = "date")]
    pub payday: NaiveDate,

    #[serde(rename = "createdAt")]
    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct CreatePayroll {
    #[serde(rename = "employeeName")]
    #[schema(example = "Ana")]
    pub employee_name: Option<String>,

    #[serde(rename = "RateperHour")]
    #[schema(example = 75.0)]
    pub rate_per_hour: Option<f64>,

    #[serde(rename = "HoursperDay")]
    #[schema(example = 8.0)]
    pub hours_per_day: Option<f64>,

    #[serde(rename = "NumbersofDaysWorked")]
    #[schema(example = 22.0)]
    pub days_worked: Option<f64>,

    #[serde(rename = "GrossSalary")]
    #[schema(example = 13200.0)]
    pub gross_salary: Option<f64>,

    #[serde(rename = "Tax")]
    #[schema(example = 660.0)]
    pub tax: Option<f64>,

    #[serde(rename = "Philhealth")]
    #[schema(example = 330.0)]
    pub philhealth: Option<f64>,

    #[serde(rename = "SSS")]
    #[schema(example = 581.3)]
    pub sss: Option<f64>,

    #[serde(rename = "TotalDeductions")]
    #[schema(example = 1571.3)]
    pub total_deductions: Option<f64>,

    #[serde(rename = "NetSalary")]
    #[schema(example = 11628.7)]
    pub net_salary: Option<f64>,

    /// A plain date, or an RFC 3339 timestamp whose UTC date is kept.
    #[serde(default, deserialize_with = "date_or_timestamp")]
    #[schema(example = "2026-01-15", value_type = String, format = "date")]
    pub payday: Option<NaiveDate>,
}

pub fn parse_payday(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|ts| ts.with_timezone(&Utc).date_naive())
    })
}

fn date_or_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    parse_payday(&raw).map(Some).ok_or_else(|| {
        de::Error::custom(format!(
            "payday must be a date (YYYY-MM-DD) or an RFC 3339 timestamp, got {raw:?}"
        ))
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPayroll {
    pub employee_name: String,
    pub rate_per_hour: f64,
    pub hours_per_day: f64,
    pub days_worked: f64,
    pub gross_salary: f64,
    pub tax: f64,
    pub philhealth: f64,
    pub sss: f64,
    pub total_deductions: f64,
    pub net_salary: f64,
    pub payday: NaiveDate,
}
