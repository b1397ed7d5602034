//! Input checks run before anything reaches a store.
//!
//! Each check collects every offending field rather than stopping at the
//! first, so a caller can fix a payload in one round trip.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::FieldError;
use crate::model::employee::{CreateEmployee, NewEmployee};
use crate::model::payroll::{CreatePayroll, NewPayroll};

/// Zero-padded 24-hour clock, `HH:mm`.
static CLOCK_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").expect("clock pattern compiles"));

pub fn is_valid_time(value: &str) -> bool {
    CLOCK_TIME.is_match(value)
}

pub fn validate_employee(payload: CreateEmployee) -> Result<NewEmployee, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = required_text("name", payload.name, &mut errors);
    let position = required_text("position", payload.position, &mut errors);
    let department = required_text("department", payload.department, &mut errors);
    let monthly_salary = collect(check_salary(payload.monthly_salary), &mut errors);
    let time_in = optional_time("timeIn", payload.time_in, &mut errors);
    let time_out = optional_time("timeOut", payload.time_out, &mut errors);

    match (name, position, department, monthly_salary) {
        (Some(name), Some(position), Some(department), Some(monthly_salary))
            if errors.is_empty() =>
        {
            Ok(NewEmployee {
                name,
                position,
                department,
                monthly_salary,
                time_in,
                time_out,
            })
        }
        _ => Err(errors),
    }
}

/// Monthly salary must be a finite, non-negative amount. Used both when an
/// employee is created and before their 13th-month pay is derived.
pub fn check_salary(value: Option<f64>) -> Result<f64, FieldError> {
    match value {
        None => Err(FieldError::new("monthlySalary", "monthlySalary is required")),
        Some(v) if !v.is_finite() => Err(FieldError::new(
            "monthlySalary",
            "monthlySalary must be a finite number",
        )),
        Some(v) if v < 0.0 => Err(FieldError::new(
            "monthlySalary",
            "monthlySalary must not be negative",
        )),
        Some(v) => Ok(v),
    }
}

pub fn validate_payroll(payload: CreatePayroll) -> Result<NewPayroll, Vec<FieldError>> {
    let mut errors = Vec::new();

    let employee_name = required_text("employeeName", payload.employee_name, &mut errors);
    let rate_per_hour = amount("RateperHour", payload.rate_per_hour, &mut errors);
    let hours_per_day = amount("HoursperDay", payload.hours_per_day, &mut errors);
    let days_worked = amount("NumbersofDaysWorked", payload.days_worked, &mut errors);
    let gross_salary = amount("GrossSalary", payload.gross_salary, &mut errors);
    let tax = amount("Tax", payload.tax, &mut errors);
    let philhealth = amount("Philhealth", payload.philhealth, &mut errors);
    let sss = amount("SSS", payload.sss, &mut errors);
    let total_deductions = amount("TotalDeductions", payload.total_deductions, &mut errors);
    let net_salary = amount("NetSalary", payload.net_salary, &mut errors);

    if payload.payday.is_none() {
        errors.push(FieldError::new("payday", "payday is required"));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // Every Option below is Some once `errors` is empty.
    match (
        employee_name,
        payload.payday,
        [
            rate_per_hour,
            hours_per_day,
            days_worked,
            gross_salary,
            tax,
            philhealth,
            sss,
            total_deductions,
            net_salary,
        ],
    ) {
        (
            Some(employee_name),
            Some(payday),
            [
                Some(rate_per_hour),
                Some(hours_per_day),
                Some(days_worked),
                Some(gross_salary),
                Some(tax),
                Some(philhealth),
                Some(sss),
                Some(total_deductions),
                Some(net_salary),
            ],
        ) => Ok(NewPayroll {
            employee_name,
            rate_per_hour,
            hours_per_day,
            days_worked,
            gross_salary,
            tax,
            philhealth,
            sss,
            total_deductions,
            net_salary,
            payday,
        }),
        _ => Err(errors),
    }
}

fn collect<T>(result: Result<T, FieldError>, errors: &mut Vec<FieldError>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}

fn required_text(
    field: &str,
    value: Option<String>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text),
        _ => {
            errors.push(FieldError::new(field, format!("{field} is required")));
            None
        }
    }
}

fn amount(field: &str, value: Option<f64>, errors: &mut Vec<FieldError>) -> Option<f64> {
    let checked = match value {
        None => Err(format!("{field} is required")),
        Some(v) if !v.is_finite() => Err(format!("{field} must be a finite number")),
        Some(v) if v < 0.0 => Err(format!("{field} must not be negative")),
        Some(v) => Ok(v),
    };
    collect(checked.map_err(|m| FieldError::new(field, m)), errors)
}

/// Absent or blank means "not recorded" and is stored as `None`.
fn optional_time(
    field: &str,
    value: Option<String>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let value = value.filter(|v| !v.is_empty())?;
    if is_valid_time(&value) {
        Some(value)
    } else {
        errors.push(FieldError::new(
            field,
            format!("{field} must be HH:mm 24-hour format or empty"),
        ));
        None
    }
}
