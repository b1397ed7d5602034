use tracing::info;

use crate::error::AppError;
use crate::model::history::{History, NewHistory};
use crate::store::{EmployeeLookup, RecordStore};
use crate::validation::check_salary;

/// Beyond this magnitude an f64 no longer resolves whole cents.
const MAX_CENT_PRECISE: f64 = 4_503_599_627_370_496.0 / 100.0;

/// Round to cents, halves away from zero (half-up for the non-negative
/// amounts handled here). Amounts too large to carry cents come back as-is.
pub fn round_currency(amount: f64) -> f64 {
    let cents = amount * 100.0;
    if !cents.is_finite() || amount.abs() > MAX_CENT_PRECISE {
        return amount;
    }
    cents.round() / 100.0
}

/// One twelfth of a monthly salary, rounded to cents.
pub fn thirteenth_month_pay(monthly_salary: f64) -> f64 {
    round_currency(monthly_salary / 12.0)
}

/// Compute an employee's 13th-month pay and log it to their history.
///
/// Every call appends a new history row, even when the salary has not
/// changed. The employee lookup and the append are separate statements: an
/// employee removed in between still gets a row.
pub async fn calculate_thirteenth_month<S>(
    store: &S,
    employee_id: Option<&str>,
) -> Result<f64, AppError>
where
    S: EmployeeLookup + RecordStore<History>,
{
    let employee_id = employee_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::InvalidArgument("employeeId required".to_string()))?;

    let employee = store
        .find_employee(employee_id)
        .await
        .map_err(|e| AppError::persistence("Calculation failed.", e))?
        .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;

    let monthly_salary = check_salary(Some(employee.monthly_salary))?;
    let pay = thirteenth_month_pay(monthly_salary);

    let entry = store
        .create(NewHistory {
            employee_id: employee.id,
            pay,
        })
        .await
        .map_err(|e| AppError::persistence("Calculation failed.", e))?;

    info!(employee_id = %entry.employee_id, pay = entry.pay, "13th month pay recorded");

    Ok(entry.pay)
}
