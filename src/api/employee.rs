use actix_web::{HttpResponse, web};
use tracing::info;

use crate::api::{Payload, into_body};
use crate::error::AppError;
use crate::model::employee::{CreateEmployee, Employee};
use crate::store::{RecordStore, Store};
use crate::validation::validate_employee;

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Missing or malformed field", body = crate::error::ErrorResponse, example = json!({
            "error": "timeIn must be HH:mm 24-hour format or empty",
            "fields": [{ "field": "timeIn", "message": "timeIn must be HH:mm 24-hour format or empty" }]
        })),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse, example = json!({
            "error": "Failed to add employee."
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee<S: Store>(
    store: web::Data<S>,
    payload: Payload<CreateEmployee>,
) -> Result<HttpResponse, AppError> {
    let draft = validate_employee(into_body(payload)).map_err(AppError::validation)?;

    let saved = RecordStore::<Employee>::create(store.get_ref(), draft)
        .await
        .map_err(|e| AppError::persistence("Failed to add employee.", e))?;

    info!(employee_id = %saved.id, "Employee created");
    Ok(HttpResponse::Created().json(saved))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "Every employee, oldest first", body = [Employee]),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse, example = json!({
            "error": "Failed to fetch employees."
        }))
    ),
    tag = "Employee"
)]
pub async fn list_employees<S: Store>(store: web::Data<S>) -> Result<HttpResponse, AppError> {
    let employees = RecordStore::<Employee>::list_all(store.get_ref())
        .await
        .map_err(|e| AppError::persistence("Failed to fetch employees.", e))?;

    Ok(HttpResponse::Ok().json(employees))
}
