use actix_web::{HttpResponse, web};

use crate::error::AppError;
use crate::store::Store;

#[utoipa::path(
    get,
    path = "/api/history/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Calculations for the employee, newest first", body = [crate::model::history::History]),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse, example = json!({
            "error": "Failed to fetch history."
        }))
    ),
    tag = "Thirteenth Month"
)]
pub async fn list_history<S: Store>(
    store: web::Data<S>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let employee_id = path.into_inner();

    let history = store
        .list_by_employee(&employee_id)
        .await
        .map_err(|e| AppError::persistence("Failed to fetch history.", e))?;

    Ok(HttpResponse::Ok().json(history))
}
