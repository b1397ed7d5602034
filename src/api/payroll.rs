use actix_web::{HttpResponse, web};
use tracing::info;

use crate::api::{Payload, into_body};
use crate::error::AppError;
use crate::model::payroll::{CreatePayroll, Payroll};
use crate::store::{RecordStore, Store};
use crate::validation::validate_payroll;

#[utoipa::path(
    post,
    path = "/api/payrolls",
    request_body = CreatePayroll,
    responses(
        (status = 201, description = "Payroll saved", body = Payroll),
        (status = 400, description = "Missing or negative figure", body = crate::error::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse, example = json!({
            "error": "Failed to save payroll data."
        }))
    ),
    tag = "Payroll"
)]
pub async fn create_payroll<S: Store>(
    store: web::Data<S>,
    payload: Payload<CreatePayroll>,
) -> Result<HttpResponse, AppError> {
    let draft = validate_payroll(into_body(payload)).map_err(AppError::validation)?;

    let saved = RecordStore::<Payroll>::create(store.get_ref(), draft)
        .await
        .map_err(|e| AppError::persistence("Failed to save payroll data.", e))?;

    info!(payroll_id = %saved.id, payday = %saved.payday, "Payroll saved");
    Ok(HttpResponse::Created().json(saved))
}

#[utoipa::path(
    get,
    path = "/api/payrolls",
    responses(
        (status = 200, body = [Payroll]),
        (status = 500, body = crate::error::ErrorResponse, example = json!({
            "error": "Failed to fetch payroll data."
        }))
    ),
    tag = "Payroll"
)]
pub async fn list_payrolls<S: Store>(store: web::Data<S>) -> Result<HttpResponse, AppError> {
    let payrolls = RecordStore::<Payroll>::list_all(store.get_ref())
        .await
        .map_err(|e| AppError::persistence("Failed to fetch payroll data.", e))?;

    Ok(HttpResponse::Ok().json(payrolls))
}
