use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::{Payload, into_body};
use crate::calculator::calculate_thirteenth_month;
use crate::error::AppError;
use crate::store::Store;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CalculateRequest {
    #[serde(rename = "employeeId")]
    #[schema(example = "5f0c3c59-2f5e-4c3b-9d55-0b6a4b3c1e01")]
    pub employee_id: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CalculateResponse {
    #[schema(example = 216.67)]
    pub pay: f64,
}

/// Calculate 13th month pay
///
/// Derives one twelfth of the employee's monthly salary and appends it to
/// their history.
#[utoipa::path(
    post,
    path = "/api/calculate",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Pay computed and recorded", body = CalculateResponse),
        (status = 400, description = "employeeId missing", body = crate::error::ErrorResponse, example = json!({
            "error": "employeeId required"
        })),
        (status = 404, description = "No such employee", body = crate::error::ErrorResponse, example = json!({
            "error": "Employee not found"
        })),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse, example = json!({
            "error": "Calculation failed."
        }))
    ),
    tag = "Thirteenth Month"
)]
pub async fn calculate<S: Store>(
    store: web::Data<S>,
    payload: Payload<CalculateRequest>,
) -> Result<HttpResponse, AppError> {
    let request = into_body(payload);
    let pay = calculate_thirteenth_month(store.get_ref(), request.employee_id.as_deref()).await?;

    Ok(HttpResponse::Ok().json(CalculateResponse { pay }))
}
