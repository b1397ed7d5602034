use crate::api::calculate::{CalculateRequest, CalculateResponse};
use crate::error::{ErrorResponse, FieldError};
use crate::model::employee::{CreateEmployee, Employee};
use crate::model::history::History;
use crate::model::payroll::{CreatePayroll, Payroll};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payroll Records API",
        version = "0.1.0",
        description = r#"
## Payroll and 13th-month pay records

Stores employee profiles and payroll snapshots, and computes 13th-month pay.

### Key Features
- **Employees**: create and list employee profiles with optional clock-in/out times
- **Payroll**: store pre-computed payroll snapshots
- **13th Month Pay**: compute one twelfth of the monthly salary and keep a history of every calculation

### Response Format
- JSON bodies; request bodies may also be form-encoded
- Every failure is `{ "error": "..." }`, validation failures add `fields`
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,

        crate::api::payroll::create_payroll,
        crate::api::payroll::list_payrolls,

        crate::api::calculate::calculate,
        crate::api::history::list_history
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            Payroll,
            CreatePayroll,
            History,
            CalculateRequest,
            CalculateResponse,
            ErrorResponse,
            FieldError
        )
    ),
    tags(
        (name = "Employee", description = "Employee records"),
        (name = "Payroll", description = "Payroll snapshots"),
        (name = "Thirteenth Month", description = "13th month pay calculation and history"),
    )
)]
pub struct ApiDoc;
