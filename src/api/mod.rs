use actix_web::{
    Either, HttpRequest,
    error::{JsonPayloadError, UrlencodedError},
    web,
};

use crate::error::{AppError, FieldError};

pub mod calculate;
pub mod employee;
pub mod history;
pub mod payroll;


/// Request body accepted either as JSON or as an urlencoded form.
pub type Payload<T> = Either<web::Json<T>, web::Form<T>>;

pub fn into_body<T>(payload: Payload<T>) -> T {
    match payload {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

/// Turn unreadable JSON bodies into the usual `{ "error": ... }` response.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        let message = match &err {
            JsonPayloadError::ContentType => {
                "request body must be JSON or form-encoded".to_string()
            }
            other => format!("malformed request body: {other}"),
        };
        AppError::from(FieldError::new("body", message)).into()
    })
}

pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err: UrlencodedError, _req: &HttpRequest| {
        AppError::from(FieldError::new("body", format!("malformed form body: {err}"))).into()
    })
}
