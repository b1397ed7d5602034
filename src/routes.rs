use std::path::Path;

use actix_files::{Files, NamedFile};
use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::{
    api::{calculate, employee, history, payroll},
    config::Config,
    store::Store,
};

pub fn configure<S: Store>(cfg: &mut web::ServiceConfig, config: &Config) {
    cfg.service(
        web::scope(&config.api_prefix)
            // /payrolls
            .service(
                web::resource("/payrolls")
                    .route(web::post().to(payroll::create_payroll::<S>))
                    .route(web::get().to(payroll::list_payrolls::<S>)),
            )
            // /employees
            .service(
                web::resource("/employees")
                    .route(web::post().to(employee::create_employee::<S>))
                    .route(web::get().to(employee::list_employees::<S>)),
            )
            // /calculate
            .service(web::resource("/calculate").route(web::post().to(calculate::calculate::<S>)))
            // /history/{employee_id}
            .service(
                web::resource("/history/{employee_id}")
                    .route(web::get().to(history::list_history::<S>)),
            )
            .default_service(web::to(api_not_found)),
    );
}

/// Everything outside the API: files from the frontend bundle, and its
/// `index.html` for any path that is not a file.
pub fn configure_frontend(cfg: &mut web::ServiceConfig, config: &Config) {
    cfg.service(
        Files::new("/", &config.static_dir)
            .index_file("index.html")
            .default_handler(web::to(frontend_index)),
    );
}

async fn frontend_index(config: web::Data<Config>) -> actix_web::Result<NamedFile> {
    let index = Path::new(&config.static_dir).join("index.html");
    Ok(NamedFile::open_async(index).await?)
}

async fn api_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "error": "Not found"
    }))
}
