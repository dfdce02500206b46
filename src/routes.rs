use crate::{api::attendance, config::Config};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    cfg.service(
        web::scope(&config.api_prefix).service(
            web::scope("/attendance")
                // /attendance/upload
                .service(
                    web::resource("/upload").route(web::post().to(attendance::upload_attendance)),
                )
                // /attendance/dashboard
                .service(
                    web::resource("/dashboard").route(web::get().to(attendance::get_dashboard)),
                )
                // /attendance/employees
                .service(
                    web::resource("/employees").route(web::get().to(attendance::list_employees)),
                )
                // /attendance/employee/{name}
                .service(
                    web::resource("/employee/{name}")
                        .route(web::get().to(attendance::get_employee)),
                ),
        ),
    );
}
