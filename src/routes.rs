use crate::{
    api::{MessageResponse, attendance, employee},
    config::Config,
    error::HrmsError,
};
use actix_cors::Cors;
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::{HttpResponse, Responder, Scope, get, web};
use anyhow::{Result, anyhow};

pub type RateLimit = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse::new("HRMS Lite Backend Running"))
}

/// Per-IP limiter shared by every worker.
pub fn build_limiter(requests_per_min: u32) -> Result<RateLimit> {
    let per_ms = if requests_per_min == 0 {
        1
    } else {
        (60_000 / requests_per_min as u64).max(1)
    };
    GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min.max(1))
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow!("invalid rate limit: {requests_per_min} requests per minute"))
}

pub fn cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

/// Body and query-string decode failures answer like any other validation error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| HrmsError::validation(err.to_string()).into())
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| HrmsError::validation(err.to_string()).into())
}

pub fn api_scope(prefix: &str) -> Scope {
    web::scope(prefix)
        // /employee
        .service(web::resource("/employee").route(web::post().to(employee::add_employee)))
        // /employee/{emp_id}
        .service(
            web::resource("/employee/{emp_id}").route(web::delete().to(employee::delete_employee)),
        )
        // /employees
        .service(web::resource("/employees").route(web::get().to(employee::list_employees)))
        // /attendance
        .service(web::resource("/attendance").route(web::post().to(attendance::mark_attendance)))
        // /attendance/{emp_id}
        .service(
            web::resource("/attendance/{emp_id}").route(web::get().to(attendance::list_attendance)),
        )
        // /attendance/{emp_id}/filter
        .service(
            web::resource("/attendance/{emp_id}/filter")
                .route(web::get().to(attendance::filter_attendance)),
        )
        // /summary
        .service(web::resource("/summary").route(web::get().to(attendance::attendance_summary)))
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, limiter: &RateLimit) {
    cfg.service(index);
    cfg.service(api_scope(&config.api_prefix).wrap(Governor::new(limiter)));
}
