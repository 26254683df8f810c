pub mod errors;
pub mod metrics;
pub mod probes;
pub mod process;

use actix_web::web;

pub use errors::{error_handlers, not_found};
pub use metrics::{get_metrics, get_prometheus_metrics};
pub use probes::{health, info, ready};
pub use process::process;

/// 注册所有路由。已知路径上方法不匹配返回 405，其余未匹配路径返回 404
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(info)))
        .service(web::resource("/health").route(web::get().to(health)))
        .service(web::resource("/ready").route(web::get().to(ready)))
        .service(web::resource("/metrics").route(web::get().to(get_metrics)))
        .service(web::resource("/metrics/prometheus").route(web::get().to(get_prometheus_metrics)))
        .service(web::resource("/process").route(web::post().to(process)))
        .default_service(web::route().to(not_found));
}
