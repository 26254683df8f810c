use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;

use crate::models::MetricsResponse;
use crate::state::AppState;

pub async fn get_metrics(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(MetricsResponse {
        agent: &data.config.name,
        uptime_seconds: data.uptime_seconds(),
        requests_processed: data.requests_processed(),
        status: data.status(),
        timestamp: Utc::now(),
    })
}

/// Prometheus 文本格式
pub async fn get_prometheus_metrics(data: web::Data<AppState>) -> impl Responder {
    match data.metrics.render(data.uptime_seconds()) {
        Ok(metrics_text) => HttpResponse::Ok()
            .content_type("text/plain; version=0.0.4")
            .body(metrics_text),
        Err(e) => {
            log::error!("Failed to render metrics: {}", e);
            HttpResponse::InternalServerError().body("Failed to render metrics")
        }
    }
}
