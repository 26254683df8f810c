use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;

use crate::models::{Endpoints, HealthResponse, InfoResponse, ReadyResponse, AGENT_VERSION};
use crate::state::AppState;

pub async fn info(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(InfoResponse {
        agent: &data.config.name,
        description: &data.config.description,
        version: AGENT_VERSION,
        status: data.status(),
        endpoints: Endpoints::default(),
    })
}

/// 存活探针：进程在就返回 200，不检查依赖
pub async fn health(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        agent: &data.config.name,
        timestamp: Utc::now(),
    })
}

/// 就绪探针：状态为 ready/running 时返回 200，否则 503。
///
/// 依赖只要配置了就视为就绪，这里不做连通性检查。
pub async fn ready(data: web::Data<AppState>) -> impl Responder {
    let is_ready = data.status().is_ready();
    let body = ReadyResponse {
        status: if is_ready { "ready" } else { "not_ready" },
        agent: &data.config.name,
        dependencies: data.config.dependencies(),
        timestamp: Utc::now(),
    };

    if is_ready {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
