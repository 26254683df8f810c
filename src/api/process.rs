use actix_web::{http::header, web, HttpRequest, HttpResponse, Responder};
use chrono::Utc;
use serde_json::Value;

use crate::error::ProcessError;
use crate::models::{ProcessErrorResponse, ProcessResponse};
use crate::state::AppState;

/// application/json 或 application/*+json
fn ensure_json_content_type(req: &HttpRequest) -> Result<(), ProcessError> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    let is_json = mime == "application/json"
        || (mime.starts_with("application/") && mime.ends_with("+json"));
    if is_json {
        Ok(())
    } else {
        Err(ProcessError::UnsupportedMediaType(content_type.to_string()))
    }
}

/// 先检查 Content-Type，再按上限读取请求体并解析 JSON
pub async fn read_payload(
    req: &HttpRequest,
    payload: web::Payload,
    limit: usize,
) -> Result<Value, ProcessError> {
    ensure_json_content_type(req)?;
    let body = payload
        .to_bytes_limited(limit)
        .await
        .map_err(|_| ProcessError::PayloadTooLarge(limit))??;
    Ok(serde_json::from_slice(&body)?)
}

/// 示例处理逻辑：回显输入。解析失败时不计数
pub async fn process(
    req: HttpRequest,
    payload: web::Payload,
    data: web::Data<AppState>,
) -> impl Responder {
    let agent = data.config.name.as_str();

    match read_payload(&req, payload, data.config.max_payload_bytes).await {
        Ok(input) => {
            log::info!("Processing request: {}", input);
            let total = data.record_processed();
            log::info!("Request processed successfully (total: {})", total);

            HttpResponse::Ok().json(ProcessResponse {
                agent,
                status: "success",
                message: format!("Request processed by {}", agent),
                input,
                timestamp: Utc::now(),
            })
        }
        Err(e) => {
            log::error!("Error processing request: {}", e);
            data.record_failure();

            HttpResponse::InternalServerError().json(ProcessErrorResponse {
                agent,
                status: "error",
                error: e.to_string(),
                timestamp: Utc::now(),
            })
        }
    }
}
