use actix_web::{
    dev::ServiceResponse,
    http::StatusCode,
    middleware::{ErrorHandlerResponse, ErrorHandlers},
    web, HttpRequest, HttpResponse, Responder,
};

use crate::models::ErrorResponse;
use crate::state::AppState;

fn agent_name(req: &HttpRequest) -> String {
    req.app_data::<web::Data<AppState>>()
        .map(|state| state.config.name.clone())
        .unwrap_or_default()
}

/// 未匹配路由
pub async fn not_found(req: HttpRequest) -> impl Responder {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Not Found",
        message: "The requested endpoint does not exist",
        agent: &agent_name(&req),
    })
}

pub fn error_handlers<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, internal_error)
}

/// 处理器返回 Err 时替换为固定的 500 响应体，错误详情只写日志。
/// 处理器主动构造的 500 响应（没有附带 error）原样返回。
fn internal_error<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let Some(err) = res.response().error() else {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    };
    log::error!(
        "Internal server error: {} {} - {:?}",
        res.request().method(),
        res.request().path(),
        err
    );

    let (req, _) = res.into_parts();
    let body = HttpResponse::InternalServerError().json(ErrorResponse {
        error: "Internal Server Error",
        message: "An unexpected error occurred",
        agent: &agent_name(&req),
    });

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, body).map_into_right_body(),
    ))
}
