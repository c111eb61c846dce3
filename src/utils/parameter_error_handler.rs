use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode, Notification};

fn bad_request(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(
        ApiResponse::error_empty(ErrorCode::BadRequest, message)
            .with_notification(Notification::error("Requête invalide")),
    )
}

// JSON 请求体解析失败
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Invalid JSON body on {}: {}", req.path(), err);
    let message = format!("Invalid JSON payload: {err}");
    actix_web::error::InternalError::from_response(err, bad_request(message)).into()
}

// 查询参数解析失败
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Invalid query string on {}: {}", req.path(), err);
    let message = format!("Invalid query parameters: {err}");
    actix_web::error::InternalError::from_response(err, bad_request(message)).into()
}

// 路径参数解析失败（资源名未知、id 非数字等）
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!("Invalid path parameters on {}: {}", req.path(), err);
    let message = format!("Invalid path parameters: {err}");
    actix_web::error::InternalError::from_response(err, bad_request(message)).into()
}
