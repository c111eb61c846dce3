//! 控制台业务逻辑
//!
//! 所有后端失败都在这一层被捕获、记录日志并转换为带通知的错误响应。

pub mod dashboard;
pub mod forms;
pub mod resources;
pub mod status;

pub use dashboard::DashboardService;
pub use forms::FormService;
pub use resources::ResourceService;
pub use status::StatusService;

use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;
use ts_rs::TS;

use crate::config::AppConfig;
use crate::datasource::DataSource;
use crate::errors::EduConnectError;
use crate::grading::GradingSettings;
use crate::models::{ApiResponse, ErrorCode, Notification, ResourceKind};

/// 从 app_data 获取数据源
pub(crate) fn datasource_from(request: &HttpRequest) -> Arc<dyn DataSource> {
    request
        .app_data::<web::Data<Arc<dyn DataSource>>>()
        .expect("DataSource not found in app data")
        .get_ref()
        .clone()
}

/// 成绩计算参数，未注入时使用全局配置
pub(crate) fn grading_from(request: &HttpRequest) -> GradingSettings {
    request
        .app_data::<web::Data<GradingSettings>>()
        .map(|settings| *settings.get_ref())
        .unwrap_or_else(|| GradingSettings::from(&AppConfig::get().grading))
}

fn status_and_code(err: &EduConnectError) -> (actix_web::http::StatusCode, ErrorCode) {
    use actix_web::http::StatusCode;
    match err {
        EduConnectError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NotFound),
        EduConnectError::UnknownResource(_) => (StatusCode::NOT_FOUND, ErrorCode::UnknownResource),
        EduConnectError::FormNotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::FormNotFound),
        EduConnectError::FormLimit(_) => {
            (StatusCode::TOO_MANY_REQUESTS, ErrorCode::FormLimitReached)
        }
        EduConnectError::Validation(_) | EduConnectError::DateParse(_) => {
            (StatusCode::BAD_REQUEST, ErrorCode::FormValidationFailed)
        }
        EduConnectError::NetworkUnreachable(_) | EduConnectError::Timeout(_) => {
            (StatusCode::SERVICE_UNAVAILABLE, ErrorCode::BackendUnavailable)
        }
        EduConnectError::ClientStatus(_) => {
            (StatusCode::UNPROCESSABLE_ENTITY, ErrorCode::BackendRejected)
        }
        EduConnectError::ServerStatus(_) | EduConnectError::Serialization(_) => {
            (StatusCode::BAD_GATEWAY, ErrorCode::BackendError)
        }
        EduConnectError::Config(_) | EduConnectError::DataSourceNotFound(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::InternalServerError)
        }
    }
}

/// 按配置设置通知的自动隐藏时间
pub(crate) fn timed(notification: Notification) -> Notification {
    notification.auto_hide(AppConfig::get().forms.notification_ms)
}

/// 错误对应的用户提示
///
/// 校验类错误的消息本身就是提示语，其余使用调用方给出的提示。
pub(crate) fn notification_for(err: &EduConnectError, fallback: &str) -> Notification {
    match err {
        EduConnectError::Validation(msg) => Notification::error(msg.clone()),
        EduConnectError::DateParse(msg) => Notification::error(format!("Date invalide : {msg}")),
        EduConnectError::FormNotFound(_) => {
            Notification::error("Ce formulaire a été fermé ou a expiré")
        }
        EduConnectError::FormLimit(_) => {
            Notification::error("Trop de formulaires ouverts, veuillez en fermer")
        }
        EduConnectError::UnknownResource(msg) => Notification::error(msg.clone()),
        _ => Notification::error(fallback),
    }
}

/// 错误响应（无数据）
pub(crate) fn error_response(err: &EduConnectError, fallback: &str) -> HttpResponse {
    error_response_with(err, fallback, None::<()>)
}

/// 错误响应，附带数据（例如保持打开的表单）
pub(crate) fn error_response_with<T: Serialize + TS>(
    err: &EduConnectError,
    fallback: &str,
    data: Option<T>,
) -> HttpResponse {
    let (status, code) = status_and_code(err);
    if err.is_backend_failure() {
        match err.help_hint() {
            Some(hint) => warn!("{} ({})", err, hint),
            None => warn!("{}", err),
        }
    }
    let notification = timed(notification_for(err, fallback));
    let body = ApiResponse {
        code: code as i32,
        message: err.format_simple(),
        data,
        notification: Some(notification),
        timestamp: chrono::Utc::now(),
    };
    HttpResponse::build(status).json(body)
}

/// 解析路径中的资源名
pub(crate) fn parse_resource(segment: &str) -> Result<ResourceKind, EduConnectError> {
    segment
        .parse::<ResourceKind>()
        .map_err(|_| EduConnectError::unknown_resource(format!("Ressource inconnue : {segment}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use crate::models::Severity;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_and_code(&EduConnectError::not_found("x")).0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_and_code(&EduConnectError::network_unreachable("x")),
            (StatusCode::SERVICE_UNAVAILABLE, ErrorCode::BackendUnavailable)
        );
        assert_eq!(
            status_and_code(&EduConnectError::client_status("x")).1,
            ErrorCode::BackendRejected
        );
        assert_eq!(
            status_and_code(&EduConnectError::validation("x")).0,
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_notification_text() {
        let n = notification_for(
            &EduConnectError::validation("Veuillez remplir les champs obligatoires"),
            "Erreur lors de la sauvegarde",
        );
        assert_eq!(n.message, "Veuillez remplir les champs obligatoires");
        assert_eq!(n.severity, Severity::Error);

        let n = notification_for(
            &EduConnectError::server_status("HTTP 500"),
            "Erreur lors de la sauvegarde",
        );
        assert_eq!(n.message, "Erreur lors de la sauvegarde");
    }

    #[test]
    fn test_parse_resource() {
        assert_eq!(parse_resource("notes").unwrap(), ResourceKind::Notes);
        assert!(matches!(
            parse_resource("devoirs"),
            Err(EduConnectError::UnknownResource(_))
        ));
    }
}
