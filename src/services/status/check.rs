//! 连接状态检查：逐个探测后端端点

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::future::join_all;
use std::sync::Arc;
use tracing::{debug, warn};

use super::StatusService;
use crate::datasource::DataSource;
use crate::errors::EduConnectError;
use crate::models::status::responses::{
    ComponentStatus, EndpointStatus, ProbeStatus, StatusReport,
};
use crate::models::{ApiResponse, Notification, ResourceKind};

/// 被探测的端点
pub const PROBED: [ResourceKind; 8] = [
    ResourceKind::Users,
    ResourceKind::Eleves,
    ResourceKind::Classes,
    ResourceKind::Cours,
    ResourceKind::Notes,
    ResourceKind::Paiements,
    ResourceKind::Communications,
    ResourceKind::Roles,
];

fn failure_message(err: &EduConnectError) -> String {
    match err {
        EduConnectError::NetworkUnreachable(_) | EduConnectError::Timeout(_) => {
            "Backend indisponible".to_string()
        }
        EduConnectError::NotFound(_) => "Erreur 404".to_string(),
        EduConnectError::ClientStatus(msg) | EduConnectError::ServerStatus(msg) => {
            match http_status(msg) {
                Some(status) => format!("Erreur {status}"),
                None => "Erreur".to_string(),
            }
        }
        other => format!("Erreur : {}", other.message()),
    }
}

/// 从 "GET /users: HTTP 500 ..." 中取出状态码
fn http_status(message: &str) -> Option<u16> {
    message
        .split_once("HTTP ")
        .and_then(|(_, rest)| rest.get(..3))
        .and_then(|code| code.parse().ok())
}

pub async fn probe(source: &Arc<dyn DataSource>, resource: ResourceKind) -> EndpointStatus {
    let url = format!("{}{}", source.describe(), resource.path());
    let (status, message) = match source.list(resource).await {
        Ok(_) => (ProbeStatus::Ok, "Accessible".to_string()),
        Err(e) => {
            debug!("Probe {} failed: {}", url, e);
            (ProbeStatus::Error, failure_message(&e))
        }
    };
    EndpointStatus {
        resource,
        name: resource.title().to_string(),
        url,
        status,
        message,
    }
}

/// 按配置的允许来源给出 CORS 状态，空列表时浏览器端请求都会被拒绝
pub fn cors_status(origins: &[String]) -> ComponentStatus {
    if origins.is_empty() {
        ComponentStatus {
            status: ProbeStatus::Error,
            message: "Aucune origine CORS autorisée".to_string(),
        }
    } else if origins.iter().any(|origin| origin == "*") {
        ComponentStatus {
            status: ProbeStatus::Ok,
            message: "CORS ouvert à toutes les origines".to_string(),
        }
    } else {
        ComponentStatus {
            status: ProbeStatus::Ok,
            message: format!(
                "CORS configuré correctement ({} origine(s))",
                origins.len()
            ),
        }
    }
}

pub async fn build_report(
    source: &Arc<dyn DataSource>,
    allowed_origins: Vec<String>,
) -> StatusReport {
    let endpoints = join_all(PROBED.iter().map(|&resource| probe(source, resource))).await;
    let reachable = endpoints.iter().any(|e| e.status == ProbeStatus::Ok);

    let backend = if reachable {
        ComponentStatus {
            status: ProbeStatus::Ok,
            message: "Backend accessible".to_string(),
        }
    } else {
        ComponentStatus {
            status: ProbeStatus::Error,
            message: "Backend indisponible".to_string(),
        }
    };

    StatusReport {
        console: ComponentStatus {
            status: ProbeStatus::Ok,
            message: "Console opérationnelle".to_string(),
        },
        backend,
        cors: cors_status(&allowed_origins),
        mode: source.mode().to_string(),
        allowed_origins,
        endpoints,
    }
}

pub async fn check_status(
    service: &StatusService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let source = service.get_datasource(request);
    let origins = service.get_config().cors.allowed_origins.clone();
    let report = build_report(&source, origins).await;

    let mut response = ApiResponse::success(report.clone(), "Status checked");
    if report.backend.status == ProbeStatus::Error {
        warn!("Backend at {} is not reachable", source.describe());
        response = response.with_notification(Notification::warning(format!(
            "Le backend EduConnect n'est pas accessible sur {}",
            source.describe()
        )));
    }
    Ok(HttpResponse::Ok().json(response))
}
