use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};
use uuid::Uuid;

use super::FormService;
use crate::errors::EduConnectError;
use crate::models::{ApiResponse, Notification};
use crate::services::resources::display::list_response;
use crate::services::{error_response, error_response_with, timed};

const SAVE_FAILED: &str = "Erreur lors de la sauvegarde";

/// 提交表单
///
/// 成功时关闭表单并重新加载整个列表；失败时表单保持打开，草稿不变，
/// 响应中附带当前表单视图。
pub async fn submit_form(
    service: &FormService,
    request: &HttpRequest,
    form_id: Uuid,
) -> ActixResult<HttpResponse> {
    let registry = service.get_registry(request);
    let datasource = service.get_datasource(request);
    let settings = service.get_settings(request);

    let submission = match registry.submission(form_id) {
        Ok(submission) => submission,
        Err(e) => return Ok(keep_open(service, request, form_id, &e)),
    };
    let resource = submission.resource;

    let saved = match submission.entity_id {
        Some(id) => datasource.update(resource, id, submission.payload).await,
        None => datasource.create(resource, submission.payload).await,
    };
    if let Err(e) = saved {
        return Ok(keep_open(service, request, form_id, &e));
    }

    let notification = if submission.entity_id.is_some() {
        timed(Notification::success(resource.updated_message()))
    } else {
        timed(Notification::success(resource.created_message()))
    };
    info!(
        "Saved {} form {} ({})",
        resource,
        form_id,
        submission.entity_id.map_or("create".to_string(), |id| format!("update {id}"))
    );

    // 保存期间表单可能已被关闭
    if let Err(e) = registry.remove(form_id) {
        warn!("Form {} was closed during submit: {}", form_id, e);
    }

    match datasource.list(resource).await {
        Ok(records) => {
            let page = list_response(resource, records, &settings);
            Ok(HttpResponse::Ok().json(
                ApiResponse::success(page, "Form submitted").with_notification(notification),
            ))
        }
        Err(e) => {
            warn!("Failed to reload {} after submit: {}", resource, e);
            Ok(HttpResponse::Ok().json(
                ApiResponse::success_empty("Form submitted").with_notification(notification),
            ))
        }
    }
}

fn keep_open(
    service: &FormService,
    request: &HttpRequest,
    form_id: Uuid,
    err: &EduConnectError,
) -> HttpResponse {
    match service.get_registry(request).view(form_id) {
        Ok(view) => error_response_with(err, SAVE_FAILED, Some(view)),
        Err(_) => error_response(err, SAVE_FAILED),
    }
}
