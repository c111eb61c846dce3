use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::ResourceService;
use super::display::list_response;
use crate::models::{ApiResponse, Notification};
use crate::services::{error_response, parse_resource, timed};

pub async fn delete_resource(
    service: &ResourceService,
    request: &HttpRequest,
    resource: String,
    id: i64,
) -> ActixResult<HttpResponse> {
    let resource = match parse_resource(&resource) {
        Ok(resource) => resource,
        Err(e) => return Ok(error_response(&e, "Ressource inconnue")),
    };
    let gateway = service.get_gateway(request, resource);
    let settings = service.get_settings(request);

    if let Err(e) = gateway.delete(id).await {
        return Ok(error_response(&e, "Erreur lors de la suppression"));
    }
    info!("Deleted {} {}", resource, id);
    let notification = timed(Notification::success(resource.deleted_message()));

    // 删除成功后重新加载整个列表
    match gateway.list().await {
        Ok(records) => {
            let page = list_response(resource, records, &settings);
            Ok(HttpResponse::Ok().json(
                ApiResponse::success(page, "Resource deleted").with_notification(notification),
            ))
        }
        Err(e) => {
            warn!("Failed to reload {} after delete: {}", resource, e);
            Ok(HttpResponse::Ok().json(
                ApiResponse::success_empty("Resource deleted").with_notification(notification),
            ))
        }
    }
}
