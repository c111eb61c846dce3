use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::ResourceService;
use super::display::list_response;
use crate::models::ApiResponse;
use crate::services::{error_response, parse_resource};

pub async fn list_resource(
    service: &ResourceService,
    request: &HttpRequest,
    resource: String,
) -> ActixResult<HttpResponse> {
    let resource = match parse_resource(&resource) {
        Ok(resource) => resource,
        Err(e) => return Ok(error_response(&e, "Ressource inconnue")),
    };
    let gateway = service.get_gateway(request, resource);
    let settings = service.get_settings(request);

    match gateway.list().await {
        Ok(records) => {
            debug!("Loaded {} {} records", records.len(), resource);
            let page = list_response(resource, records, &settings);
            Ok(HttpResponse::Ok().json(ApiResponse::success(page, "Resource list retrieved")))
        }
        Err(e) => Ok(error_response(&e, &resource.load_failed_message())),
    }
}
