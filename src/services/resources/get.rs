use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ResourceService;
use super::display::decorate;
use crate::models::ApiResponse;
use crate::models::resources::responses::ResourceRow;
use crate::services::{error_response, parse_resource};

pub async fn get_resource(
    service: &ResourceService,
    request: &HttpRequest,
    resource: String,
    id: i64,
) -> ActixResult<HttpResponse> {
    let resource = match parse_resource(&resource) {
        Ok(resource) => resource,
        Err(e) => return Ok(error_response(&e, "Ressource inconnue")),
    };
    let settings = service.get_settings(request);

    match service.get_gateway(request, resource).get(id).await {
        Ok(record) => {
            let row = ResourceRow {
                display: decorate(resource, &record, &settings),
                record,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(row, "Resource retrieved")))
        }
        Err(e) => Ok(error_response(&e, &resource.load_failed_message())),
    }
}
