use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;
use uuid::Uuid;

use super::FormService;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn close_form(
    service: &FormService,
    request: &HttpRequest,
    form_id: Uuid,
) -> ActixResult<HttpResponse> {
    match service.get_registry(request).remove(form_id) {
        Ok(form) => {
            debug!("Closed {} form {} without saving", form.resource(), form_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Form closed")))
        }
        Err(e) => Ok(error_response(&e, "Formulaire introuvable")),
    }
}
