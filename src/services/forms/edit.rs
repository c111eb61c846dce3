use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use uuid::Uuid;

use super::FormService;
use crate::models::ApiResponse;
use crate::models::forms::requests::UpdateFieldsRequest;
use crate::services::error_response;

pub async fn get_form(
    service: &FormService,
    request: &HttpRequest,
    form_id: Uuid,
) -> ActixResult<HttpResponse> {
    match service.get_registry(request).view(form_id) {
        Ok(view) => Ok(HttpResponse::Ok().json(ApiResponse::success(view, "Form retrieved"))),
        Err(e) => Ok(error_response(&e, "Formulaire introuvable")),
    }
}

/// 修改字段后返回新的表单视图（派生字段已重新计算）
pub async fn update_fields(
    service: &FormService,
    request: &HttpRequest,
    form_id: Uuid,
    update_data: UpdateFieldsRequest,
) -> ActixResult<HttpResponse> {
    let updated = service.get_registry(request).update(form_id, |form| {
        form.set_fields(&update_data.fields)?;
        Ok(form.view())
    });
    match updated {
        Ok(view) => Ok(HttpResponse::Ok().json(ApiResponse::success(view, "Form updated"))),
        Err(e) => Ok(error_response(&e, "Impossible de modifier le formulaire")),
    }
}
