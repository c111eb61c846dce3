use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FormService;
use crate::forms::options::load_options;
use crate::forms::schemas::schema_for;
use crate::forms::FormController;
use crate::models::ApiResponse;
use crate::models::forms::requests::OpenFormRequest;
use crate::services::error_response;

pub async fn open_form(
    service: &FormService,
    request: &HttpRequest,
    open_data: OpenFormRequest,
) -> ActixResult<HttpResponse> {
    let datasource = service.get_datasource(request);
    let settings = service.get_settings(request);
    let resource = open_data.resource;
    let schema = schema_for(resource);

    let mut form = match open_data.id {
        Some(id) => match datasource.get(resource, id).await {
            Ok(record) => FormController::open_edit(schema, id, &record, settings),
            Err(e) => return Ok(error_response(&e, &resource.load_failed_message())),
        },
        None => FormController::open_create(schema, &open_data.preset, settings),
    };

    // 选项加载失败只产生警告
    load_options(&mut form, &datasource).await;

    match service.get_registry(request).insert(form) {
        Ok(view) => Ok(HttpResponse::Created().json(ApiResponse::success(view, "Form opened"))),
        Err(e) => Ok(error_response(&e, "Impossible d'ouvrir le formulaire")),
    }
}
