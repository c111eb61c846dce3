use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use uuid::Uuid;

use super::API_PREFIX;
use crate::models::forms::requests::{OpenFormRequest, UpdateFieldsRequest};
use crate::services::FormService;

// 懒加载的全局 FORM_SERVICE 实例
static FORM_SERVICE: Lazy<FormService> = Lazy::new(FormService::new_lazy);

// HTTP处理程序
pub async fn open_form(
    req: HttpRequest,
    open_data: web::Json<OpenFormRequest>,
) -> ActixResult<HttpResponse> {
    FORM_SERVICE.open_form(&req, open_data.into_inner()).await
}

pub async fn get_form(req: HttpRequest, form_id: web::Path<Uuid>) -> ActixResult<HttpResponse> {
    FORM_SERVICE.get_form(&req, form_id.into_inner()).await
}

pub async fn update_fields(
    req: HttpRequest,
    form_id: web::Path<Uuid>,
    update_data: web::Json<UpdateFieldsRequest>,
) -> ActixResult<HttpResponse> {
    FORM_SERVICE
        .update_fields(&req, form_id.into_inner(), update_data.into_inner())
        .await
}

pub async fn submit_form(req: HttpRequest, form_id: web::Path<Uuid>) -> ActixResult<HttpResponse> {
    FORM_SERVICE.submit_form(&req, form_id.into_inner()).await
}

pub async fn close_form(req: HttpRequest, form_id: web::Path<Uuid>) -> ActixResult<HttpResponse> {
    FORM_SERVICE.close_form(&req, form_id.into_inner()).await
}

// 配置路由
pub fn configure_form_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(&format!("{API_PREFIX}/forms"))
            .service(web::resource("").route(web::post().to(open_form)))
            .service(
                web::resource("/{form_id}")
                    .route(web::get().to(get_form))
                    .route(web::patch().to(update_fields))
                    .route(web::delete().to(close_form)),
            )
            .service(web::resource("/{form_id}/submit").route(web::post().to(submit_form))),
    );
}
