use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde::Deserialize;

use super::API_PREFIX;
use crate::services::ResourceService;

// 懒加载的全局 RESOURCE_SERVICE 实例
static RESOURCE_SERVICE: Lazy<ResourceService> = Lazy::new(ResourceService::new_lazy);

#[derive(Debug, Deserialize)]
pub struct BoardQuery {
    pub bulletin: Option<i64>,
}

// HTTP处理程序
pub async fn list_resource(req: HttpRequest, path: web::Path<String>) -> ActixResult<HttpResponse> {
    RESOURCE_SERVICE
        .list_resource(&req, path.into_inner())
        .await
}

pub async fn get_resource(
    req: HttpRequest,
    path: web::Path<(String, i64)>,
) -> ActixResult<HttpResponse> {
    let (resource, id) = path.into_inner();
    RESOURCE_SERVICE.get_resource(&req, resource, id).await
}

pub async fn delete_resource(
    req: HttpRequest,
    path: web::Path<(String, i64)>,
) -> ActixResult<HttpResponse> {
    let (resource, id) = path.into_inner();
    RESOURCE_SERVICE.delete_resource(&req, resource, id).await
}

pub async fn detail_board(
    req: HttpRequest,
    query: web::Query<BoardQuery>,
) -> ActixResult<HttpResponse> {
    RESOURCE_SERVICE
        .detail_board(&req, query.into_inner().bulletin)
        .await
}

// 配置路由
pub fn configure_resource_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(format!("{API_PREFIX}/detail-bulletins/board"))
            .route(web::get().to(detail_board)),
    )
    .service(
        web::scope(&format!("{API_PREFIX}/resources"))
            .service(web::resource("/{resource}").route(web::get().to(list_resource)))
            .service(
                web::resource("/{resource}/{id}")
                    .route(web::get().to(get_resource))
                    .route(web::delete().to(delete_resource)),
            ),
    );
}
