pub mod board;
pub mod delete;
pub mod display;
pub mod get;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::datasource::{DataSource, ResourceGateway};
use crate::grading::GradingSettings;
use crate::models::ResourceKind;

pub struct ResourceService {
    datasource: Option<Arc<dyn DataSource>>,
}

impl ResourceService {
    pub fn new_lazy() -> Self {
        Self { datasource: None }
    }

    pub(crate) fn get_datasource(&self, request: &HttpRequest) -> Arc<dyn DataSource> {
        if let Some(datasource) = &self.datasource {
            datasource.clone()
        } else {
            super::datasource_from(request)
        }
    }

    pub(crate) fn get_gateway(&self, request: &HttpRequest, resource: ResourceKind) -> ResourceGateway {
        ResourceGateway::new(resource, self.get_datasource(request))
    }

    pub(crate) fn get_settings(&self, request: &HttpRequest) -> GradingSettings {
        super::grading_from(request)
    }

    // 资源列表页
    pub async fn list_resource(
        &self,
        request: &HttpRequest,
        resource: String,
    ) -> ActixResult<HttpResponse> {
        list::list_resource(self, request, resource).await
    }

    // 获取单条记录
    pub async fn get_resource(
        &self,
        request: &HttpRequest,
        resource: String,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_resource(self, request, resource, id).await
    }

    // 删除记录并重新加载列表
    pub async fn delete_resource(
        &self,
        request: &HttpRequest,
        resource: String,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_resource(self, request, resource, id).await
    }

    // 成绩单明细看板
    pub async fn detail_board(
        &self,
        request: &HttpRequest,
        bulletin: Option<i64>,
    ) -> ActixResult<HttpResponse> {
        board::detail_board(self, request, bulletin).await
    }
}
