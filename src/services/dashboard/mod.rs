pub mod overview;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::datasource::DataSource;

pub struct DashboardService {
    datasource: Option<Arc<dyn DataSource>>,
}

impl DashboardService {
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

    // 首页统计
    pub async fn get_overview(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        overview::get_overview(self, request).await
    }
}
