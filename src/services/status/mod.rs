pub mod check;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::datasource::DataSource;

pub struct StatusService {
    datasource: Option<Arc<dyn DataSource>>,
}

impl StatusService {
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

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 连接状态检查
    pub async fn check_status(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        check::check_status(self, request).await
    }
}
