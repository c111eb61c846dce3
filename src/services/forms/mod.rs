pub mod close;
pub mod edit;
pub mod open;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::datasource::DataSource;
use crate::forms::FormRegistry;
use crate::grading::GradingSettings;
use crate::models::forms::requests::{OpenFormRequest, UpdateFieldsRequest};

pub struct FormService {
    datasource: Option<Arc<dyn DataSource>>,
}

impl FormService {
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

    pub(crate) fn get_registry<'a>(&self, request: &'a HttpRequest) -> &'a FormRegistry {
        request
            .app_data::<web::Data<FormRegistry>>()
            .expect("FormRegistry not found in app data")
            .get_ref()
    }

    pub(crate) fn get_settings(&self, request: &HttpRequest) -> GradingSettings {
        super::grading_from(request)
    }

    // 打开新建或编辑表单
    pub async fn open_form(
        &self,
        request: &HttpRequest,
        open_data: OpenFormRequest,
    ) -> ActixResult<HttpResponse> {
        open::open_form(self, request, open_data).await
    }

    // 查看表单当前状态
    pub async fn get_form(&self, request: &HttpRequest, form_id: Uuid) -> ActixResult<HttpResponse> {
        edit::get_form(self, request, form_id).await
    }

    // 修改表单字段
    pub async fn update_fields(
        &self,
        request: &HttpRequest,
        form_id: Uuid,
        update_data: UpdateFieldsRequest,
    ) -> ActixResult<HttpResponse> {
        edit::update_fields(self, request, form_id, update_data).await
    }

    // 提交表单
    pub async fn submit_form(
        &self,
        request: &HttpRequest,
        form_id: Uuid,
    ) -> ActixResult<HttpResponse> {
        submit::submit_form(self, request, form_id).await
    }

    // 关闭表单，不保存
    pub async fn close_form(&self, request: &HttpRequest, form_id: Uuid) -> ActixResult<HttpResponse> {
        close::close_form(self, request, form_id).await
    }
}
