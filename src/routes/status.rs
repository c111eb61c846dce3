use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::API_PREFIX;
use crate::services::StatusService;

static STATUS_SERVICE: Lazy<StatusService> = Lazy::new(StatusService::new_lazy);

pub async fn check_status(req: HttpRequest) -> ActixResult<HttpResponse> {
    STATUS_SERVICE.check_status(&req).await
}

pub fn configure_status_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(format!("{API_PREFIX}/status")).route(web::get().to(check_status)));
}
