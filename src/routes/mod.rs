pub mod dashboard;

pub mod forms;

pub mod resources;

pub mod status;

pub use dashboard::configure_dashboard_routes;
pub use forms::configure_form_routes;
pub use resources::configure_resource_routes;
pub use status::configure_status_routes;

use actix_web::web;

/// 控制台 API 的路径前缀
pub const API_PREFIX: &str = "/api/console";

/// 注册全部路由
pub fn configure_console_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_resource_routes)
        .configure(configure_form_routes)
        .configure(configure_dashboard_routes)
        .configure(configure_status_routes);
}
