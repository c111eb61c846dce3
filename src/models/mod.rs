pub mod adresses;
pub mod bulletins;
pub mod classes;
pub mod common;
pub mod communications;
pub mod cours;
pub mod dashboard;
pub mod eleves;
pub mod forms;
pub mod notes;
pub mod paiements;
pub mod parents;
pub mod resources;
pub mod status;
pub mod users;

pub use common::{ApiResponse, Notification, ResourceKind, SelectOption, Severity};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

// 响应码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 通用请求错误
    BadRequest = 1000,
    ValidationFailed = 1001,
    NotFound = 1004,

    // 控制台错误
    UnknownResource = 2000,
    FormNotFound = 2001,
    FormValidationFailed = 2002,
    FormLimitReached = 2003,

    // 后端错误
    BackendUnavailable = 3000,
    BackendRejected = 3001,
    BackendError = 3002,

    InternalServerError = 5000,
}
