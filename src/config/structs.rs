use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub backend: BackendConfig,
    pub grading: GradingConfig,
    pub forms: FormsConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub unix_socket_path: String,
    pub workers: usize,
    pub max_workers: usize,
    pub timeouts: TimeoutConfig,
    pub limits: LimitConfig,
}

/// 超时配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub client_request: u64,
    pub client_disconnect: u64,
    pub keep_alive: u64,
}

/// 限制配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    pub max_payload_size: usize,
}

/// CORS 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub max_age: usize,
}

/// 后端数据源配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String, // 后端 REST API 根地址
    pub mock_data: bool,  // 为 true 时使用内存夹具数据源
}

/// 成绩计算配置
///
/// 两个常量在原有界面中并不一致（100 与 20），保留为可配置项。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingConfig {
    pub weighted_divisor: f64, // 成绩单明细：加权值 = 平均分 × 系数 / weighted_divisor
    pub average_scale: f64,    // 成绩列表：平均分 = 得分 / 满分 × average_scale
}

/// 表单配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormsConfig {
    pub max_open: usize,      // 同时打开的表单上限
    pub notification_ms: u64, // 通知自动隐藏时间（毫秒）
}
