//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 后端网关的失败按传输层分类（网络、超时、4xx、5xx、解码），
//! 由服务层统一转换为面向用户的通知，不会越过 API 边界继续抛出。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_educonnect_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum EduConnectError {
            $($variant(String),)*
        }

        impl EduConnectError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(EduConnectError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(EduConnectError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(EduConnectError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl EduConnectError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        EduConnectError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_educonnect_errors! {
    Config("E001", "Configuration Error"),
    DataSourceNotFound("E002", "Data Source Not Found"),
    NetworkUnreachable("E003", "Network Unreachable"),
    Timeout("E004", "Request Timeout"),
    ClientStatus("E005", "Backend Rejected Request"),
    ServerStatus("E006", "Backend Server Error"),
    NotFound("E007", "Resource Not Found"),
    Validation("E008", "Validation Error"),
    Serialization("E009", "Serialization Error"),
    UnknownResource("E010", "Unknown Resource"),
    FormNotFound("E011", "Form Not Found"),
    FormLimit("E012", "Form Limit Reached"),
    DateParse("E013", "Date Parse Error"),
}

impl EduConnectError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为后端传输层错误（网络、超时、HTTP 状态、解码）
    pub fn is_backend_failure(&self) -> bool {
        matches!(
            self,
            EduConnectError::NetworkUnreachable(_)
                | EduConnectError::Timeout(_)
                | EduConnectError::ClientStatus(_)
                | EduConnectError::ServerStatus(_)
                | EduConnectError::NotFound(_)
                | EduConnectError::Serialization(_)
        )
    }

    /// 面向管理员的排查提示
    pub fn help_hint(&self) -> Option<&'static str> {
        match self {
            EduConnectError::NetworkUnreachable(_) => Some(
                "Unable to reach the backend - check that the EduConnect API is running and the base URL is correct",
            ),
            EduConnectError::Timeout(_) => Some("The backend took too long to respond"),
            EduConnectError::ServerStatus(_) => Some("Backend server error - check the backend logs"),
            _ => None,
        }
    }
}

impl fmt::Display for EduConnectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EduConnectError {}

// 为常见的错误类型实现 From trait
impl From<reqwest::Error> for EduConnectError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            EduConnectError::Timeout(err.to_string())
        } else if err.is_decode() {
            EduConnectError::Serialization(err.to_string())
        } else if let Some(status) = err.status() {
            if status.is_server_error() {
                EduConnectError::ServerStatus(err.to_string())
            } else {
                EduConnectError::ClientStatus(err.to_string())
            }
        } else {
            // 连接失败、DNS 失败、请求构建失败都归为网络不可达
            EduConnectError::NetworkUnreachable(err.to_string())
        }
    }
}

impl From<serde_json::Error> for EduConnectError {
    fn from(err: serde_json::Error) -> Self {
        EduConnectError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for EduConnectError {
    fn from(err: chrono::ParseError) -> Self {
        EduConnectError::DateParse(err.to_string())
    }
}

impl From<config::ConfigError> for EduConnectError {
    fn from(err: config::ConfigError) -> Self {
        EduConnectError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EduConnectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(EduConnectError::config("test").code(), "E001");
        assert_eq!(EduConnectError::network_unreachable("test").code(), "E003");
        assert_eq!(EduConnectError::validation("test").code(), "E008");
        assert_eq!(EduConnectError::form_not_found("test").code(), "E011");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            EduConnectError::server_status("test").error_type(),
            "Backend Server Error"
        );
        assert_eq!(
            EduConnectError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = EduConnectError::validation("nom is required");
        assert_eq!(err.message(), "nom is required");
    }

    #[test]
    fn test_format_simple() {
        let err = EduConnectError::client_status("HTTP 400 Bad Request");
        let formatted = err.format_simple();
        assert!(formatted.contains("Backend Rejected Request"));
        assert!(formatted.contains("HTTP 400"));
    }

    #[test]
    fn test_backend_failure_classification() {
        assert!(EduConnectError::timeout("slow").is_backend_failure());
        assert!(EduConnectError::not_found("/notes/9").is_backend_failure());
        assert!(!EduConnectError::validation("missing").is_backend_failure());
        assert!(!EduConnectError::form_not_found("x").is_backend_failure());
    }

    #[test]
    fn test_help_hint() {
        assert!(
            EduConnectError::network_unreachable("refused")
                .help_hint()
                .is_some()
        );
        assert!(EduConnectError::validation("x").help_hint().is_none());
    }
}
