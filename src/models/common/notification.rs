use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 通知级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// 界面通知（snackbar / 横幅）
///
/// `auto_hide_ms` 为空表示常驻，直到用户关闭。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub auto_hide_ms: Option<u64>,
}

impl Notification {
    /// snackbar 默认自动隐藏时间
    pub const DEFAULT_AUTO_HIDE_MS: u64 = 6000;

    fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            auto_hide_ms: Some(Self::DEFAULT_AUTO_HIDE_MS),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    pub fn auto_hide(mut self, ms: u64) -> Self {
        self.auto_hide_ms = Some(ms);
        self
    }

    pub fn persistent(mut self) -> Self {
        self.auto_hide_ms = None;
        self
    }
}
