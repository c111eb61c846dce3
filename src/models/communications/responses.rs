use serde::Serialize;
use ts_rs::TS;

use super::entities::Communication;
use crate::models::common::choices::{COMMUNICATION_TYPES, label_for};

// 列表中内容摘要的最大长度
const PREVIEW_LENGTH: usize = 50;

// 通讯列表行的显示信息
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/communication.ts")]
pub struct CommunicationDisplay {
    pub type_label: String,
    pub type_color: String,
    pub apercu: String,
}

impl CommunicationDisplay {
    pub fn of(communication: &Communication) -> Self {
        let kind = communication.type_communication.as_deref().unwrap_or_default();
        let color = match kind {
            "INFORMATION" => "info",
            "ALERTE" => "error",
            "RAPPEL" => "warning",
            "CONVOCATION" => "success",
            _ => "default",
        };
        Self {
            type_label: label_for(COMMUNICATION_TYPES, kind),
            type_color: color.to_string(),
            apercu: truncate(communication.contenu.as_deref(), PREVIEW_LENGTH),
        }
    }
}

/// 截断文本并追加省略号，空文本显示为 `-`
pub fn truncate(text: Option<&str>, max_chars: usize) -> String {
    match text {
        None | Some("") => "-".to_string(),
        Some(text) if text.chars().count() <= max_chars => text.to_string(),
        Some(text) => format!("{}...", text.chars().take(max_chars).collect::<String>()),
    }
}
