use serde::Serialize;
use ts_rs::TS;
use uuid::Uuid;

use crate::grading::Computed;
use crate::models::{ResourceKind, SelectOption};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/forms.ts")]
pub enum FormMode {
    Create,
    Edit,
}

// 单个字段的视图
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/forms.ts")]
pub struct FieldView {
    pub name: String,
    pub label: String,
    pub kind: String,
    pub required: bool,
    pub read_only: bool,
    pub value: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helper: Option<String>,
}

// 仅显示、不提交的计算结果
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/forms.ts")]
pub struct PreviewView {
    pub label: String,
    pub value: Computed,
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

// 表单视图
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/forms.ts")]
pub struct FormView {
    pub form_id: Uuid,
    pub resource: ResourceKind,
    pub mode: FormMode,
    pub entity_id: Option<i64>,
    pub title: String,
    pub fields: Vec<FieldView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<PreviewView>,
    // 非阻塞提示（格式可疑、下拉选项加载失败等）
    pub warnings: Vec<String>,
}
