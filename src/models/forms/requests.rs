use serde::Deserialize;
use std::collections::BTreeMap;
use ts_rs::TS;

use crate::models::ResourceKind;

// 打开表单：无 id 为新建，有 id 为编辑
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/forms.ts")]
pub struct OpenFormRequest {
    pub resource: ResourceKind,
    pub id: Option<i64>,
    // 新建时预填的字段（如从学生详情页新建成绩）
    #[serde(default)]
    pub preset: BTreeMap<String, String>,
}

// 修改字段
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/forms.ts")]
pub struct UpdateFieldsRequest {
    pub fields: BTreeMap<String, String>,
}
