use serde::Serialize;
use ts_rs::TS;

use crate::models::ResourceKind;
use crate::models::bulletins::responses::{BulletinDisplay, DetailBulletinDisplay};
use crate::models::communications::responses::CommunicationDisplay;
use crate::models::eleves::responses::EleveDisplay;
use crate::models::notes::responses::NoteDisplay;
use crate::models::paiements::responses::PaiementDisplay;

// 列表行的附加显示信息，按资源区分
#[derive(Debug, Serialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/resource.ts")]
pub enum RowDisplay {
    Note(NoteDisplay),
    Paiement(PaiementDisplay),
    Bulletin(BulletinDisplay),
    DetailBulletin(DetailBulletinDisplay),
    Eleve(EleveDisplay),
    Communication(CommunicationDisplay),
}

// 列表行：后端原始记录加显示信息
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/resource.ts")]
pub struct ResourceRow {
    pub record: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<RowDisplay>,
}

// 资源列表页
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/resource.ts")]
pub struct ResourceListResponse {
    pub resource: ResourceKind,
    pub title: String,
    pub total: usize,
    pub items: Vec<ResourceRow>,
    // 列表上方的统计横幅
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}
