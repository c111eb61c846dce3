//! 列表行的显示信息与统计横幅

use serde_json::Value;

use crate::datasource::gateway::decode;
use crate::grading::GradingSettings;
use crate::models::ResourceKind;
use crate::models::bulletins::entities::{Bulletin, DetailBulletin};
use crate::models::bulletins::responses::{BulletinDisplay, DetailBulletinDisplay};
use crate::models::communications::entities::Communication;
use crate::models::communications::responses::CommunicationDisplay;
use crate::models::eleves::entities::Eleve;
use crate::models::eleves::responses::EleveDisplay;
use crate::models::notes::entities::Note;
use crate::models::notes::responses::NoteDisplay;
use crate::models::paiements::entities::Paiement;
use crate::models::paiements::responses::PaiementDisplay;
use crate::models::resources::responses::{ResourceListResponse, ResourceRow, RowDisplay};

/// 计算单行的显示信息
///
/// 记录无法按实体解析时不附加显示信息，原始记录照常返回。
pub fn decorate(resource: ResourceKind, record: &Value, settings: &GradingSettings) -> Option<RowDisplay> {
    let record = record.clone();
    match resource {
        ResourceKind::Notes => decode::<Note>(record)
            .ok()
            .map(|note| RowDisplay::Note(NoteDisplay::of(&note, settings))),
        ResourceKind::Paiements => decode::<Paiement>(record)
            .ok()
            .map(|p| RowDisplay::Paiement(PaiementDisplay::of(&p))),
        ResourceKind::Bulletins => decode::<Bulletin>(record)
            .ok()
            .map(|b| RowDisplay::Bulletin(BulletinDisplay::of(&b))),
        ResourceKind::DetailBulletins => decode::<DetailBulletin>(record)
            .ok()
            .map(|d| RowDisplay::DetailBulletin(DetailBulletinDisplay::of(&d))),
        ResourceKind::Eleves => decode::<Eleve>(record)
            .ok()
            .map(|e| RowDisplay::Eleve(EleveDisplay::of(&e))),
        ResourceKind::Communications => decode::<Communication>(record)
            .ok()
            .map(|c| RowDisplay::Communication(CommunicationDisplay::of(&c))),
        _ => None,
    }
}

/// 列表上方的统计横幅
pub fn summary(resource: ResourceKind, total: usize) -> Option<String> {
    if total == 0 {
        return None;
    }
    match resource {
        ResourceKind::Bulletins => Some(format!("📊 {total} bulletin(s) généré(s)")),
        ResourceKind::AdresseEleves => {
            Some(format!("📍 {total} adresse(s) d'élève(s) enregistrée(s)"))
        }
        ResourceKind::ParentEleves => Some(format!(
            "📊 {total} relation(s) Parent-Élève enregistrée(s)"
        )),
        _ => None,
    }
}

/// 组装列表页
pub fn list_response(
    resource: ResourceKind,
    records: Vec<Value>,
    settings: &GradingSettings,
) -> ResourceListResponse {
    let items: Vec<ResourceRow> = records
        .into_iter()
        .map(|record| ResourceRow {
            display: decorate(resource, &record, settings),
            record,
        })
        .collect();
    let total = items.len();
    ResourceListResponse {
        resource,
        title: resource.title().to_string(),
        total,
        items,
        summary: summary(resource, total),
    }
}
