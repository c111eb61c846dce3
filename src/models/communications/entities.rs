use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 通讯消息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/communication.ts")]
pub struct Communication {
    pub id: Option<i64>,
    pub expediteur_id: Option<i64>,
    pub nom_expediteur: Option<String>,
    pub destinataire_id: Option<i64>,
    pub nom_destinataire: Option<String>,
    pub sujet: Option<String>,
    pub contenu: Option<String>,
    // INFORMATION / ALERTE / RAPPEL / CONVOCATION
    #[serde(rename = "type")]
    #[ts(rename = "type")]
    pub type_communication: Option<String>,
    pub date_envoi: Option<chrono::NaiveDateTime>,
}
