use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 成绩
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/note.ts")]
pub struct Note {
    pub id: Option<i64>,
    pub eleve_id: Option<i64>,
    pub nom_eleve: Option<String>,
    pub prenom_eleve: Option<String>,
    pub cours_id: Option<i64>,
    pub nom_cours: Option<String>,
    pub periode: Option<String>,
    // 得分
    pub point_obtenu: Option<f64>,
    // 满分（界面上称为 ponderation）
    pub ponderation: Option<f64>,
    pub date_saisie: Option<chrono::NaiveDateTime>,
}
