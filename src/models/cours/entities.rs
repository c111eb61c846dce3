use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/cours.ts")]
pub struct Cours {
    pub id: Option<i64>,
    pub nom: Option<String>,
    // 课程系数
    pub ponderation: Option<f64>,
    pub classe_id: Option<i64>,
    pub nom_classe: Option<String>,
    pub enseignant_id: Option<i64>,
    pub nom_enseignant: Option<String>,
}
