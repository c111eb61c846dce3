use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 班级
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct Classe {
    pub id: Option<i64>,
    pub nom_classe: Option<String>,
    // 学年，例如 2024-2025
    pub annee_scolaire: Option<String>,
    pub enseignant_id: Option<i64>,
    pub nom_enseignant: Option<String>,
    // 由后端统计
    pub nombre_eleves: Option<i64>,
}
