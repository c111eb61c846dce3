use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/eleve.ts")]
pub struct Eleve {
    pub id: Option<i64>,
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub date_naissance: Option<chrono::NaiveDate>,
    pub lieu_naissance: Option<String>,
    // 学籍号
    pub numero_permanent: Option<String>,
    // 缴费状态：DEROGATION / NON_EN_ORDRE / EN_ORDRE
    pub statut_paiement: Option<String>,
    pub classe_id: Option<i64>,
    pub nom_classe: Option<String>,
}
