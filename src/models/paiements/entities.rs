use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 缴费记录
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/paiement.ts")]
pub struct Paiement {
    pub id: Option<i64>,
    pub eleve_id: Option<i64>,
    pub nom_eleve: Option<String>,
    pub prenom_eleve: Option<String>,
    pub montant_total: Option<f64>,
    pub montant_paye: Option<f64>,
    // 由后端计算
    pub montant_restant: Option<f64>,
    pub trimestre: Option<String>,
    pub date_maj: Option<chrono::NaiveDateTime>,
}
