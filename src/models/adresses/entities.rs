use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生住址
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/adresse.ts")]
pub struct AdresseEleve {
    pub id: Option<i64>,
    pub ville: Option<String>,
    pub commune_territoire: Option<String>,
    pub ecole: Option<String>,
    pub code: Option<String>,
    pub eleve_id: Option<i64>,
    pub nom_eleve: Option<String>,
    pub prenom_eleve: Option<String>,
}
