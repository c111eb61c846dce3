use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 家长与学生的关联
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/parent.ts")]
pub struct ParentEleve {
    pub id: Option<i64>,
    pub parent_id: Option<i64>,
    pub nom_parent: Option<String>,
    pub prenom_parent: Option<String>,
    pub eleve_id: Option<i64>,
    pub nom_eleve: Option<String>,
    pub prenom_eleve: Option<String>,
}
