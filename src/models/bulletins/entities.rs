use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 成绩单
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/bulletin.ts")]
pub struct Bulletin {
    pub id: Option<i64>,
    pub eleve_id: Option<i64>,
    pub eleve_nom: Option<String>,
    pub eleve_prenom: Option<String>,
    pub classe_id: Option<i64>,
    pub nom_classe: Option<String>,
    // 周期字面量为 "Trimestre 1" 等
    pub periode: Option<String>,
    pub moyenne_generale: Option<f64>,
    pub pourcentage_obtenu: Option<f64>,
    pub rang_classe: Option<i64>,
    pub nombre_eleves_classe: Option<i64>,
    pub appreciation_generale: Option<String>,
    pub bulletin_pdf_path: Option<String>,
    pub date_generation: Option<chrono::NaiveDateTime>,
}

impl Bulletin {
    /// 下拉及分组标题：`Nom Prénom - Période`
    pub fn title(&self) -> String {
        format!(
            "{} {} - {}",
            self.eleve_nom.as_deref().unwrap_or_default(),
            self.eleve_prenom.as_deref().unwrap_or_default(),
            self.periode.as_deref().unwrap_or_default()
        )
    }
}

// 成绩单明细（每门课程一行）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/bulletin.ts")]
pub struct DetailBulletin {
    pub id: Option<i64>,
    pub bulletin_id: Option<i64>,
    pub cours_id: Option<i64>,
    pub nom_cours: Option<String>,
    pub note_id: Option<i64>,
    pub valeur_note: Option<f64>,
    pub moyenne: Option<f64>,
    // 课程系数
    pub ponderation: Option<f64>,
    pub moyenne_ponderee: Option<f64>,
    pub appreciation_matiere: Option<String>,
}
