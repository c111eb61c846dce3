use serde::Serialize;
use ts_rs::TS;

use super::entities::Eleve;
use crate::models::common::choices::{PAYMENT_STATUSES, label_for};

// 学生列表行的显示信息
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/eleve.ts")]
pub struct EleveDisplay {
    pub statut_label: String,
    pub statut_color: String,
}

impl EleveDisplay {
    pub fn of(eleve: &Eleve) -> Self {
        let statut = eleve.statut_paiement.as_deref().unwrap_or_default();
        let color = match statut {
            "EN_ORDRE" => "success",
            "NON_EN_ORDRE" => "error",
            "DEROGATION" => "warning",
            _ => "default",
        };
        Self {
            statut_label: label_for(PAYMENT_STATUSES, statut),
            statut_color: color.to_string(),
        }
    }
}
