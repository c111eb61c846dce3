use serde::Serialize;
use ts_rs::TS;

use super::entities::{Bulletin, DetailBulletin};
use crate::grading::{CoefficientBand, Computed, GradeBand};

const NOT_COMPUTED_M: &str = "Non calculé";
const NOT_COMPUTED_F: &str = "Non calculée";

/// 成绩单的平均分为 0 或缺失时视为尚未评定
fn graded(value: Option<f64>) -> Computed {
    match value {
        Some(v) if v.is_finite() && v != 0.0 => Computed::Value(v),
        _ => Computed::NotComputed,
    }
}

fn periode_color(periode: Option<&str>) -> &'static str {
    match periode {
        Some("Trimestre 1") => "primary",
        Some("Trimestre 2") => "secondary",
        Some("Trimestre 3") => "success",
        _ => "default",
    }
}

// 成绩单列表行的显示信息
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/bulletin.ts")]
pub struct BulletinDisplay {
    pub eleve: String,
    pub moyenne_label: Option<String>,
    pub band: Option<GradeBand>,
    pub color: String,
    // `rang/effectif`
    pub rang: String,
    pub periode_color: String,
    pub date_generation: String,
    pub pdf_disponible: bool,
}

impl BulletinDisplay {
    pub fn of(bulletin: &Bulletin) -> Self {
        let moyenne = graded(bulletin.moyenne_generale);
        let band = GradeBand::of(moyenne);
        let rang = match (bulletin.rang_classe, bulletin.nombre_eleves_classe) {
            (Some(rang), Some(total)) if rang != 0 && total != 0 => format!("{rang}/{total}"),
            _ => NOT_COMPUTED_M.to_string(),
        };
        Self {
            eleve: format!(
                "{} {}",
                bulletin.eleve_nom.as_deref().unwrap_or_default(),
                bulletin.eleve_prenom.as_deref().unwrap_or_default()
            )
            .trim()
            .to_string(),
            moyenne_label: moyenne.value().map(|v| format!("{v:.2}/20")),
            band,
            color: band.map(GradeBand::color).unwrap_or("default").to_string(),
            rang,
            periode_color: periode_color(bulletin.periode.as_deref()).to_string(),
            date_generation: bulletin
                .date_generation
                .map(|d| d.format("%d/%m/%Y").to_string())
                .unwrap_or_else(|| "Non généré".to_string()),
            pdf_disponible: bulletin
                .bulletin_pdf_path
                .as_deref()
                .is_some_and(|p| !p.is_empty()),
        }
    }
}

// 成绩单明细行的显示信息
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/bulletin.ts")]
pub struct DetailBulletinDisplay {
    pub moyenne_label: String,
    pub moyenne_color: String,
    pub ponderation_color: String,
    pub moyenne_ponderee_label: String,
}

impl DetailBulletinDisplay {
    pub fn of(detail: &DetailBulletin) -> Self {
        let moyenne = graded(detail.moyenne);
        let ponderee = graded(detail.moyenne_ponderee);
        Self {
            moyenne_label: moyenne
                .value()
                .map(|v| format!("{v:.2}/20"))
                .unwrap_or_else(|| NOT_COMPUTED_F.to_string()),
            moyenne_color: GradeBand::of(moyenne)
                .map(GradeBand::color)
                .unwrap_or("default")
                .to_string(),
            ponderation_color: CoefficientBand::classify(detail.ponderation)
                .map(CoefficientBand::color)
                .unwrap_or("default")
                .to_string(),
            moyenne_ponderee_label: ponderee
                .value()
                .map(|v| format!("{v:.2}"))
                .unwrap_or_else(|| NOT_COMPUTED_F.to_string()),
        }
    }
}

// 明细行
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/bulletin.ts")]
pub struct DetailRow {
    pub detail: DetailBulletin,
    pub display: DetailBulletinDisplay,
}

// 按成绩单分组的明细
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/bulletin.ts")]
pub struct DetailGroup {
    pub bulletin_id: i64,
    pub title: String,
    pub moyenne_label: Option<String>,
    pub color: String,
    pub details: Vec<DetailRow>,
}

// 成绩单明细看板
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/bulletin.ts")]
pub struct DetailBulletinBoard {
    // 全部明细数量（不受筛选影响）
    pub total_details: usize,
    // 含有明细的成绩单数量
    pub total_bulletins: usize,
    pub filter: Option<i64>,
    pub groups: Vec<DetailGroup>,
    // 筛选下拉：所有成绩单
    pub bulletin_options: Vec<crate::models::SelectOption>,
    pub summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_average_is_ungraded() {
        let bulletin = Bulletin {
            moyenne_generale: Some(0.0),
            ..Default::default()
        };
        let display = BulletinDisplay::of(&bulletin);
        assert_eq!(display.band, None);
        assert_eq!(display.moyenne_label, None);
        assert_eq!(display.color, "default");
    }

    #[test]
    fn test_bulletin_rank_and_band() {
        let bulletin = Bulletin {
            eleve_nom: Some("Durant".into()),
            eleve_prenom: Some("Pierre".into()),
            periode: Some("Trimestre 2".into()),
            moyenne_generale: Some(16.25),
            rang_classe: Some(3),
            nombre_eleves_classe: Some(25),
            ..Default::default()
        };
        let display = BulletinDisplay::of(&bulletin);
        assert_eq!(display.eleve, "Durant Pierre");
        assert_eq!(display.moyenne_label.as_deref(), Some("16.25/20"));
        assert_eq!(display.band, Some(GradeBand::Excellent));
        assert_eq!(display.rang, "3/25");
        assert_eq!(display.periode_color, "secondary");
        assert_eq!(display.date_generation, "Non généré");
        assert!(!display.pdf_disponible);
    }

    #[test]
    fn test_missing_rank() {
        let bulletin = Bulletin {
            rang_classe: Some(2),
            ..Default::default()
        };
        assert_eq!(BulletinDisplay::of(&bulletin).rang, "Non calculé");
    }

    #[test]
    fn test_detail_display() {
        let detail = DetailBulletin {
            moyenne: Some(15.0),
            ponderation: Some(3.0),
            moyenne_ponderee: Some(0.45),
            ..Default::default()
        };
        let display = DetailBulletinDisplay::of(&detail);
        assert_eq!(display.moyenne_label, "15.00/20");
        assert_eq!(display.moyenne_color, "primary");
        assert_eq!(display.ponderation_color, "warning");
        assert_eq!(display.moyenne_ponderee_label, "0.45");

        let empty = DetailBulletinDisplay::of(&DetailBulletin::default());
        assert_eq!(empty.moyenne_label, "Non calculée");
        assert_eq!(empty.ponderation_color, "default");
    }
}
