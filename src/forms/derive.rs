//! 派生字段
//!
//! 输入字段每次修改后重新计算。只读目标字段与计算结果保持一致，
//! 无法计算时清空。

use super::coerce::Draft;
use super::schema::Derivation;
use crate::grading::{self, Computed, GradeBand, GradingSettings};
use crate::models::forms::responses::PreviewView;
use crate::models::paiements::responses::{PaymentState, format_amount, remainder};
use crate::utils::numeric::parse_numeric;

fn number(draft: &Draft, name: &str) -> Option<f64> {
    draft.get(name).and_then(|raw| parse_numeric(raw))
}

/// 计算派生值
pub fn compute(derivation: &Derivation, draft: &Draft, settings: &GradingSettings) -> Computed {
    match *derivation {
        Derivation::NoteAverage { points, max_points } => {
            grading::note_average(number(draft, points), number(draft, max_points), settings)
        }
        Derivation::PaymentRemainder { total, paid } => {
            remainder(number(draft, total), number(draft, paid))
        }
        Derivation::Weighted {
            average,
            coefficient,
            ..
        } => grading::detail_weighted(number(draft, average), number(draft, coefficient), settings),
    }
}

/// 更新写入草稿的派生字段，返回是否发生变化
pub fn apply(derivation: &Derivation, draft: &mut Draft, settings: &GradingSettings) -> bool {
    let Derivation::Weighted { target, .. } = *derivation else {
        return false;
    };
    let next = match compute(derivation, draft, settings) {
        Computed::Value(v) => format!("{v:.2}"),
        Computed::NotComputed => String::new(),
    };
    let previous = draft.insert(target.to_string(), next.clone());
    previous.as_deref() != Some(next.as_str())
}

/// 只显示不提交的预览
pub fn preview(
    derivation: &Derivation,
    draft: &Draft,
    settings: &GradingSettings,
) -> Option<PreviewView> {
    let value = compute(derivation, draft, settings);
    match *derivation {
        Derivation::NoteAverage { .. } => Some(PreviewView {
            label: "Moyenne calculée".to_string(),
            value,
            display: value
                .value()
                .map(|v| format!("{v:.2}/20"))
                .unwrap_or_else(|| "N/A".to_string()),
            color: GradeBand::of(value).map(|band| band.color().to_string()),
        }),
        Derivation::PaymentRemainder { total, paid } => {
            let state = PaymentState::of(number(draft, total), number(draft, paid));
            Some(PreviewView {
                label: "Montant restant".to_string(),
                value,
                display: format_amount(value.value()),
                color: Some(state.color().to_string()),
            })
        }
        Derivation::Weighted { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEIGHTED: Derivation = Derivation::Weighted {
        average: "moyenne",
        coefficient: "ponderation",
        target: "moyennePonderee",
    };

    fn draft(pairs: &[(&str, &str)]) -> Draft {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_weighted_written_to_target() {
        let mut d = draft(&[("moyenne", "15"), ("ponderation", "3")]);
        assert!(apply(&WEIGHTED, &mut d, &GradingSettings::default()));
        assert_eq!(d["moyennePonderee"], "0.45");
        // 再次计算结果不变
        assert!(!apply(&WEIGHTED, &mut d, &GradingSettings::default()));
    }

    #[test]
    fn test_weighted_cleared_when_not_computed() {
        let mut d = draft(&[
            ("moyenne", "15"),
            ("ponderation", "0"),
            ("moyennePonderee", "0.45"),
        ]);
        apply(&WEIGHTED, &mut d, &GradingSettings::default());
        assert_eq!(d["moyennePonderee"], "");
    }

    #[test]
    fn test_weighted_uses_configured_divisor() {
        let settings = GradingSettings {
            weighted_divisor: 20.0,
            average_scale: 20.0,
        };
        let mut d = draft(&[("moyenne", "16"), ("ponderation", "2")]);
        apply(&WEIGHTED, &mut d, &settings);
        assert_eq!(d["moyennePonderee"], "1.60");
    }

    #[test]
    fn test_note_preview() {
        let derivation = Derivation::NoteAverage {
            points: "pointObtenu",
            max_points: "ponderation",
        };
        let d = draft(&[("pointObtenu", "14"), ("ponderation", "20")]);
        let view = preview(&derivation, &d, &GradingSettings::default()).unwrap();
        assert_eq!(view.value, Computed::Value(14.0));
        assert_eq!(view.display, "14.00/20");
        assert_eq!(view.color.as_deref(), Some("primary"));

        let d = draft(&[("pointObtenu", "14")]);
        let view = preview(&derivation, &d, &GradingSettings::default()).unwrap();
        assert_eq!(view.display, "N/A");
        assert_eq!(view.color, None);
    }

    #[test]
    fn test_payment_preview() {
        let derivation = Derivation::PaymentRemainder {
            total: "montantTotal",
            paid: "montantPaye",
        };
        let d = draft(&[("montantTotal", "500"), ("montantPaye", "200")]);
        let view = preview(&derivation, &d, &GradingSettings::default()).unwrap();
        assert_eq!(view.value, Computed::Value(300.0));
        assert_eq!(view.display, "300,00 €");
        assert_eq!(view.color.as_deref(), Some("warning"));
    }

    #[test]
    fn test_weighted_has_no_preview() {
        let d = draft(&[("moyenne", "15"), ("ponderation", "3")]);
        assert!(preview(&WEIGHTED, &d, &GradingSettings::default()).is_none());
        assert_eq!(
            compute(&WEIGHTED, &d, &GradingSettings::default()),
            Computed::Value(0.45)
        );
    }
}
