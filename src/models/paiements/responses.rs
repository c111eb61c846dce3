use serde::Serialize;
use ts_rs::TS;

use super::entities::Paiement;
use crate::grading::{Computed, round2};
use crate::models::common::choices::{TERMS, label_for};

// 缴费状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/paiement.ts")]
pub enum PaymentState {
    Paid,
    Partial,
    Unpaid,
}

impl PaymentState {
    /// 总额或已付缺失（或为零）时视为未付
    pub fn of(total: Option<f64>, paid: Option<f64>) -> Self {
        let total = total.filter(|v| *v != 0.0);
        let paid = paid.filter(|v| *v != 0.0);
        match (total, paid) {
            (Some(total), Some(paid)) if paid >= total => PaymentState::Paid,
            (Some(_), Some(paid)) if paid > 0.0 => PaymentState::Partial,
            _ => PaymentState::Unpaid,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentState::Paid => "Payé",
            PaymentState::Partial => "Partiellement payé",
            PaymentState::Unpaid => "Non payé",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            PaymentState::Paid => "success",
            PaymentState::Partial => "warning",
            PaymentState::Unpaid => "error",
        }
    }
}

/// 剩余金额：总额 − 已付，任一缺失时不计算
pub fn remainder(total: Option<f64>, paid: Option<f64>) -> Computed {
    match (total, paid) {
        (Some(total), Some(paid)) if total.is_finite() && paid.is_finite() => {
            Computed::Value(round2(total - paid))
        }
        _ => Computed::NotComputed,
    }
}

/// 金额格式：`1 234,50 €`
pub fn format_amount(amount: Option<f64>) -> String {
    let amount = amount.filter(|v| v.is_finite()).unwrap_or(0.0);
    let fixed = format!("{:.2}", amount.abs());
    let (integer, decimals) = fixed.split_once('.').unwrap_or((&fixed, "00"));
    let mut grouped = String::new();
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('\u{202f}');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{grouped},{decimals} €")
}

// 缴费列表行的显示信息
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/paiement.ts")]
pub struct PaiementDisplay {
    pub montant_restant: Computed,
    pub montant_restant_label: String,
    pub state: PaymentState,
    pub state_label: String,
    pub color: String,
    pub trimestre_label: String,
}

impl PaiementDisplay {
    pub fn of(paiement: &Paiement) -> Self {
        let state = PaymentState::of(paiement.montant_total, paiement.montant_paye);
        // 优先使用后端给出的剩余金额
        let montant_restant = match paiement.montant_restant {
            Some(v) => Computed::Value(v),
            None => remainder(paiement.montant_total, paiement.montant_paye),
        };
        Self {
            montant_restant,
            montant_restant_label: format_amount(montant_restant.value()),
            state,
            state_label: state.label().to_string(),
            color: state.color().to_string(),
            trimestre_label: label_for(TERMS, paiement.trimestre.as_deref().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_state() {
        assert_eq!(PaymentState::of(Some(500.0), Some(500.0)), PaymentState::Paid);
        assert_eq!(PaymentState::of(Some(500.0), Some(600.0)), PaymentState::Paid);
        assert_eq!(PaymentState::of(Some(500.0), Some(200.0)), PaymentState::Partial);
        assert_eq!(PaymentState::of(Some(500.0), Some(0.0)), PaymentState::Unpaid);
        assert_eq!(PaymentState::of(None, Some(200.0)), PaymentState::Unpaid);
    }

    #[test]
    fn test_remainder() {
        assert_eq!(remainder(Some(500.0), Some(200.0)), Computed::Value(300.0));
        assert_eq!(remainder(Some(500.0), None), Computed::NotComputed);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Some(300.0)), "300,00 €");
        assert_eq!(format_amount(Some(1234.5)), "1\u{202f}234,50 €");
        assert_eq!(format_amount(None), "0,00 €");
    }

    #[test]
    fn test_display_prefers_backend_remainder() {
        let paiement = Paiement {
            montant_total: Some(500.0),
            montant_paye: Some(200.0),
            montant_restant: Some(250.0),
            trimestre: Some("TRIMESTRE_2".into()),
            ..Default::default()
        };
        let display = PaiementDisplay::of(&paiement);
        assert_eq!(display.montant_restant, Computed::Value(250.0));
        assert_eq!(display.state, PaymentState::Partial);
        assert_eq!(display.trimestre_label, "Deuxième trimestre");
    }
}
