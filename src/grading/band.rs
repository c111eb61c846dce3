use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Computed;

/// 成绩等级（按 20 分制划分）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub enum GradeBand {
    Failing,   // < 10
    Passing,   // >= 10
    Good,      // >= 12
    Excellent, // >= 16
}

impl GradeBand {
    pub const EXCELLENT_FROM: f64 = 16.0;
    pub const GOOD_FROM: f64 = 12.0;
    pub const PASSING_FROM: f64 = 10.0;

    pub fn classify(value: f64) -> Self {
        if value >= Self::EXCELLENT_FROM {
            GradeBand::Excellent
        } else if value >= Self::GOOD_FROM {
            GradeBand::Good
        } else if value >= Self::PASSING_FROM {
            GradeBand::Passing
        } else {
            GradeBand::Failing
        }
    }

    pub fn of(computed: Computed) -> Option<Self> {
        computed.value().map(Self::classify)
    }

    /// 界面标签颜色
    pub fn color(self) -> &'static str {
        match self {
            GradeBand::Excellent => "success",
            GradeBand::Good => "primary",
            GradeBand::Passing => "warning",
            GradeBand::Failing => "error",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GradeBand::Excellent => "Excellent",
            GradeBand::Good => "Bien",
            GradeBand::Passing => "Passable",
            GradeBand::Failing => "Insuffisant",
        }
    }
}

/// 课程系数等级（成绩单明细中系数的显示颜色）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub enum CoefficientBand {
    Low,
    Medium,
    High,
    Major,
}

impl CoefficientBand {
    /// 系数缺失或为零时不分级
    pub fn classify(coefficient: Option<f64>) -> Option<Self> {
        let coefficient = coefficient.filter(|c| c.is_finite() && *c != 0.0)?;
        Some(if coefficient >= 4.0 {
            CoefficientBand::Major
        } else if coefficient >= 3.0 {
            CoefficientBand::High
        } else if coefficient >= 2.0 {
            CoefficientBand::Medium
        } else {
            CoefficientBand::Low
        })
    }

    pub fn color(self) -> &'static str {
        match self {
            CoefficientBand::Major => "error",
            CoefficientBand::High => "warning",
            CoefficientBand::Medium => "primary",
            CoefficientBand::Low => "success",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(GradeBand::classify(16.0), GradeBand::Excellent);
        assert_eq!(GradeBand::classify(15.99), GradeBand::Good);
        assert_eq!(GradeBand::classify(12.0), GradeBand::Good);
        assert_eq!(GradeBand::classify(11.99), GradeBand::Passing);
        assert_eq!(GradeBand::classify(10.0), GradeBand::Passing);
        assert_eq!(GradeBand::classify(9.99), GradeBand::Failing);
        assert_eq!(GradeBand::classify(0.0), GradeBand::Failing);
    }

    #[test]
    fn test_band_is_monotonic() {
        let mut previous = GradeBand::classify(-1.0);
        let mut value = -1.0;
        while value <= 21.0 {
            let band = GradeBand::classify(value);
            assert!(band >= previous, "band decreased at {value}");
            previous = band;
            value += 0.05;
        }
    }

    #[test]
    fn test_band_ignores_input_scale() {
        // 1.6 来自 16 × 2 / 20，仍按 20 分制判定为不及格
        assert_eq!(GradeBand::of(Computed::Value(1.6)), Some(GradeBand::Failing));
        assert_eq!(GradeBand::of(Computed::NotComputed), None);
    }

    #[test]
    fn test_colors() {
        assert_eq!(GradeBand::Excellent.color(), "success");
        assert_eq!(GradeBand::Failing.color(), "error");
    }

    #[test]
    fn test_coefficient_band() {
        assert_eq!(CoefficientBand::classify(Some(4.0)), Some(CoefficientBand::Major));
        assert_eq!(CoefficientBand::classify(Some(3.5)), Some(CoefficientBand::High));
        assert_eq!(CoefficientBand::classify(Some(2.0)), Some(CoefficientBand::Medium));
        assert_eq!(CoefficientBand::classify(Some(1.0)), Some(CoefficientBand::Low));
        assert_eq!(CoefficientBand::classify(Some(0.0)), None);
        assert_eq!(CoefficientBand::classify(None), None);
    }
}
