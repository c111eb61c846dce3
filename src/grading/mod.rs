//! 成绩计算
//!
//! 所有界面共用的加权成绩计算，刻度（除数）由调用方显式传入。
//! 历史上成绩单明细使用 100、成绩列表使用 20，两者并未统一，
//! 分别通过 `GradingSettings` 的两个字段配置。

pub mod band;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::GradingConfig;

pub use band::{CoefficientBand, GradeBand};

/// 等级划分所依据的满分（无论输入刻度如何）
pub const BAND_SCALE: f64 = 20.0;

/// 计算结果
///
/// 序列化为数字或 `null`（未计算）。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub enum Computed {
    Value(f64),
    NotComputed,
}

impl Computed {
    pub fn value(self) -> Option<f64> {
        match self {
            Computed::Value(v) => Some(v),
            Computed::NotComputed => None,
        }
    }

    pub fn is_computed(self) -> bool {
        matches!(self, Computed::Value(_))
    }

    /// 按 `toFixed(2)` 的习惯格式化，未计算时返回 `N/A`
    pub fn display(self) -> String {
        match self {
            Computed::Value(v) => format!("{v:.2}"),
            Computed::NotComputed => "N/A".to_string(),
        }
    }
}

/// 计算参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradingSettings {
    pub weighted_divisor: f64,
    pub average_scale: f64,
}

impl Default for GradingSettings {
    fn default() -> Self {
        Self {
            weighted_divisor: 100.0,
            average_scale: BAND_SCALE,
        }
    }
}

impl From<&GradingConfig> for GradingSettings {
    fn from(config: &GradingConfig) -> Self {
        Self {
            weighted_divisor: config.weighted_divisor,
            average_scale: config.average_scale,
        }
    }
}

/// 保留两位小数（远离零方向舍入）
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// 加权成绩：`raw × coefficient / divisor`，保留两位小数
///
/// 系数缺失、非数字、为零或为负时返回 `NotComputed`。
pub fn weighted_score(raw: Option<f64>, coefficient: Option<f64>, divisor: f64) -> Computed {
    let Some(raw) = raw.filter(|v| v.is_finite()) else {
        return Computed::NotComputed;
    };
    let Some(coefficient) = positive(coefficient) else {
        return Computed::NotComputed;
    };
    let Some(divisor) = positive(Some(divisor)) else {
        return Computed::NotComputed;
    };
    Computed::Value(round2(raw * coefficient / divisor))
}

/// 商形式平均分：`points / max_points × out_of`，保留两位小数
///
/// 满分缺失或为零时返回 `NotComputed`。
pub fn normalized_average(points: Option<f64>, max_points: Option<f64>, out_of: f64) -> Computed {
    let Some(points) = points.filter(|v| v.is_finite()) else {
        return Computed::NotComputed;
    };
    let Some(max_points) = positive(max_points) else {
        return Computed::NotComputed;
    };
    Computed::Value(round2(points / max_points * out_of))
}

/// 计算成绩单明细的加权平均
pub fn detail_weighted(
    average: Option<f64>,
    coefficient: Option<f64>,
    settings: &GradingSettings,
) -> Computed {
    weighted_score(average, coefficient, settings.weighted_divisor)
}

/// 计算成绩列表的 /20 平均分
pub fn note_average(
    points: Option<f64>,
    max_points: Option<f64>,
    settings: &GradingSettings,
) -> Computed {
    normalized_average(points, max_points, settings.average_scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_score_scale_twenty() {
        assert_eq!(weighted_score(Some(16.0), Some(2.0), 20.0), Computed::Value(1.6));
    }

    #[test]
    fn test_weighted_score_scale_hundred() {
        assert_eq!(
            weighted_score(Some(15.0), Some(3.0), 100.0),
            Computed::Value(0.45)
        );
    }

    #[test]
    fn test_normalized_average() {
        assert_eq!(
            normalized_average(Some(14.0), Some(20.0), 20.0),
            Computed::Value(14.0)
        );
        assert_eq!(
            normalized_average(Some(16.5), Some(20.0), 20.0),
            Computed::Value(16.5)
        );
        assert_eq!(
            normalized_average(Some(7.0), Some(10.0), 20.0),
            Computed::Value(14.0)
        );
    }

    #[test]
    fn test_zero_or_missing_coefficient_is_not_computed() {
        assert_eq!(weighted_score(Some(12.0), Some(0.0), 20.0), Computed::NotComputed);
        assert_eq!(weighted_score(Some(12.0), None, 20.0), Computed::NotComputed);
        assert_eq!(weighted_score(Some(12.0), Some(f64::NAN), 20.0), Computed::NotComputed);
        assert_eq!(weighted_score(Some(12.0), Some(-1.0), 20.0), Computed::NotComputed);
        assert_eq!(normalized_average(Some(12.0), Some(0.0), 20.0), Computed::NotComputed);
        assert_eq!(normalized_average(None, Some(20.0), 20.0), Computed::NotComputed);
    }

    #[test]
    fn test_zero_divisor_is_not_computed() {
        assert_eq!(weighted_score(Some(12.0), Some(2.0), 0.0), Computed::NotComputed);
    }

    #[test]
    fn test_rounding_matches_two_decimals() {
        for (raw, coefficient) in [(13.37, 1.5), (9.99, 3.0), (18.0, 0.7), (0.0, 4.0)] {
            let expected = round2(raw * coefficient / 20.0);
            assert_eq!(
                weighted_score(Some(raw), Some(coefficient), 20.0),
                Computed::Value(expected)
            );
        }
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
    }

    #[test]
    fn test_display() {
        assert_eq!(Computed::Value(14.0).display(), "14.00");
        assert_eq!(Computed::NotComputed.display(), "N/A");
    }

    #[test]
    fn test_serialize_as_number_or_null() {
        assert_eq!(serde_json::to_string(&Computed::Value(1.6)).unwrap(), "1.6");
        assert_eq!(serde_json::to_string(&Computed::NotComputed).unwrap(), "null");
    }

    #[test]
    fn test_settings_from_config() {
        let config = GradingConfig {
            weighted_divisor: 20.0,
            average_scale: 20.0,
        };
        let settings = GradingSettings::from(&config);
        assert_eq!(
            detail_weighted(Some(16.0), Some(2.0), &settings),
            Computed::Value(1.6)
        );
        assert_eq!(
            detail_weighted(Some(16.0), Some(2.0), &GradingSettings::default()),
            Computed::Value(0.32)
        );
    }
}
