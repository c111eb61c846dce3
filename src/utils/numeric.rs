//! 表单输入的数值解析
//!
//! 表单值均为字符串，解析失败时返回 `None`，由调用方决定回退策略。

/// 解析小数，允许逗号作为小数点
pub fn parse_numeric(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.replace(',', ".");
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// 解析整数，小数部分截断
pub fn parse_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    parse_numeric(trimmed)
        .map(f64::trunc)
        .filter(|value| *value >= i64::MIN as f64 && *value <= i64::MAX as f64)
        .map(|value| value as i64)
}

/// 数字转为表单字符串，整数值不带小数部分
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
