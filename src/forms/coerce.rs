//! 草稿与后端记录之间的转换
//!
//! 草稿中所有值都是字符串。提交时按字段类型转换，空值按字段的
//! `EmptyPolicy` 处理。

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::schema::{EmptyPolicy, FieldKind, FieldSpec, FormSchema};
use crate::errors::{EduConnectError, Result};
use crate::utils::numeric::{format_number, parse_integer, parse_numeric};

pub type Draft = BTreeMap<String, String>;

/// 后端字段值转为草稿字符串
pub fn to_draft_value(field: &FieldSpec, value: Option<&Value>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    match (field.kind, value) {
        (FieldKind::Secret, _) => String::new(),
        (FieldKind::Tag(_), Value::Array(items)) => items
            .first()
            .map(scalar_to_string)
            .unwrap_or_default(),
        (FieldKind::Date, Value::String(s)) => normalize_date(s).unwrap_or_else(|_| s.clone()),
        (_, value) => scalar_to_string(value),
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        // 整数原样保留，超过 2^53 的 id 不能经过 f64
        Value::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
        Value::Number(n) => n.as_f64().map(format_number).unwrap_or_else(|| n.to_string()),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// 从后端记录构造草稿
pub fn draft_from_record(schema: &FormSchema, record: &Value) -> Draft {
    schema
        .fields
        .iter()
        .map(|field| {
            (
                field.name.to_string(),
                to_draft_value(field, record.get(field.wire)),
            )
        })
        .collect()
}

/// 日期统一为 `YYYY-MM-DD`
pub fn normalize_date(input: &str) -> Result<String> {
    let trimmed = input.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S").map(|d| d.date()))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f").map(|d| d.date())
        })
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|d| d.date_naive()))
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d/%m/%Y"))
        .or_else(|e| {
            // 带时区等其他 ISO 写法只取日期部分
            trimmed
                .get(..10)
                .and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok())
                .filter(|_| trimmed[10..].starts_with(['T', ' ']))
                .ok_or(e)
        })
        .map_err(|e| EduConnectError::date_parse(format!("{trimmed}: {e}")))?;
    Ok(date.format("%Y-%m-%d").to_string())
}

fn empty_value(policy: EmptyPolicy, zero: Value) -> Option<Value> {
    match policy {
        EmptyPolicy::Null => Some(Value::Null),
        EmptyPolicy::Zero => Some(zero),
        EmptyPolicy::Omit => None,
        EmptyPolicy::Keep => Some(Value::String(String::new())),
    }
}

/// 转换单个字段，`None` 表示不提交
pub fn coerce_field(field: &FieldSpec, raw: &str, creating: bool) -> Result<Option<Value>> {
    let trimmed = raw.trim();
    let value = match field.kind {
        FieldKind::Text | FieldKind::Choice(_) => {
            if trimmed.is_empty() {
                empty_value(field.empty, Value::String(String::new()))
            } else {
                Some(Value::String(raw.to_string()))
            }
        }
        FieldKind::Secret => {
            if trimmed.is_empty() {
                // 编辑时空密码表示不修改
                if creating {
                    empty_value(field.empty, Value::String(String::new()))
                } else {
                    None
                }
            } else {
                Some(Value::String(raw.to_string()))
            }
        }
        FieldKind::Integer | FieldKind::Reference(_) => match parse_integer(trimmed) {
            Some(n) => Some(Value::from(n)),
            None => empty_value(field.empty, Value::from(0)),
        },
        FieldKind::Decimal => match parse_numeric(trimmed) {
            Some(n) => Some(Value::from(n)),
            None => empty_value(field.empty, Value::from(0.0)),
        },
        FieldKind::Date => {
            if trimmed.is_empty() {
                empty_value(field.empty, Value::Null)
            } else {
                Some(Value::String(normalize_date(trimmed)?))
            }
        }
        FieldKind::Tag(_) => {
            if trimmed.is_empty() {
                Some(Value::Array(Vec::new()))
            } else {
                Some(Value::Array(vec![Value::String(trimmed.to_string())]))
            }
        }
    };
    Ok(value)
}

/// 草稿转为后端请求体
pub fn payload(schema: &FormSchema, draft: &Draft, creating: bool) -> Result<Value> {
    let mut body = Map::new();
    for field in schema.fields {
        let raw = draft.get(field.name).map(String::as_str).unwrap_or_default();
        let value = coerce_field(field, raw, creating).map_err(|e| match e {
            EduConnectError::DateParse(msg) => {
                EduConnectError::date_parse(format!("{}: {msg}", field.label))
            }
            other => other,
        })?;
        if let Some(value) = value {
            body.insert(field.wire.to_string(), value);
        }
    }
    Ok(Value::Object(body))
}
