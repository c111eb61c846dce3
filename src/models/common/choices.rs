//! 下拉选项常量
//!
//! 值为后端使用的枚举字面量，标签为界面显示文本。

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 静态选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn choice(value: &'static str, label: &'static str) -> ChoiceOption {
    ChoiceOption { value, label }
}

/// 返回给前端的下拉选项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/forms.ts")]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl From<&ChoiceOption> for SelectOption {
    fn from(option: &ChoiceOption) -> Self {
        Self {
            value: option.value.to_string(),
            label: option.label.to_string(),
        }
    }
}

// 成绩录入周期
pub const NOTE_PERIODS: &[ChoiceOption] = &[
    choice("TRIMESTRE_1", "Premier trimestre"),
    choice("TRIMESTRE_2", "Deuxième trimestre"),
    choice("TRIMESTRE_3", "Troisième trimestre"),
    choice("SEMESTRE_1", "Premier semestre"),
    choice("SEMESTRE_2", "Deuxième semestre"),
];

// 缴费学期
pub const TERMS: &[ChoiceOption] = &[
    choice("TRIMESTRE_1", "Premier trimestre"),
    choice("TRIMESTRE_2", "Deuxième trimestre"),
    choice("TRIMESTRE_3", "Troisième trimestre"),
];

// 成绩单周期（后端使用带空格的字面量）
pub const BULLETIN_PERIODS: &[ChoiceOption] = &[
    choice("Trimestre 1", "Premier trimestre"),
    choice("Trimestre 2", "Deuxième trimestre"),
    choice("Trimestre 3", "Troisième trimestre"),
];

// 学生缴费状态
pub const PAYMENT_STATUSES: &[ChoiceOption] = &[
    choice("DEROGATION", "Dérogation"),
    choice("NON_EN_ORDRE", "Non en ordre"),
    choice("EN_ORDRE", "En ordre"),
];

// 通讯类型
pub const COMMUNICATION_TYPES: &[ChoiceOption] = &[
    choice("INFORMATION", "Information"),
    choice("ALERTE", "Alerte"),
    choice("RAPPEL", "Rappel"),
    choice("CONVOCATION", "Convocation"),
];

// 用户角色
pub const ROLES: &[ChoiceOption] = &[
    choice("ADMIN", "Administrateur"),
    choice("ENSEIGNANT", "Enseignant"),
    choice("PARENT", "Parent"),
    choice("ELEVE", "Élève"),
];

/// 查找显示标签，未知值原样返回
pub fn label_for(options: &[ChoiceOption], value: &str) -> String {
    options
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label.to_string())
        .unwrap_or_else(|| value.to_string())
}

pub fn contains(options: &[ChoiceOption], value: &str) -> bool {
    options.iter().any(|option| option.value == value)
}

pub fn select_options(options: &[ChoiceOption]) -> Vec<SelectOption> {
    options.iter().map(SelectOption::from).collect()
}
