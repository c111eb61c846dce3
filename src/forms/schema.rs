//! 表单字段描述
//!
//! 每个资源一份静态 `FormSchema`，描述草稿字段与后端字段的对应关系、
//! 类型转换方式以及必填规则。

use serde_json::Value;

use crate::models::ResourceKind;
use crate::models::common::ChoiceOption;

/// 下拉选项来自另一个资源
#[derive(Debug, Clone, Copy)]
pub struct Reference {
    pub resource: ResourceKind,
    // 只保留拥有任一角色的用户，空表示不过滤
    pub roles: &'static [&'static str],
    // 选项值取自记录的哪个字段
    pub value_key: &'static str,
    pub label: fn(&Value) -> String,
}

#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Text,
    Integer,
    Decimal,
    Date,
    Choice(&'static [ChoiceOption]),
    // 值为被引用记录的整数 id
    Reference(Reference),
    // 编辑时不回显
    Secret,
    // 草稿中单个值，提交时包装为单元素数组
    Tag(Reference),
}

impl FieldKind {
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Integer => "integer",
            FieldKind::Decimal => "decimal",
            FieldKind::Date => "date",
            FieldKind::Choice(_) => "choice",
            FieldKind::Reference(_) => "reference",
            FieldKind::Secret => "secret",
            FieldKind::Tag(_) => "tag",
        }
    }

    pub fn reference(&self) -> Option<&Reference> {
        match self {
            FieldKind::Reference(reference) | FieldKind::Tag(reference) => Some(reference),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Always,
    OnCreate,
    Never,
}

/// 值为空（或数字无法解析）时提交的内容
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyPolicy {
    Null,
    Zero,
    Omit,
    Keep,
}

/// 非阻塞格式提示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    Email,
    Phone,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    // 草稿字段名
    pub name: &'static str,
    // 后端字段名
    pub wire: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub requirement: Requirement,
    pub empty: EmptyPolicy,
    pub read_only: bool,
    pub default: &'static str,
    pub hint: Option<Hint>,
    pub helper: Option<&'static str>,
    // 缺失时的专用提示，否则使用表单的通用提示
    pub missing_message: Option<&'static str>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            wire: name,
            label,
            kind,
            requirement: Requirement::Never,
            empty: EmptyPolicy::Null,
            read_only: false,
            default: "",
            hint: None,
            helper: None,
            missing_message: None,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub const fn integer(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Integer)
    }

    pub const fn decimal(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Decimal)
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub const fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [ChoiceOption],
    ) -> Self {
        Self::new(name, label, FieldKind::Choice(options))
    }

    pub const fn reference(name: &'static str, label: &'static str, reference: Reference) -> Self {
        Self::new(name, label, FieldKind::Reference(reference))
    }

    pub const fn wire(mut self, wire: &'static str) -> Self {
        self.wire = wire;
        self
    }

    pub const fn required(mut self) -> Self {
        self.requirement = Requirement::Always;
        self
    }

    pub const fn required_on_create(mut self) -> Self {
        self.requirement = Requirement::OnCreate;
        self
    }

    pub const fn empty(mut self, policy: EmptyPolicy) -> Self {
        self.empty = policy;
        self
    }

    pub const fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub const fn default(mut self, value: &'static str) -> Self {
        self.default = value;
        self
    }

    pub const fn hint(mut self, hint: Hint) -> Self {
        self.hint = Some(hint);
        self
    }

    pub const fn helper(mut self, helper: &'static str) -> Self {
        self.helper = Some(helper);
        self
    }

    pub const fn missing(mut self, message: &'static str) -> Self {
        self.missing_message = Some(message);
        self
    }

    pub fn is_required(&self, creating: bool) -> bool {
        match self.requirement {
            Requirement::Always => true,
            Requirement::OnCreate => creating,
            Requirement::Never => false,
        }
    }
}

/// 由其他字段计算得出的值
#[derive(Debug, Clone, Copy)]
pub enum Derivation {
    /// 成绩 /20 预览（不提交）
    NoteAverage {
        points: &'static str,
        max_points: &'static str,
    },
    /// 剩余金额预览（不提交）
    PaymentRemainder {
        total: &'static str,
        paid: &'static str,
    },
    /// 成绩单明细的加权平均，写入只读字段并随表单提交
    Weighted {
        average: &'static str,
        coefficient: &'static str,
        target: &'static str,
    },
}

impl Derivation {
    /// 依赖的输入字段
    pub fn inputs(&self) -> [&'static str; 2] {
        match *self {
            Derivation::NoteAverage { points, max_points } => [points, max_points],
            Derivation::PaymentRemainder { total, paid } => [total, paid],
            Derivation::Weighted {
                average,
                coefficient,
                ..
            } => [average, coefficient],
        }
    }
}

#[derive(Debug)]
pub struct FormSchema {
    pub resource: ResourceKind,
    pub create_title: &'static str,
    pub edit_title: &'static str,
    pub fields: &'static [FieldSpec],
    pub derivation: Option<Derivation>,
}

impl FormSchema {
    pub const REQUIRED_MESSAGE: &'static str = "Veuillez remplir les champs obligatoires";

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn title(&self, creating: bool) -> &'static str {
        if creating {
            self.create_title
        } else {
            self.edit_title
        }
    }
}
