use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户（管理员、教师、家长、学生账号）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    pub id: Option<i64>,
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub email: Option<String>,
    pub numero_telephone: Option<String>,
    pub adresse: Option<String>,
    // 角色名列表，例如 ["PARENT"]
    #[serde(default)]
    pub roles: Vec<String>,
    pub date_creation: Option<chrono::NaiveDateTime>,
}

impl User {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

// 角色
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct Role {
    pub id: Option<i64>,
    pub nom: Option<String>,
}
