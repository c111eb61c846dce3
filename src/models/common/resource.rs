use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// 后端 REST 资源
///
/// 每个资源对应一个固定的端点路径，支持 list / get / create / update / delete。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export, export_to = "../frontend/src/types/generated/resource.ts")]
pub enum ResourceKind {
    Users,
    Eleves,
    Classes,
    Cours,
    Notes,
    Paiements,
    Communications,
    Roles,
    Bulletins,
    ParentEleves,
    DetailBulletins,
    AdresseEleves,
}

/// 名词的语法性别，用于生成法语提示语
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gender {
    Masculine,
    Feminine,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 12] = [
        ResourceKind::Users,
        ResourceKind::Eleves,
        ResourceKind::Classes,
        ResourceKind::Cours,
        ResourceKind::Notes,
        ResourceKind::Paiements,
        ResourceKind::Communications,
        ResourceKind::Roles,
        ResourceKind::Bulletins,
        ResourceKind::ParentEleves,
        ResourceKind::DetailBulletins,
        ResourceKind::AdresseEleves,
    ];

    /// URL 路径段（不含斜杠）
    pub fn segment(self) -> &'static str {
        match self {
            ResourceKind::Users => "users",
            ResourceKind::Eleves => "eleves",
            ResourceKind::Classes => "classes",
            ResourceKind::Cours => "cours",
            ResourceKind::Notes => "notes",
            ResourceKind::Paiements => "paiements",
            ResourceKind::Communications => "communications",
            ResourceKind::Roles => "roles",
            ResourceKind::Bulletins => "bulletins",
            ResourceKind::ParentEleves => "parent-eleves",
            ResourceKind::DetailBulletins => "detail-bulletins",
            ResourceKind::AdresseEleves => "adresse-eleves",
        }
    }

    /// 相对于后端根地址的集合路径
    pub fn path(self) -> String {
        format!("/{}", self.segment())
    }

    /// 单条记录路径
    pub fn item_path(self, id: i64) -> String {
        format!("/{}/{}", self.segment(), id)
    }

    /// 列表页标题
    pub fn title(self) -> &'static str {
        match self {
            ResourceKind::Users => "Utilisateurs",
            ResourceKind::Eleves => "Élèves",
            ResourceKind::Classes => "Classes",
            ResourceKind::Cours => "Cours",
            ResourceKind::Notes => "Notes",
            ResourceKind::Paiements => "Paiements",
            ResourceKind::Communications => "Communications",
            ResourceKind::Roles => "Rôles",
            ResourceKind::Bulletins => "Bulletins",
            ResourceKind::ParentEleves => "Relations parent-élève",
            ResourceKind::DetailBulletins => "Détails bulletin",
            ResourceKind::AdresseEleves => "Adresses élèves",
        }
    }

    fn singular(self) -> (&'static str, Gender) {
        match self {
            ResourceKind::Users => ("Utilisateur", Gender::Masculine),
            ResourceKind::Eleves => ("Élève", Gender::Masculine),
            ResourceKind::Classes => ("Classe", Gender::Feminine),
            ResourceKind::Cours => ("Cours", Gender::Masculine),
            ResourceKind::Notes => ("Note", Gender::Feminine),
            ResourceKind::Paiements => ("Paiement", Gender::Masculine),
            ResourceKind::Communications => ("Communication", Gender::Feminine),
            ResourceKind::Roles => ("Rôle", Gender::Masculine),
            ResourceKind::Bulletins => ("Bulletin", Gender::Masculine),
            ResourceKind::ParentEleves => ("Relation parent-élève", Gender::Feminine),
            ResourceKind::DetailBulletins => ("Détail bulletin", Gender::Masculine),
            ResourceKind::AdresseEleves => ("Adresse", Gender::Feminine),
        }
    }

    fn agreed(self, participle: &str) -> String {
        let (noun, gender) = self.singular();
        match gender {
            Gender::Masculine => format!("{noun} {participle} avec succès"),
            Gender::Feminine => format!("{noun} {participle}e avec succès"),
        }
    }

    pub fn created_message(self) -> String {
        self.agreed("créé")
    }

    pub fn updated_message(self) -> String {
        self.agreed("modifié")
    }

    pub fn deleted_message(self) -> String {
        self.agreed("supprimé")
    }

    pub fn load_failed_message(self) -> String {
        format!(
            "Erreur lors du chargement des {}",
            self.title().to_lowercase()
        )
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.segment() == s)
            .ok_or_else(|| format!("Unknown resource: {s}"))
    }
}
