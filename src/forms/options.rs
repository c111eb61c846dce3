//! 引用字段的下拉选项加载

use futures_util::future::join_all;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

use super::FormController;
use super::schema::Reference;
use crate::datasource::DataSource;
use crate::errors::Result;
use crate::models::{ResourceKind, SelectOption};

/// 由记录列表构造下拉选项
pub fn build_options(reference: &Reference, records: &[Value]) -> Vec<SelectOption> {
    records
        .iter()
        .filter(|record| {
            reference.roles.is_empty()
                || record
                    .get("roles")
                    .and_then(Value::as_array)
                    .is_some_and(|roles| {
                        roles
                            .iter()
                            .filter_map(Value::as_str)
                            .any(|role| reference.roles.contains(&role))
                    })
        })
        .filter_map(|record| {
            let value = match record.get(reference.value_key)? {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                _ => return None,
            };
            Some(SelectOption {
                value,
                label: (reference.label)(record),
            })
        })
        .collect()
}

/// 加载表单所有引用字段的选项
///
/// 同一资源只请求一次。加载失败记录日志并作为警告显示，表单仍可使用。
pub async fn load_options(form: &mut FormController, source: &Arc<dyn DataSource>) {
    let mut resources: Vec<ResourceKind> = form
        .schema()
        .fields
        .iter()
        .filter_map(|field| field.kind.reference().map(|r| r.resource))
        .collect();
    resources.sort();
    resources.dedup();

    let results = join_all(resources.iter().map(|&resource| async move {
        (resource, source.list(resource).await)
    }))
    .await;
    let loaded: BTreeMap<ResourceKind, Result<Vec<Value>>> = results.into_iter().collect();

    for field in form.schema().fields {
        let Some(reference) = field.kind.reference() else {
            continue;
        };
        match loaded.get(&reference.resource) {
            Some(Ok(records)) => form.set_options(field.name, build_options(reference, records)),
            Some(Err(e)) => {
                warn!(
                    "Failed to load {} options for {} form: {}",
                    reference.resource,
                    form.resource(),
                    e
                );
                form.add_warning(reference.resource.load_failed_message());
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::{FixtureDataSource, fixtures};
    use crate::forms::schemas::{PARENT_ELEVE_FORM, USER_FORM, schema_for};
    use crate::grading::GradingSettings;
    use serde_json::json;

    #[test]
    fn test_role_filter() {
        let reference = PARENT_ELEVE_FORM.field("parentId").unwrap().kind.reference().copied().unwrap();
        let users = vec![
            json!({ "id": 1, "nom": "A", "prenom": "B", "email": "a@b.c", "roles": ["ADMIN"] }),
            json!({ "id": 3, "nom": "Petit", "prenom": "Luc", "email": "luc@x.fr", "roles": ["PARENT"] }),
            json!({ "id": 4, "nom": "Sans", "prenom": "Role" }),
        ];
        let options = build_options(&reference, &users);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, "3");
        assert_eq!(options[0].label, "Petit Luc - luc@x.fr");
    }

    #[test]
    fn test_role_names_as_values() {
        let reference = USER_FORM.field("role").unwrap().kind.reference().copied().unwrap();
        let options = build_options(&reference, &fixtures::seed(ResourceKind::Roles));
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["ADMIN", "ENSEIGNANT", "PARENT", "ELEVE"]);
    }

    #[tokio::test]
    async fn test_load_options_from_fixtures() {
        let source: Arc<dyn DataSource> = Arc::new(FixtureDataSource::seeded());
        let mut form = FormController::open_create(
            schema_for(ResourceKind::Notes),
            &BTreeMap::new(),
            GradingSettings::default(),
        );
        load_options(&mut form, &source).await;
        let view = form.view();
        let eleves = view.fields.iter().find(|f| f.name == "eleveId").unwrap();
        assert_eq!(eleves.options.len(), 2);
        assert_eq!(eleves.options[0].label, "Durant Pierre - CM1-A");
        assert!(view.warnings.is_empty());
    }

    struct FailingSource;

    #[async_trait::async_trait]
    impl DataSource for FailingSource {
        fn mode(&self) -> &'static str {
            "live"
        }
        fn describe(&self) -> String {
            "failing".to_string()
        }
        async fn list(&self, _: ResourceKind) -> Result<Vec<Value>> {
            Err(crate::errors::EduConnectError::network_unreachable("refused"))
        }
        async fn get(&self, _: ResourceKind, _: i64) -> Result<Value> {
            unreachable!()
        }
        async fn create(&self, _: ResourceKind, _: Value) -> Result<Value> {
            unreachable!()
        }
        async fn update(&self, _: ResourceKind, _: i64, _: Value) -> Result<Value> {
            unreachable!()
        }
        async fn delete(&self, _: ResourceKind, _: i64) -> Result<()> {
            unreachable!()
        }
    }

    #[tokio::test]
    async fn test_failed_option_load_is_a_warning() {
        let source: Arc<dyn DataSource> = Arc::new(FailingSource);
        let mut form = FormController::open_create(
            schema_for(ResourceKind::ParentEleves),
            &BTreeMap::new(),
            GradingSettings::default(),
        );
        load_options(&mut form, &source).await;
        let view = form.view();
        assert_eq!(
            view.warnings,
            vec![
                "Erreur lors du chargement des utilisateurs".to_string(),
                "Erreur lors du chargement des élèves".to_string(),
            ]
        );
    }
}
