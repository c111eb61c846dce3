use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use super::DataSource;
use crate::errors::{EduConnectError, Result};
use crate::models::ResourceKind;

/// 单个资源的访问句柄
///
/// 只做资源名到路径的映射，错误原样向上传递。
#[derive(Clone)]
pub struct ResourceGateway {
    resource: ResourceKind,
    source: Arc<dyn DataSource>,
}

impl ResourceGateway {
    pub fn new(resource: ResourceKind, source: Arc<dyn DataSource>) -> Self {
        Self { resource, source }
    }

    pub fn resource(&self) -> ResourceKind {
        self.resource
    }

    pub async fn list(&self) -> Result<Vec<Value>> {
        self.source.list(self.resource).await
    }

    pub async fn get(&self, id: i64) -> Result<Value> {
        self.source.get(self.resource, id).await
    }

    pub async fn create(&self, payload: Value) -> Result<Value> {
        self.source.create(self.resource, payload).await
    }

    pub async fn update(&self, id: i64, payload: Value) -> Result<Value> {
        self.source.update(self.resource, id, payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.source.delete(self.resource, id).await
    }

    /// 获取列表并解码为实体
    pub async fn list_as<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        self.list().await?.into_iter().map(decode).collect()
    }
}

/// 将后端记录解码为实体
pub fn decode<T: DeserializeOwned>(record: Value) -> Result<T> {
    serde_json::from_value(record)
        .map_err(|e| EduConnectError::serialization(format!("Unexpected record shape: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::FixtureDataSource;
    use crate::models::adresses::entities::AdresseEleve;
    use crate::models::cours::entities::Cours;
    use crate::models::parents::entities::ParentEleve;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_as_entities() {
        let gateway = ResourceGateway::new(
            ResourceKind::Cours,
            Arc::new(FixtureDataSource::seeded()),
        );
        let cours: Vec<Cours> = gateway.list_as().await.unwrap();
        assert_eq!(cours.len(), 2);
        assert_eq!(cours[0].nom.as_deref(), Some("Mathématiques"));
        assert_eq!(cours[0].ponderation, Some(2.0));
    }

    #[tokio::test]
    async fn test_created_links_decode() {
        let source: Arc<dyn DataSource> = Arc::new(FixtureDataSource::seeded());
        let parents = ResourceGateway::new(ResourceKind::ParentEleves, source.clone());
        parents
            .create(json!({"parentId": 2, "eleveId": 1}))
            .await
            .unwrap();
        let links: Vec<ParentEleve> = parents.list_as().await.unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].id, Some(1));
        assert_eq!(links[0].parent_id, Some(2));

        let adresses = ResourceGateway::new(ResourceKind::AdresseEleves, source);
        adresses
            .create(json!({"ville": "Kinshasa", "communeTerritoire": "Gombe", "eleveId": 1}))
            .await
            .unwrap();
        let rows: Vec<AdresseEleve> = adresses.list_as().await.unwrap();
        assert_eq!(rows[0].commune_territoire.as_deref(), Some("Gombe"));
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        let result: Result<Cours> = decode(json!({ "id": "one" }));
        assert!(matches!(result, Err(EduConnectError::Serialization(_))));
    }
}
