//! 数据源
//!
//! 控制台对后端的全部访问都经过 `DataSource`。启动时根据配置选择
//! 实时 HTTP 数据源或内存夹具数据源，运行期间不会切换。

pub mod fixture;
pub mod fixtures;
pub mod gateway;
pub mod live;

use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

use crate::config::BackendConfig;
use crate::errors::Result;
use crate::models::ResourceKind;

pub use fixture::FixtureDataSource;
pub use gateway::ResourceGateway;
pub use live::LiveDataSource;

#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    /// 模式名称：`live` 或 `fixture`
    fn mode(&self) -> &'static str;
    /// 显示用的后端地址
    fn describe(&self) -> String;

    // 获取资源的全部记录
    async fn list(&self, resource: ResourceKind) -> Result<Vec<Value>>;
    // 按 id 获取单条记录
    async fn get(&self, resource: ResourceKind, id: i64) -> Result<Value>;
    // 新建记录，返回后端保存后的记录
    async fn create(&self, resource: ResourceKind, payload: Value) -> Result<Value>;
    // 部分更新（PATCH）
    async fn update(&self, resource: ResourceKind, id: i64, payload: Value) -> Result<Value>;
    // 删除记录
    async fn delete(&self, resource: ResourceKind, id: i64) -> Result<()>;
}

pub fn create_datasource(config: &BackendConfig) -> Result<Arc<dyn DataSource>> {
    if config.mock_data {
        warn!("Using in-memory fixture data source");
        Ok(Arc::new(FixtureDataSource::seeded()))
    } else {
        warn!("Using live backend at {}", config.base_url);
        Ok(Arc::new(LiveDataSource::new(&config.base_url)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_fixture_from_config() {
        let config = BackendConfig {
            base_url: "http://localhost:8080/api".to_string(),
            mock_data: true,
        };
        let source = create_datasource(&config).unwrap();
        assert_eq!(source.mode(), "fixture");
    }

    #[test]
    fn test_selects_live_from_config() {
        let config = BackendConfig {
            base_url: "http://localhost:8080/api/".to_string(),
            mock_data: false,
        };
        let source = create_datasource(&config).unwrap();
        assert_eq!(source.mode(), "live");
        assert_eq!(source.describe(), "http://localhost:8080/api");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let config = BackendConfig {
            base_url: "not a url".to_string(),
            mock_data: false,
        };
        assert!(create_datasource(&config).is_err());
    }
}
