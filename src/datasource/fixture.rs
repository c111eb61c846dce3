use dashmap::DashMap;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

use super::{DataSource, fixtures};
use crate::errors::{EduConnectError, Result};
use crate::models::ResourceKind;

/// 内存夹具数据源
///
/// 每个资源一张按 id 排序的表。新建记录的 id 为当前最大 id + 1，
/// 更新为浅合并。
pub struct FixtureDataSource {
    tables: DashMap<ResourceKind, BTreeMap<i64, Value>>,
}

impl FixtureDataSource {
    /// 空数据源
    pub fn empty() -> Self {
        let tables = DashMap::new();
        for kind in ResourceKind::ALL {
            tables.insert(kind, BTreeMap::new());
        }
        Self { tables }
    }

    /// 带初始数据的数据源
    pub fn seeded() -> Self {
        let source = Self::empty();
        for kind in ResourceKind::ALL {
            let rows = fixtures::seed(kind)
                .into_iter()
                .filter_map(|row| record_id(&row).map(|id| (id, row)))
                .collect();
            source.tables.insert(kind, rows);
        }
        source
    }

    fn not_found(resource: ResourceKind, id: i64) -> EduConnectError {
        EduConnectError::not_found(format!("{} not found", resource.item_path(id)))
    }
}

impl Default for FixtureDataSource {
    fn default() -> Self {
        Self::seeded()
    }
}

fn record_id(record: &Value) -> Option<i64> {
    record.get("id").and_then(Value::as_i64)
}

fn into_object(resource: ResourceKind, payload: Value) -> Result<Map<String, Value>> {
    match payload {
        Value::Object(map) => Ok(map),
        _ => Err(EduConnectError::client_status(format!(
            "{}: payload must be a JSON object",
            resource.path()
        ))),
    }
}

#[async_trait::async_trait]
impl DataSource for FixtureDataSource {
    fn mode(&self) -> &'static str {
        "fixture"
    }

    fn describe(&self) -> String {
        "in-memory fixtures".to_string()
    }

    async fn list(&self, resource: ResourceKind) -> Result<Vec<Value>> {
        Ok(self
            .tables
            .get(&resource)
            .map(|table| table.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn get(&self, resource: ResourceKind, id: i64) -> Result<Value> {
        self.tables
            .get(&resource)
            .and_then(|table| table.get(&id).cloned())
            .ok_or_else(|| Self::not_found(resource, id))
    }

    async fn create(&self, resource: ResourceKind, payload: Value) -> Result<Value> {
        let mut record = into_object(resource, payload)?;
        let mut table = self.tables.entry(resource).or_default();
        let id = table.keys().next_back().copied().unwrap_or(0) + 1;
        record.insert("id".to_string(), Value::from(id));
        let record = Value::Object(record);
        table.insert(id, record.clone());
        debug!("Fixture created {}", resource.item_path(id));
        Ok(record)
    }

    async fn update(&self, resource: ResourceKind, id: i64, payload: Value) -> Result<Value> {
        let changes = into_object(resource, payload)?;
        let mut table = self
            .tables
            .get_mut(&resource)
            .ok_or_else(|| Self::not_found(resource, id))?;
        let record = table
            .get_mut(&id)
            .ok_or_else(|| Self::not_found(resource, id))?;
        if let Value::Object(fields) = record {
            for (key, value) in changes {
                // id 不可修改
                if key != "id" {
                    fields.insert(key, value);
                }
            }
        }
        debug!("Fixture updated {}", resource.item_path(id));
        Ok(record.clone())
    }

    async fn delete(&self, resource: ResourceKind, id: i64) -> Result<()> {
        let removed = self
            .tables
            .get_mut(&resource)
            .and_then(|mut table| table.remove(&id));
        match removed {
            Some(_) => {
                debug!("Fixture deleted {}", resource.item_path(id));
                Ok(())
            }
            None => Err(Self::not_found(resource, id)),
        }
    }
}
