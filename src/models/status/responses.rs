use serde::Serialize;
use ts_rs::TS;

use crate::models::ResourceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/status.ts")]
pub enum ProbeStatus {
    Ok,
    Error,
}

// 单个端点的探测结果
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/status.ts")]
pub struct EndpointStatus {
    pub resource: ResourceKind,
    pub name: String,
    pub url: String,
    pub status: ProbeStatus,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/status.ts")]
pub struct ComponentStatus {
    pub status: ProbeStatus,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/status.ts")]
pub struct StatusReport {
    pub console: ComponentStatus,
    pub backend: ComponentStatus,
    pub cors: ComponentStatus,
    // fixture / live
    pub mode: String,
    pub allowed_origins: Vec<String>,
    pub endpoints: Vec<EndpointStatus>,
}
