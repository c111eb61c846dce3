use serde::Serialize;
use ts_rs::TS;

// 首页统计数量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct EntityCounts {
    pub users: usize,
    pub eleves: usize,
    pub classes: usize,
    pub cours: usize,
}

impl EntityCounts {
    /// 后端不可用时显示的示例数量
    pub const PLACEHOLDER: EntityCounts = EntityCounts {
        users: 5,
        eleves: 25,
        classes: 3,
        cours: 8,
    };
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct DashboardResponse {
    pub counts: EntityCounts,
    // 为 true 时 counts 是示例数据
    pub degraded: bool,
    pub backend_url: String,
}
