use crate::forms::FormRegistry;
use std::sync::Arc;
use tokio::signal;
use tracing::warn;

/// 等待 Ctrl+C，未提交的表单草稿随进程一起丢弃
pub async fn listen_for_shutdown(registry: Arc<FormRegistry>) {
    signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
    warn!("Shutdown signal received, initiating graceful shutdown...");
    if !registry.is_empty() {
        warn!("Discarding {} unsaved form draft(s)", registry.len());
    }
}
