use crate::config::AppConfig;
use crate::datasource::{DataSource, create_datasource};
use crate::forms::FormRegistry;
use crate::grading::GradingSettings;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub datasource: Arc<dyn DataSource>,
    pub registry: Arc<FormRegistry>,
    pub settings: GradingSettings,
}

/// 准备服务器启动的上下文
/// 包括数据源、表单登记表和成绩计算参数
pub async fn prepare_server_startup() -> StartupContext {
    let config = AppConfig::get();

    let datasource =
        create_datasource(&config.backend).expect("Failed to create backend data source");
    warn!(
        "Data source initialized ({} mode, {})",
        datasource.mode(),
        datasource.describe()
    );

    let settings = GradingSettings::from(&config.grading);
    if settings.weighted_divisor != settings.average_scale {
        debug!(
            "Weighted divisor ({}) differs from average scale ({})",
            settings.weighted_divisor, settings.average_scale
        );
    }

    let registry = Arc::new(FormRegistry::new(config.forms.max_open));
    debug!("Form registry ready (max {} open forms)", config.forms.max_open);

    StartupContext {
        datasource,
        registry,
        settings,
    }
}
