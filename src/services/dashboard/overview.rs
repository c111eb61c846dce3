use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::future::try_join4;
use std::sync::Arc;
use tracing::warn;

use super::DashboardService;
use crate::datasource::DataSource;
use crate::errors::Result;
use crate::models::dashboard::responses::{DashboardResponse, EntityCounts};
use crate::models::{ApiResponse, Notification, ResourceKind};

/// 并发获取四类实体数量
pub async fn fetch_counts(source: &Arc<dyn DataSource>) -> Result<EntityCounts> {
    let (users, eleves, classes, cours) = try_join4(
        source.list(ResourceKind::Users),
        source.list(ResourceKind::Eleves),
        source.list(ResourceKind::Classes),
        source.list(ResourceKind::Cours),
    )
    .await?;
    Ok(EntityCounts {
        users: users.len(),
        eleves: eleves.len(),
        classes: classes.len(),
        cours: cours.len(),
    })
}

/// 任一请求失败时退回示例数量，并显示常驻警告
pub async fn get_overview(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let source = service.get_datasource(request);
    let backend_url = source.describe();

    let response = match fetch_counts(&source).await {
        Ok(counts) => ApiResponse::success(
            DashboardResponse {
                counts,
                degraded: false,
                backend_url,
            },
            "Dashboard retrieved",
        ),
        Err(e) => {
            warn!("Dashboard falling back to placeholder counts: {}", e);
            let notification = Notification::warning(format!(
                "⚠️ Backend non disponible. Le backend EduConnect n'est pas accessible sur {backend_url}. Les données affichées sont des exemples."
            ))
            .persistent();
            ApiResponse::success(
                DashboardResponse {
                    counts: EntityCounts::PLACEHOLDER,
                    degraded: true,
                    backend_url,
                },
                "Dashboard retrieved with placeholder data",
            )
            .with_notification(notification)
        }
    };
    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::FixtureDataSource;

    #[tokio::test]
    async fn test_counts_from_fixtures() {
        let source: Arc<dyn DataSource> = Arc::new(FixtureDataSource::seeded());
        let counts = fetch_counts(&source).await.unwrap();
        assert_eq!(
            counts,
            EntityCounts {
                users: 2,
                eleves: 2,
                classes: 2,
                cours: 2,
            }
        );
    }
}
