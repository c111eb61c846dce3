//! 成绩单明细看板：按成绩单分组显示明细

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::future::try_join;
use std::collections::{BTreeMap, BTreeSet};

use super::ResourceService;
use crate::models::bulletins::entities::{Bulletin, DetailBulletin};
use crate::models::bulletins::responses::{
    BulletinDisplay, DetailBulletinBoard, DetailBulletinDisplay, DetailGroup, DetailRow,
};
use crate::models::{ApiResponse, ResourceKind, SelectOption};
use crate::services::error_response;

pub async fn detail_board(
    service: &ResourceService,
    request: &HttpRequest,
    bulletin: Option<i64>,
) -> ActixResult<HttpResponse> {
    let details = service.get_gateway(request, ResourceKind::DetailBulletins);
    let bulletins = service.get_gateway(request, ResourceKind::Bulletins);

    let loaded = try_join(details.list_as::<DetailBulletin>(), bulletins.list_as::<Bulletin>()).await;
    match loaded {
        Ok((details, bulletins)) => {
            let board = build_board(details, &bulletins, bulletin);
            Ok(HttpResponse::Ok().json(ApiResponse::success(board, "Detail board retrieved")))
        }
        Err(e) => Ok(error_response(
            &e,
            &ResourceKind::DetailBulletins.load_failed_message(),
        )),
    }
}

fn group_title(bulletin_id: i64, bulletin: Option<&Bulletin>) -> String {
    bulletin
        .map(Bulletin::title)
        .unwrap_or_else(|| format!("Bulletin {bulletin_id}"))
}

/// 分组并统计
///
/// 总数不受筛选影响；没有 `bulletinId` 的明细只计入总数。
pub fn build_board(
    details: Vec<DetailBulletin>,
    bulletins: &[Bulletin],
    filter: Option<i64>,
) -> DetailBulletinBoard {
    let total_details = details.len();
    let total_bulletins = details
        .iter()
        .filter_map(|d| d.bulletin_id)
        .collect::<BTreeSet<_>>()
        .len();

    let by_id: BTreeMap<i64, &Bulletin> = bulletins
        .iter()
        .filter_map(|b| b.id.map(|id| (id, b)))
        .collect();

    let mut grouped: BTreeMap<i64, Vec<DetailRow>> = BTreeMap::new();
    for detail in details {
        let Some(bulletin_id) = detail.bulletin_id else {
            continue;
        };
        if filter.is_some_and(|f| f != bulletin_id) {
            continue;
        }
        let display = DetailBulletinDisplay::of(&detail);
        grouped
            .entry(bulletin_id)
            .or_default()
            .push(DetailRow { detail, display });
    }

    let groups = grouped
        .into_iter()
        .map(|(bulletin_id, details)| {
            let bulletin = by_id.get(&bulletin_id).copied();
            let display = bulletin.map(BulletinDisplay::of);
            DetailGroup {
                bulletin_id,
                title: group_title(bulletin_id, bulletin),
                moyenne_label: display.as_ref().and_then(|d| d.moyenne_label.clone()),
                color: display
                    .map(|d| d.color)
                    .unwrap_or_else(|| "default".to_string()),
                details,
            }
        })
        .collect();

    let bulletin_options = bulletins
        .iter()
        .filter_map(|b| {
            b.id.map(|id| SelectOption {
                value: id.to_string(),
                label: group_title(id, Some(b)),
            })
        })
        .collect();

    let summary = (total_details > 0).then(|| {
        format!(
            "📊 {total_details} détail(s) de bulletin • {total_bulletins} bulletin(s) avec détails"
        )
    });

    DetailBulletinBoard {
        total_details,
        total_bulletins,
        filter,
        groups,
        bulletin_options,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::gateway::decode;
    use crate::errors::Result;
    use serde_json::{Value, json};

    fn board_from_values(
        details: Vec<Value>,
        bulletins: Vec<Value>,
        filter: Option<i64>,
    ) -> Result<DetailBulletinBoard> {
        let details = details
            .into_iter()
            .map(decode::<DetailBulletin>)
            .collect::<Result<Vec<_>>>()?;
        let bulletins = bulletins
            .into_iter()
            .map(decode::<Bulletin>)
            .collect::<Result<Vec<_>>>()?;
        Ok(build_board(details, &bulletins, filter))
    }

    fn sample() -> (Vec<Value>, Vec<Value>) {
        let details = vec![
            json!({"id": 1, "bulletinId": 10, "nomCours": "Maths", "moyenne": 15.0, "ponderation": 3.0}),
            json!({"id": 2, "bulletinId": 10, "nomCours": "Français", "moyenne": 12.0, "ponderation": 2.0}),
            json!({"id": 3, "bulletinId": 11, "nomCours": "Histoire", "moyenne": 9.0, "ponderation": 1.0}),
            json!({"id": 4, "bulletinId": 12, "nomCours": "Sciences"}),
        ];
        let bulletins = vec![
            json!({"id": 10, "eleveNom": "Martin", "elevePrenom": "Sophie", "periode": "Trimestre 1", "moyenneGenerale": 13.5}),
            json!({"id": 11, "eleveNom": "Durant", "elevePrenom": "Pierre", "periode": "Trimestre 1"}),
        ];
        (details, bulletins)
    }

    #[test]
    fn test_groups_by_bulletin() {
        let (details, bulletins) = sample();
        let board = board_from_values(details, bulletins, None).unwrap();
        assert_eq!(board.total_details, 4);
        assert_eq!(board.total_bulletins, 3);
        assert_eq!(board.groups.len(), 3);
        assert_eq!(board.groups[0].title, "Martin Sophie - Trimestre 1");
        assert_eq!(board.groups[0].details.len(), 2);
        assert_eq!(board.groups[0].moyenne_label.as_deref(), Some("13.50/20"));
        assert_eq!(board.groups[0].color, "primary");
        // 成绩单不存在时使用编号作标题
        assert_eq!(board.groups[2].title, "Bulletin 12");
        assert_eq!(board.bulletin_options.len(), 2);
        assert_eq!(
            board.summary.as_deref(),
            Some("📊 4 détail(s) de bulletin • 3 bulletin(s) avec détails")
        );
    }

    #[test]
    fn test_filter_keeps_totals() {
        let (details, bulletins) = sample();
        let board = board_from_values(details, bulletins, Some(11)).unwrap();
        assert_eq!(board.groups.len(), 1);
        assert_eq!(board.groups[0].bulletin_id, 11);
        assert_eq!(board.total_details, 4);
        assert_eq!(board.filter, Some(11));
    }

    #[test]
    fn test_empty_board() {
        let board = build_board(Vec::new(), &[], None);
        assert!(board.groups.is_empty());
        assert_eq!(board.summary, None);
    }
}
