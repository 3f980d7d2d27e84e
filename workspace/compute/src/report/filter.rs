//! Filter compilation: `ReportFilters` -> a de-duplicated, deterministically
//! ordered query over the parlay ledger.

use common::ReportFilters;
use model::entities::{parlay, parlay_leg};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, JoinType, LoaderTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};
use tracing::instrument;

use crate::error::Result;

/// Parlay-level conditions: date range, status, stake bounds. All bounds
/// are inclusive; absent fields contribute no constraint.
fn parlay_condition(filters: &ReportFilters) -> Condition {
    let mut condition = Condition::all();
    if let Some(start) = filters.start_date {
        condition = condition.add(parlay::Column::Date.gte(start));
    }
    if let Some(end) = filters.end_date {
        condition = condition.add(parlay::Column::Date.lte(end));
    }
    if let Some(status) = filters.status {
        condition = condition.add(parlay::Column::Status.eq(parlay::ParlayStatus::from(status)));
    }
    if let Some(min_stake) = filters.min_stake {
        condition = condition.add(parlay::Column::Stake.gte(min_stake));
    }
    if let Some(max_stake) = filters.max_stake {
        condition = condition.add(parlay::Column::Stake.lte(max_stake));
    }
    condition
}

/// Fetch the parlays matching `filters`, with their legs resolved.
///
/// Leg-level filters (`team_ids` / `player_ids`) join the legs table, which
/// would expand a parlay into one row per matching leg; `DISTINCT` collapses
/// that back to one row per parlay and is applied only on that path, since
/// the parlay-only path already yields at most one row each. Results are
/// ordered by date descending with the id as a stable tie-break, so
/// repeated identical queries return identical orderings.
#[instrument(skip(db))]
pub async fn fetch_matching(
    db: &DatabaseConnection,
    filters: &ReportFilters,
) -> Result<Vec<(parlay::Model, Vec<parlay_leg::Model>)>> {
    let mut query = parlay::Entity::find().filter(parlay_condition(filters));

    if filters.touches_legs() {
        query = query
            .join(JoinType::InnerJoin, parlay::Relation::ParlayLeg.def())
            .distinct();
        if let Some(team_ids) = filters.team_constraint() {
            query = query.filter(parlay_leg::Column::TeamId.is_in(team_ids.iter().copied()));
        }
        if let Some(player_ids) = filters.player_constraint() {
            query = query.filter(parlay_leg::Column::PlayerId.is_in(player_ids.iter().copied()));
        }
    }

    let parlays = query
        .order_by_desc(parlay::Column::Date)
        .order_by_asc(parlay::Column::Id)
        .all(db)
        .await?;
    let legs = parlays.load_many(parlay_leg::Entity, db).await?;

    Ok(parlays.into_iter().zip(legs).collect())
}

#[cfg(test)]
mod tests {
    use common::{ParlayStatus, ReportFilters};
    use sea_orm::DatabaseConnection;

    use super::super::testing::{mixed_ledger, setup_db, MixedLedger};
    use super::*;

    async fn matching_ids(db: &DatabaseConnection, filters: &ReportFilters) -> Vec<i32> {
        fetch_matching(db, filters)
            .await
            .expect("fetch should succeed")
            .into_iter()
            .map(|(parlay, _)| parlay.id)
            .collect()
    }

    #[tokio::test]
    async fn no_filters_returns_full_ledger_date_desc() {
        let db = setup_db().await;
        let ledger = mixed_ledger(&db).await;

        let ids = matching_ids(&db, &ReportFilters::default()).await;

        // p2 and p3 share a date; the id breaks the tie.
        assert_eq!(ids, vec![ledger.p4, ledger.p2, ledger.p3, ledger.p1]);
    }

    #[tokio::test]
    async fn team_filter_deduplicates_multi_leg_matches() {
        let db = setup_db().await;
        let ledger = mixed_ledger(&db).await;

        // p3 has two legs referencing the same team; it must still appear
        // exactly once.
        let filters = ReportFilters {
            team_ids: Some(vec![ledger.celtics]),
            ..Default::default()
        };
        let ids = matching_ids(&db, &filters).await;

        assert_eq!(ids, vec![ledger.p3, ledger.p1]);
    }

    #[tokio::test]
    async fn filters_compose_conjunctively() {
        let db = setup_db().await;
        let ledger = mixed_ledger(&db).await;

        // p1 is won but staked below the bound; p4 satisfies both.
        let filters = ReportFilters {
            status: Some(ParlayStatus::Won),
            min_stake: Some(50.0),
            ..Default::default()
        };
        let ids = matching_ids(&db, &filters).await;

        assert_eq!(ids, vec![ledger.p4]);
    }

    #[tokio::test]
    async fn empty_id_lists_apply_no_constraint() {
        let db = setup_db().await;
        mixed_ledger(&db).await;

        let filters = ReportFilters {
            team_ids: Some(vec![]),
            player_ids: Some(vec![]),
            ..Default::default()
        };
        let ids = matching_ids(&db, &filters).await;

        assert_eq!(ids.len(), 4);
    }

    #[tokio::test]
    async fn date_bounds_are_inclusive() {
        let db = setup_db().await;
        let ledger = mixed_ledger(&db).await;

        let filters = ReportFilters {
            start_date: Some(ledger.mid_date),
            end_date: Some(ledger.last_date),
            ..Default::default()
        };
        let ids = matching_ids(&db, &filters).await;

        assert_eq!(ids, vec![ledger.p4, ledger.p2, ledger.p3]);
    }

    #[tokio::test]
    async fn stake_bounds_are_inclusive() {
        let db = setup_db().await;
        let ledger = mixed_ledger(&db).await;

        let filters = ReportFilters {
            min_stake: Some(20.0),
            max_stake: Some(30.0),
            ..Default::default()
        };
        let ids = matching_ids(&db, &filters).await;

        assert_eq!(ids, vec![ledger.p2, ledger.p3]);
    }

    #[tokio::test]
    async fn player_filter_matches_any_leg() {
        let db = setup_db().await;
        let ledger = mixed_ledger(&db).await;

        let filters = ReportFilters {
            player_ids: Some(vec![ledger.lebron]),
            ..Default::default()
        };
        let ids = matching_ids(&db, &filters).await;

        assert_eq!(ids, vec![ledger.p2]);
    }

    #[tokio::test]
    async fn identical_queries_are_order_stable() {
        let db = setup_db().await;
        let ledger = mixed_ledger(&db).await;

        let filters = ReportFilters {
            team_ids: Some(vec![ledger.celtics, ledger.lakers]),
            ..Default::default()
        };
        let first = matching_ids(&db, &filters).await;
        let second = matching_ids(&db, &filters).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn legs_are_resolved_per_parlay() {
        let db = setup_db().await;
        let ledger = mixed_ledger(&db).await;

        let records = fetch_matching(&db, &ReportFilters::default())
            .await
            .expect("fetch should succeed");
        let (_, p3_legs) = records
            .iter()
            .find(|(parlay, _)| parlay.id == ledger.p3)
            .expect("p3 should match");

        assert_eq!(p3_legs.len(), 3);
    }
}
