//! Report generation over the parlay ledger.
//!
//! Split the way the computation decomposes: [`filter`] compiles the
//! optional report filters into a de-duplicated, deterministically ordered
//! ledger query, and [`aggregate`] reduces the resulting candidate set to
//! summary statistics.

pub mod aggregate;
pub mod filter;

#[cfg(test)]
pub(crate) mod testing;

use common::{ParlayDto, ParlayLegDto, ReportFilters, ReportStats};
use model::entities::{parlay, parlay_leg};
use sea_orm::DatabaseConnection;
use tracing::instrument;

use crate::error::Result;

/// Convert a parlay row and its resolved legs into the wire representation.
pub fn to_parlay_dto(parlay: parlay::Model, legs: Vec<parlay_leg::Model>) -> ParlayDto {
    ParlayDto {
        id: parlay.id,
        date: parlay.date,
        stake: parlay.stake,
        potential_payout: parlay.potential_payout,
        sportsbook: parlay.sportsbook,
        status: parlay.status.into(),
        notes: parlay.notes,
        legs: legs.into_iter().map(to_leg_dto).collect(),
    }
}

fn to_leg_dto(leg: parlay_leg::Model) -> ParlayLegDto {
    ParlayLegDto {
        id: leg.id,
        leg_type: leg.leg_type.into(),
        team_id: leg.team_id,
        player_id: leg.player_id,
        market: leg.market,
        selection: leg.selection,
        odds: leg.odds,
        result: leg.result.into(),
    }
}

/// Produce the report for `filters`: fetch the matching slice of the
/// ledger and reduce it to summary statistics.
///
/// Aggregation cannot fail; the only error source is the upstream fetch.
#[instrument(skip(db))]
pub async fn summary(db: &DatabaseConnection, filters: &ReportFilters) -> Result<ReportStats> {
    let records = filter::fetch_matching(db, filters).await?;
    let parlays: Vec<ParlayDto> = records
        .into_iter()
        .map(|(parlay, legs)| to_parlay_dto(parlay, legs))
        .collect();
    Ok(aggregate::summarize(parlays))
}

#[cfg(test)]
mod tests {
    use common::ReportFilters;

    use super::testing::{settled_ledger, setup_db};
    use super::*;

    /// End-to-end check of the documented arithmetic: stakes [10, 20, 30],
    /// statuses [won, lost, pending], payout 25 on the won parlay.
    #[tokio::test]
    async fn summary_over_settled_ledger() {
        let db = setup_db().await;
        settled_ledger(&db).await;

        let stats = summary(&db, &ReportFilters::default())
            .await
            .expect("report should succeed");

        assert_eq!(stats.total_parlays, 3);
        assert_eq!(stats.won_parlays, 1);
        assert_eq!(stats.lost_parlays, 1);
        assert_eq!(stats.pending_parlays, 1);
        assert_eq!(stats.total_staked, 60.0);
        assert_eq!(stats.average_stake, 20.0);
        assert_eq!(stats.total_returned, 25.0);
        assert_eq!(stats.net_profit, -35.0);
        assert_eq!(stats.success_rate, 1.0 / 3.0);
        assert_eq!(stats.roi, -35.0 / 60.0);
        assert_eq!(stats.parlays.len(), 3);
    }

    #[tokio::test]
    async fn summary_of_empty_ledger_is_all_zero() {
        let db = setup_db().await;

        let stats = summary(&db, &ReportFilters::default())
            .await
            .expect("report should succeed");

        assert_eq!(stats.total_parlays, 0);
        assert_eq!(stats.average_stake, 0.0);
        assert_eq!(stats.success_rate, 0.0);
        assert_eq!(stats.roi, 0.0);
        assert_eq!(stats.net_profit, 0.0);
        assert!(stats.parlays.is_empty());
    }
}
