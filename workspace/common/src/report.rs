use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Settlement state of a whole parlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ParlayStatus {
    Won,
    Lost,
    Pending,
}

/// Outcome of a single leg. A push is void and stake-neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LegResult {
    Won,
    Lost,
    Push,
    Pending,
}

/// Whether a leg is a team proposition or a player proposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LegType {
    Team,
    Player,
}

/// One proposition within a parlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParlayLegDto {
    pub id: i32,
    pub leg_type: LegType,
    pub team_id: Option<i32>,
    pub player_id: Option<i32>,
    /// Market name, e.g. "Points" or "Moneyline".
    pub market: String,
    /// Selection within the market, e.g. "Over 24.5".
    pub selection: String,
    /// American odds, e.g. -110 or +250.
    pub odds: Option<i32>,
    pub result: LegResult,
}

/// A parlay with its legs, as served on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParlayDto {
    pub id: i32,
    pub date: NaiveDate,
    pub stake: f64,
    /// Payout if the parlay wins. Counted into `total_returned` only for
    /// won parlays.
    pub potential_payout: Option<f64>,
    pub sportsbook: Option<String>,
    pub status: ParlayStatus,
    pub notes: Option<String>,
    pub legs: Vec<ParlayLegDto>,
}

/// Optional criteria for selecting a slice of the parlay ledger.
///
/// Every field defaults to "no constraint"; provided fields compose with
/// AND. `team_ids` / `player_ids` match a parlay when any of its legs
/// references one of the given ids. An empty id list is treated the same as
/// an absent one: no constraint is applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ReportFilters {
    /// Inclusive lower bound on the parlay date.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the parlay date.
    pub end_date: Option<NaiveDate>,
    pub status: Option<ParlayStatus>,
    /// Inclusive lower bound on the stake.
    pub min_stake: Option<f64>,
    /// Inclusive upper bound on the stake.
    pub max_stake: Option<f64>,
    pub team_ids: Option<Vec<i32>>,
    pub player_ids: Option<Vec<i32>>,
}

impl ReportFilters {
    /// The effective team constraint, or `None` when the field is absent or
    /// the list is empty.
    pub fn team_constraint(&self) -> Option<&[i32]> {
        self.team_ids.as_deref().filter(|ids| !ids.is_empty())
    }

    /// The effective player constraint, or `None` when the field is absent
    /// or the list is empty.
    pub fn player_constraint(&self) -> Option<&[i32]> {
        self.player_ids.as_deref().filter(|ids| !ids.is_empty())
    }

    /// Whether any leg-level constraint is active. When true, the filter
    /// query joins on legs and must de-duplicate parlay rows.
    pub fn touches_legs(&self) -> bool {
        self.team_constraint().is_some() || self.player_constraint().is_some()
    }
}

/// Summary statistics over a filtered slice of the ledger, together with
/// the matching parlays for client-side display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReportStats {
    pub total_parlays: u64,
    pub won_parlays: u64,
    pub lost_parlays: u64,
    pub pending_parlays: u64,
    /// `won_parlays / total_parlays`, 0 for an empty slice.
    pub success_rate: f64,
    /// `total_staked / total_parlays`, 0 for an empty slice.
    pub average_stake: f64,
    pub total_staked: f64,
    /// Sum of `potential_payout` over won parlays only.
    pub total_returned: f64,
    /// `total_returned - total_staked`.
    pub net_profit: f64,
    /// `net_profit / total_staked`, 0 when nothing was staked.
    pub roi: f64,
    pub parlays: Vec<ParlayDto>,
}
