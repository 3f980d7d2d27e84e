//! Reduction of an already filtered, de-duplicated candidate set into
//! summary statistics.

use common::{ParlayDto, ParlayStatus, ReportStats};

/// Reduce `parlays` to summary statistics, echoing the records alongside.
///
/// Total over any finite input: every division is guarded, so an empty
/// candidate set (or one with zero total stake) yields zero-valued
/// statistics rather than an error. The input order is preserved in the
/// echoed `parlays`.
pub fn summarize(parlays: Vec<ParlayDto>) -> ReportStats {
    let total_parlays = parlays.len() as u64;
    let won_parlays = count_with_status(&parlays, ParlayStatus::Won);
    let lost_parlays = count_with_status(&parlays, ParlayStatus::Lost);
    let pending_parlays = count_with_status(&parlays, ParlayStatus::Pending);

    let total_staked: f64 = parlays.iter().map(|p| p.stake).sum();
    let average_stake = if total_parlays > 0 {
        total_staked / total_parlays as f64
    } else {
        0.0
    };

    // Only won parlays return anything; a missing payout counts as zero.
    let total_returned: f64 = parlays
        .iter()
        .filter(|p| p.status == ParlayStatus::Won)
        .map(|p| p.potential_payout.unwrap_or(0.0))
        .sum();
    let net_profit = total_returned - total_staked;

    let success_rate = if total_parlays > 0 {
        won_parlays as f64 / total_parlays as f64
    } else {
        0.0
    };
    let roi = if total_staked != 0.0 {
        net_profit / total_staked
    } else {
        0.0
    };

    ReportStats {
        total_parlays,
        won_parlays,
        lost_parlays,
        pending_parlays,
        success_rate,
        average_stake,
        total_staked,
        total_returned,
        net_profit,
        roi,
        parlays,
    }
}

fn count_with_status(parlays: &[ParlayDto], status: ParlayStatus) -> u64 {
    parlays.iter().filter(|p| p.status == status).count() as u64
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use common::ParlayDto;

    use super::*;

    fn parlay(id: i32, stake: f64, status: ParlayStatus, payout: Option<f64>) -> ParlayDto {
        ParlayDto {
            id,
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            stake,
            potential_payout: payout,
            sportsbook: None,
            status,
            notes: None,
            legs: vec![],
        }
    }

    #[test]
    fn empty_input_yields_all_zero_stats() {
        let stats = summarize(vec![]);

        assert_eq!(stats.total_parlays, 0);
        assert_eq!(stats.won_parlays, 0);
        assert_eq!(stats.lost_parlays, 0);
        assert_eq!(stats.pending_parlays, 0);
        assert_eq!(stats.total_staked, 0.0);
        assert_eq!(stats.average_stake, 0.0);
        assert_eq!(stats.total_returned, 0.0);
        assert_eq!(stats.net_profit, 0.0);
        assert_eq!(stats.success_rate, 0.0);
        assert_eq!(stats.roi, 0.0);
        assert!(stats.parlays.is_empty());
    }

    #[test]
    fn documented_arithmetic_scenario() {
        let stats = summarize(vec![
            parlay(1, 10.0, ParlayStatus::Won, Some(25.0)),
            parlay(2, 20.0, ParlayStatus::Lost, None),
            parlay(3, 30.0, ParlayStatus::Pending, None),
        ]);

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
    }

    #[test]
    fn status_counts_partition_the_input() {
        let stats = summarize(vec![
            parlay(1, 5.0, ParlayStatus::Won, Some(11.0)),
            parlay(2, 5.0, ParlayStatus::Won, Some(9.0)),
            parlay(3, 5.0, ParlayStatus::Lost, None),
            parlay(4, 5.0, ParlayStatus::Pending, None),
            parlay(5, 5.0, ParlayStatus::Pending, None),
        ]);

        assert_eq!(
            stats.won_parlays + stats.lost_parlays + stats.pending_parlays,
            stats.total_parlays
        );
    }

    #[test]
    fn roi_is_zero_when_nothing_was_staked() {
        // Net profit is positive here, but a zero denominator still yields
        // roi = 0 rather than infinity.
        let stats = summarize(vec![
            parlay(1, 0.0, ParlayStatus::Won, Some(50.0)),
            parlay(2, 0.0, ParlayStatus::Lost, None),
        ]);

        assert_eq!(stats.total_staked, 0.0);
        assert_eq!(stats.net_profit, 50.0);
        assert_eq!(stats.roi, 0.0);
        assert_eq!(stats.average_stake, 0.0);
    }

    #[test]
    fn only_won_parlays_contribute_to_returns() {
        // Lost and pending parlays contribute nothing even when a payout
        // value is recorded; a won parlay without one counts as zero.
        let stats = summarize(vec![
            parlay(1, 10.0, ParlayStatus::Won, None),
            parlay(2, 10.0, ParlayStatus::Lost, Some(80.0)),
            parlay(3, 10.0, ParlayStatus::Pending, Some(120.0)),
        ]);

        assert_eq!(stats.total_returned, 0.0);
        assert_eq!(stats.net_profit, -30.0);
    }

    #[test]
    fn input_order_is_preserved_in_the_echo() {
        let stats = summarize(vec![
            parlay(9, 1.0, ParlayStatus::Pending, None),
            parlay(4, 1.0, ParlayStatus::Pending, None),
            parlay(7, 1.0, ParlayStatus::Pending, None),
        ]);

        let ids: Vec<i32> = stats.parlays.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![9, 4, 7]);
    }
}
