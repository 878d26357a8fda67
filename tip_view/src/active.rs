//! Reconstruction of which tips are still covered by the contract balance.

use crate::Balance;
use tip_jar::Tip;

/// Tips prepared for display: the full history sorted newest-first, and the
/// prefix of it still covered by the contract balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipFeed {
    pub all: Vec<Tip>,
    pub active: Vec<Tip>,
}

/// Sort tips newest-first and greedily mark the prefix whose cumulative
/// amount fits within `balance` as active.
///
/// Strict prefix semantics: accumulation stops at the first tip that would
/// exceed the balance, without skipping ahead to smaller ones. The result is
/// a display heuristic only; it carries no authoritative meaning and can
/// misrepresent history if the chain moves between the two reads that feed
/// it (tip list and balance).
pub fn reconcile(mut tips: Vec<Tip>, balance: Balance) -> TipFeed {
    // Stable sort: tips sharing a timestamp keep their input order.
    tips.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let mut active = Vec::new();
    let mut covered: Balance = 0;
    for tip in &tips {
        match covered.checked_add(tip.amount) {
            Some(total) if total <= balance => {
                covered = total;
                active.push(tip.clone());
            }
            _ => break,
        }
    }

    TipFeed { all: tips, active }
}

// =========================================================================
// UNIT TESTS
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ink::primitives::AccountId;

    fn tip(timestamp: u64, amount: Balance) -> Tip {
        Tip {
            tipper: AccountId::from([0x01; 32]),
            message: String::new(),
            timestamp,
            amount,
        }
    }

    #[test]
    fn empty_history_is_empty_for_any_balance() {
        let feed = reconcile(Vec::new(), 0);
        assert!(feed.all.is_empty());
        assert!(feed.active.is_empty());

        let feed = reconcile(Vec::new(), u128::MAX);
        assert!(feed.active.is_empty());
    }

    #[test]
    fn full_balance_keeps_all_tips_sorted_newest_first() {
        let feed = reconcile(vec![tip(1, 10), tip(3, 30), tip(2, 20)], 60);

        let timestamps: Vec<u64> = feed.all.iter().map(|t| t.timestamp).collect();
        assert_eq!(timestamps, vec![3, 2, 1]);
        assert_eq!(feed.active, feed.all);
    }

    #[test]
    fn stops_at_first_tip_exceeding_balance() {
        // Newest tip (t=2, amt=5) fits; the older one (t=1, amt=10) would
        // push the total past 5 and is dropped.
        let feed = reconcile(vec![tip(2, 5), tip(1, 10)], 5);

        assert_eq!(feed.active.len(), 1);
        assert_eq!(feed.active[0].timestamp, 2);
        assert_eq!(feed.all.len(), 2);
    }

    #[test]
    fn does_not_skip_past_an_oversized_tip() {
        // t=2 would overflow the remaining balance; t=1 would fit but the
        // scan must not reach it.
        let feed = reconcile(vec![tip(3, 5), tip(2, 100), tip(1, 1)], 10);

        assert_eq!(feed.active.len(), 1);
        assert_eq!(feed.active[0].timestamp, 3);
    }

    #[test]
    fn exact_balance_is_inclusive() {
        let feed = reconcile(vec![tip(2, 5), tip(1, 5)], 10);
        assert_eq!(feed.active.len(), 2);
    }

    #[test]
    fn timestamp_ties_keep_input_order() {
        let mut a = tip(7, 1);
        a.message = "first".into();
        let mut b = tip(7, 2);
        b.message = "second".into();

        let feed = reconcile(vec![a, b], 100);
        assert_eq!(feed.all[0].message, "first");
        assert_eq!(feed.all[1].message, "second");
    }

    #[test]
    fn zero_balance_activates_nothing() {
        let feed = reconcile(vec![tip(1, 1)], 0);
        assert!(feed.active.is_empty());
        assert_eq!(feed.all.len(), 1);
    }
}
