//! Ranking Engine
//!
//! Pure transformation from the raw per-user statistics of a snapshot into
//! an ordered, tie-broken leaderboard. No side effects; recomputed whenever
//! a new snapshot arrives.

use std::collections::HashMap;

use crate::model::{Problem, UserStat};

/// A user's statistics enriched with the computed weekly delta and an
/// assigned position. Derived per snapshot, never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedEntry {
    pub username: String,
    pub total_solved: u32,
    pub weekly_baseline: u32,
    pub history: Vec<Problem>,
    /// Problems solved since the week started, clamped at zero.
    pub weekly_solved: u32,
    /// 1-based position in sorted order. No shared ranks on ties.
    pub rank: u32,
}

/// Rank all users for the current week.
///
/// Weekly progress is `total_solved - weekly_baseline`, clamped at zero
/// because an upstream reset can leave a baseline above the current total.
/// Order is descending weekly progress, ties broken by descending total
/// solved, then by username so the result is deterministic. Ranks are
/// 1-based positions in that order.
pub fn rank_users(users: &HashMap<String, UserStat>) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = users
        .iter()
        .map(|(username, stat)| RankedEntry {
            username: username.clone(),
            total_solved: stat.total_solved,
            weekly_baseline: stat.weekly_baseline,
            history: stat.history.clone(),
            weekly_solved: stat.total_solved.saturating_sub(stat.weekly_baseline),
            rank: 0,
        })
        .collect();

    entries.sort_by(|a, b| {
        b.weekly_solved
            .cmp(&a.weekly_solved)
            .then(b.total_solved.cmp(&a.total_solved))
            .then_with(|| a.username.cmp(&b.username))
    });

    for (position, entry) in entries.iter_mut().enumerate() {
        entry.rank = (position + 1) as u32;
    }

    entries
}

/// Visual tier for a rank position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankTier {
    Gold,
    Silver,
    Bronze,
    Plain,
}

/// Map a 1-based rank to its podium tier.
pub fn rank_tier(rank: u32) -> RankTier {
    match rank {
        1 => RankTier::Gold,
        2 => RankTier::Silver,
        3 => RankTier::Bronze,
        _ => RankTier::Plain,
    }
}

impl RankTier {
    /// Badge classes for the rank marker.
    pub fn class(self) -> &'static str {
        match self {
            RankTier::Gold => "bg-yellow-500/20 text-yellow-500",
            RankTier::Silver => "bg-gray-400/20 text-gray-400",
            RankTier::Bronze => "bg-orange-700/20 text-orange-600",
            RankTier::Plain => "text-gray-500",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(total_solved: u32, weekly_baseline: u32) -> UserStat {
        UserStat {
            total_solved,
            weekly_baseline,
            history: Vec::new(),
        }
    }

    fn users(entries: &[(&str, u32, u32)]) -> HashMap<String, UserStat> {
        entries
            .iter()
            .map(|&(name, total, baseline)| (name.to_string(), stat(total, baseline)))
            .collect()
    }

    #[test]
    fn test_weekly_delta_and_order() {
        let input = users(&[("alice", 50, 40), ("bob", 30, 30)]);
        let ranked = rank_users(&input);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].username, "alice");
        assert_eq!(ranked[0].weekly_solved, 10);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].username, "bob");
        assert_eq!(ranked[1].weekly_solved, 0);
        assert_eq!(ranked[1].rank, 2);
    }

    #[test]
    fn test_negative_delta_clamped() {
        let input = users(&[("carol", 10, 20)]);
        let ranked = rank_users(&input);

        assert_eq!(ranked[0].weekly_solved, 0);
    }

    #[test]
    fn test_tie_broken_by_total_solved() {
        let input = users(&[("dave", 100, 90), ("erin", 95, 85)]);
        let ranked = rank_users(&input);

        assert_eq!(ranked[0].weekly_solved, 10);
        assert_eq!(ranked[1].weekly_solved, 10);
        assert_eq!(ranked[0].username, "dave");
        assert_eq!(ranked[1].username, "erin");
    }

    #[test]
    fn test_full_tie_ordered_by_username() {
        let input = users(&[("zoe", 40, 30), ("amy", 40, 30)]);
        let ranked = rank_users(&input);

        assert_eq!(ranked[0].username, "amy");
        assert_eq!(ranked[1].username, "zoe");
    }

    #[test]
    fn test_ranks_are_dense_positions() {
        let input = users(&[
            ("a", 10, 0),
            ("b", 10, 0),
            ("c", 10, 0),
            ("d", 5, 0),
        ]);
        let ranked = rank_users(&input);

        let ranks: Vec<u32> = ranked.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sort_order_property() {
        let input = users(&[
            ("a", 120, 100),
            ("b", 80, 70),
            ("c", 200, 180),
            ("d", 60, 60),
            ("e", 90, 95),
        ]);
        let ranked = rank_users(&input);

        assert_eq!(ranked.len(), input.len());
        for entry in &ranked {
            assert_eq!(
                entry.weekly_solved,
                entry.total_solved.saturating_sub(entry.weekly_baseline)
            );
        }
        for pair in ranked.windows(2) {
            let better = pair[0].weekly_solved > pair[1].weekly_solved;
            let tied = pair[0].weekly_solved == pair[1].weekly_solved
                && pair[0].total_solved >= pair[1].total_solved;
            assert!(better || tied);
        }
    }

    #[test]
    fn test_idempotent_on_same_snapshot() {
        let input = users(&[("dave", 100, 90), ("erin", 95, 85), ("carol", 10, 20)]);
        assert_eq!(rank_users(&input), rank_users(&input));
    }

    #[test]
    fn test_empty_input_empty_output() {
        assert!(rank_users(&HashMap::new()).is_empty());
    }

    #[test]
    fn test_history_carried_through() {
        let mut input = users(&[("alice", 50, 40)]);
        input.get_mut("alice").unwrap().history.push(Problem {
            id: "1".to_string(),
            title: "Two Sum".to_string(),
            title_slug: "two-sum".to_string(),
            timestamp: 1_756_700_000,
        });

        let ranked = rank_users(&input);
        assert_eq!(ranked[0].history.len(), 1);
        assert_eq!(ranked[0].history[0].title, "Two Sum");
    }

    #[test]
    fn test_rank_tiers() {
        assert_eq!(rank_tier(1), RankTier::Gold);
        assert_eq!(rank_tier(2), RankTier::Silver);
        assert_eq!(rank_tier(3), RankTier::Bronze);
        assert_eq!(rank_tier(4), RankTier::Plain);
        assert_eq!(rank_tier(100), RankTier::Plain);
    }
}
