//! Substitution tracker.
//!
//! Maps total elapsed game time onto the active segment of a fixed
//! `SubstitutionPlan` and answers the who-is-where queries. The only
//! observable state change is `current_index`; the tracker holds no
//! callbacks, the session coordinator reads the index after driving it.

use uuid::Uuid;

use crate::models::{Player, Segment, SubstitutionPlan};

#[derive(Debug, Clone)]
pub struct SubstitutionTracker {
    plan: SubstitutionPlan,
    current_index: usize,
}

impl SubstitutionTracker {
    pub fn new(plan: SubstitutionPlan) -> Self {
        Self { plan, current_index: 0 }
    }

    pub fn plan(&self) -> &SubstitutionPlan {
        &self.plan
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Segment whose window contains `time`, None before the first segment
    /// or past the end of the plan. Scans from the back: should windows ever
    /// overlap through an editing race, the last match is canonical.
    pub fn segment_at(&self, time: f64) -> Option<&Segment> {
        self.plan.segments.iter().rev().find(|segment| segment.contains(time))
    }

    /// First segment starting strictly after `time`, None at end of plan.
    pub fn next_segment_after(&self, time: f64) -> Option<&Segment> {
        self.plan.segments.iter().find(|segment| segment.on_time > time)
    }

    /// Recompute the index from a point in time. Returns whether the index
    /// actually moved, so callers can skip redundant notifications.
    pub fn update(&mut self, time: f64) -> bool {
        let Some(index) =
            self.plan.segments.iter().rposition(|segment| segment.contains(time))
        else {
            return false;
        };
        if index == self.current_index {
            return false;
        }
        self.current_index = index;
        true
    }

    /// Move to the next segment. Clamped at the end of the plan: no wrap,
    /// `next_players` just turns empty when there is nothing left to rotate.
    pub fn advance(&mut self) {
        if self.current_index + 1 < self.plan.segments.len() {
            self.current_index += 1;
        }
    }

    /// Jump the index to an arbitrary total elapsed time, clamped to the
    /// plan. No-op for an empty plan.
    pub fn resync(&mut self, total_elapsed_secs: f64) {
        if self.plan.is_empty() || self.plan.sub_duration <= 0.0 {
            return;
        }
        let raw = (total_elapsed_secs.max(0.0) / self.plan.sub_duration).floor() as usize;
        self.current_index = raw.min(self.plan.segments.len() - 1);
    }

    // =========================================================================
    // Derived queries
    // =========================================================================

    pub fn current_segment(&self) -> Option<&Segment> {
        self.plan.segments.get(self.current_index)
    }

    pub fn next_segment(&self) -> Option<&Segment> {
        self.plan.segments.get(self.current_index + 1)
    }

    pub fn current_players(&self) -> &[Player] {
        self.current_segment().map_or(&[], |segment| segment.players.as_slice())
    }

    pub fn next_players(&self) -> &[Player] {
        self.next_segment().map_or(&[], |segment| segment.players.as_slice())
    }

    /// Everyone in the roster who is neither on the field now nor up next,
    /// in roster order.
    pub fn bench_players(&self) -> Vec<Player> {
        let active: Vec<Uuid> = self
            .current_players()
            .iter()
            .chain(self.next_players())
            .map(|player| player.id)
            .collect();
        self.plan
            .available_players
            .iter()
            .filter(|player| !active.contains(&player.id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubstitutionStyle;
    use crate::planner::build_plan;

    fn roster(n: usize) -> Vec<Player> {
        (0..n).map(|i| Player::new(format!("Player {i}"))).collect()
    }

    fn nine_player_tracker() -> SubstitutionTracker {
        // 18 segments of 133.33s over 2400s.
        SubstitutionTracker::new(build_plan(&roster(9), 4, 10, 4, SubstitutionStyle::Short))
    }

    #[test]
    fn test_segment_at_windows() {
        let tracker = nine_player_tracker();
        assert_eq!(tracker.segment_at(0.0).unwrap().on_time, 0.0);
        assert!(tracker.segment_at(140.0).unwrap().contains(140.0));
        assert!(tracker.segment_at(-1.0).is_none());
        assert!(tracker.segment_at(2400.0).is_none());
        assert!(tracker.segment_at(99_999.0).is_none());
    }

    #[test]
    fn test_next_segment_after() {
        let tracker = nine_player_tracker();
        let sub_duration = tracker.plan().sub_duration;
        let next = tracker.next_segment_after(0.0).unwrap();
        assert_eq!(next.on_time, sub_duration);
        assert!(tracker.next_segment_after(2400.0).is_none());
    }

    #[test]
    fn test_update_reports_change_only_once() {
        let mut tracker = nine_player_tracker();
        assert!(!tracker.update(10.0)); // still in segment 0
        assert!(tracker.update(140.0)); // into segment 1
        assert_eq!(tracker.current_index(), 1);
        assert!(!tracker.update(141.0)); // same segment, no change
    }

    #[test]
    fn test_advance_clamps_at_end() {
        let mut tracker = nine_player_tracker();
        for _ in 0..50 {
            tracker.advance();
        }
        assert_eq!(tracker.current_index(), 17);
        assert!(tracker.next_players().is_empty());
        assert!(!tracker.current_players().is_empty());
    }

    #[test]
    fn test_resync_floor_and_clamp() {
        let mut tracker = nine_player_tracker();
        let sub_duration = tracker.plan().sub_duration;

        tracker.resync(sub_duration * 5.5);
        assert_eq!(tracker.current_index(), 5);

        tracker.resync(-10.0);
        assert_eq!(tracker.current_index(), 0);

        tracker.resync(1e9);
        assert_eq!(tracker.current_index(), 17);
    }

    #[test]
    fn test_resync_on_empty_and_single_segment_plans() {
        let mut empty = SubstitutionTracker::new(SubstitutionPlan::empty());
        empty.resync(500.0);
        assert_eq!(empty.current_index(), 0);
        assert!(empty.current_players().is_empty());
        assert!(empty.next_players().is_empty());
        assert!(empty.bench_players().is_empty());

        let mut single =
            SubstitutionTracker::new(build_plan(&roster(3), 4, 10, 4, SubstitutionStyle::Long));
        single.resync(99_999.0);
        assert_eq!(single.current_index(), 0);
        assert_eq!(single.current_players().len(), 3);
        assert!(single.next_players().is_empty());
    }

    #[test]
    fn test_bench_is_roster_minus_current_and_next_in_order() {
        let tracker = nine_player_tracker();
        // Segment 0 = players 0..4, segment 1 = players 4..8; bench = player 8.
        let bench = tracker.bench_players();
        assert_eq!(bench.len(), 1);
        assert_eq!(bench[0].name, "Player 8");

        let mut tracker = tracker;
        tracker.advance();
        // Current 4..8, next 8,0,1,2 -> bench 3.
        let bench: Vec<String> =
            tracker.bench_players().into_iter().map(|p| p.name).collect();
        assert_eq!(bench, ["Player 3"]);
    }
}
