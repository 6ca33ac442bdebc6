//! Rotation planner.
//!
//! Pure function from roster + game format to a `SubstitutionPlan`. The
//! planner picks the segment count as a multiple of the roster size so every
//! player appears in the same number of segments regardless of how many fit
//! on the field, and walks a circular index so each player's appearances are
//! spread across the game rather than clustered.

use crate::models::{GameConfig, Player, Segment, SubstitutionPlan, SubstitutionStyle};

/// Build the substitution plan for one game.
///
/// Degenerate inputs never fail: an empty roster yields a zero-segment plan
/// and a roster that fits on the field yields a single whole-game segment.
/// Callers must handle the zero-segment case explicitly.
pub fn build_plan(
    players: &[Player],
    players_on_field: usize,
    period_length_minutes: u32,
    number_of_periods: u32,
    style: SubstitutionStyle,
) -> SubstitutionPlan {
    if players.is_empty() {
        return SubstitutionPlan::empty();
    }

    let total_game_seconds = f64::from(period_length_minutes * number_of_periods * 60);

    // Everyone fits on the field at once: one segment, no rotation.
    if players.len() <= players_on_field {
        return SubstitutionPlan {
            sub_duration: total_game_seconds,
            segments: vec![Segment {
                players: players.to_vec(),
                on_time: 0.0,
                off_time: total_game_seconds,
            }],
            available_players: players.to_vec(),
        };
    }

    let total_segments = players.len() * style.rotations_per_player();
    let sub_duration = total_game_seconds / total_segments as f64;

    let mut segments = Vec::with_capacity(total_segments);
    let mut index = 0usize;
    for k in 0..total_segments {
        let group: Vec<Player> = (0..players_on_field)
            .map(|offset| players[(index + offset) % players.len()].clone())
            .collect();

        // Boundaries as fractions of the whole game so adjacent segments
        // share the exact same f64 value and the last one lands on the end.
        segments.push(Segment {
            players: group,
            on_time: total_game_seconds * k as f64 / total_segments as f64,
            off_time: total_game_seconds * (k + 1) as f64 / total_segments as f64,
        });

        index = (index + players_on_field) % players.len();
    }

    SubstitutionPlan { sub_duration, segments, available_players: players.to_vec() }
}

/// Convenience wrapper taking the whole `GameConfig`.
pub fn build_plan_for_config(config: &GameConfig) -> SubstitutionPlan {
    build_plan(
        &config.players,
        config.players_on_field,
        config.period_length_minutes,
        config.number_of_periods,
        config.style,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;
    use uuid::Uuid;

    fn roster(n: usize) -> Vec<Player> {
        (0..n).map(|i| Player::new(format!("Player {i}"))).collect()
    }

    #[test]
    fn test_empty_roster_yields_empty_plan() {
        let plan = build_plan(&[], 4, 10, 4, SubstitutionStyle::Short);
        assert!(plan.is_empty());
        assert_eq!(plan.sub_duration, 0.0);
    }

    #[test]
    fn test_small_roster_yields_single_whole_game_segment() {
        // 3 players, 4 on the field: no rotation possible.
        let players = roster(3);
        let plan = build_plan(&players, 4, 10, 4, SubstitutionStyle::Short);

        assert_eq!(plan.segments.len(), 1);
        assert_eq!(plan.sub_duration, 2400.0);
        assert_eq!(plan.segments[0].on_time, 0.0);
        assert_eq!(plan.segments[0].off_time, 2400.0);
        assert_eq!(plan.segments[0].players, players);
    }

    #[test]
    fn test_nine_player_short_style_walk() {
        // 9 players, 4 on field, 4x10min, short style:
        // 18 segments of 2400/18 seconds, walk advances by 4 each segment.
        let players = roster(9);
        let plan = build_plan(&players, 4, 10, 4, SubstitutionStyle::Short);

        assert_eq!(plan.segments.len(), 18);
        assert!((plan.sub_duration - 2400.0 / 18.0).abs() < 1e-9);

        let names =
            |k: usize| plan.segments[k].players.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names(0), ["Player 0", "Player 1", "Player 2", "Player 3"]);
        assert_eq!(names(1), ["Player 4", "Player 5", "Player 6", "Player 7"]);
        assert_eq!(names(2), ["Player 8", "Player 0", "Player 1", "Player 2"]);
        // After 9 segments the index has advanced 36 = 0 mod 9: second lap
        // repeats the first.
        assert_eq!(names(9), names(0));
    }

    #[test]
    fn test_partition_is_contiguous_and_covers_game() {
        let players = roster(9);
        let plan = build_plan(&players, 4, 10, 4, SubstitutionStyle::Short);

        assert_eq!(plan.segments[0].on_time, 0.0);
        assert_eq!(plan.segments.last().unwrap().off_time, 2400.0);
        for pair in plan.segments.windows(2) {
            assert_eq!(pair[0].off_time, pair[1].on_time);
        }
    }

    #[test]
    fn test_every_player_appears_rotations_per_player_times() {
        for (style, expected) in
            [(SubstitutionStyle::Long, 4usize), (SubstitutionStyle::Short, 8usize)]
        {
            let players = roster(9);
            let plan = build_plan(&players, 4, 10, 4, style);

            let mut appearances: HashMap<Uuid, usize> = HashMap::new();
            for segment in &plan.segments {
                for player in &segment.players {
                    *appearances.entry(player.id).or_default() += 1;
                }
            }
            // Each player fills `players_on_field` slots per lap of the walk.
            for player in &players {
                assert_eq!(appearances[&player.id], expected, "style {style:?}");
            }
        }
    }

    #[test]
    fn test_segment_groups_never_duplicate_a_player() {
        // The circular walk cannot repeat a player inside one group as long
        // as the group is smaller than the roster; this pins that down for
        // awkward roster sizes that do not divide evenly.
        for n in 5..=11usize {
            for on_field in 1..n {
                let players = roster(n);
                let plan = build_plan(&players, on_field, 10, 2, SubstitutionStyle::Short);
                for segment in &plan.segments {
                    let mut ids: Vec<Uuid> = segment.players.iter().map(|p| p.id).collect();
                    ids.sort();
                    ids.dedup();
                    assert_eq!(ids.len(), segment.players.len(), "n={n} on_field={on_field}");
                }
            }
        }
    }

    proptest! {
        #[test]
        fn prop_partition_invariants(
            n in 1usize..16,
            on_field in 1usize..8,
            minutes in 1u32..30,
            periods in 1u32..5,
            short in any::<bool>(),
        ) {
            let style =
                if short { SubstitutionStyle::Short } else { SubstitutionStyle::Long };
            let players = roster(n);
            let plan = build_plan(&players, on_field, minutes, periods, style);
            let total = f64::from(minutes * periods * 60);

            prop_assert!(!plan.segments.is_empty());
            prop_assert_eq!(plan.segments[0].on_time, 0.0);
            prop_assert_eq!(plan.segments.last().unwrap().off_time, total);
            for pair in plan.segments.windows(2) {
                prop_assert_eq!(pair[0].off_time, pair[1].on_time);
            }

            if n <= on_field {
                prop_assert_eq!(plan.segments.len(), 1);
                prop_assert_eq!(plan.sub_duration, total);
            } else {
                prop_assert_eq!(plan.segments.len(), n * style.rotations_per_player());
                for segment in &plan.segments {
                    prop_assert_eq!(segment.players.len(), on_field);
                    let width = segment.off_time - segment.on_time;
                    prop_assert!((width - plan.sub_duration).abs() < 1e-6);
                }
            }
        }

        #[test]
        fn prop_fairness_every_player_equal_share(
            n in 2usize..16,
            on_field in 1usize..8,
            short in any::<bool>(),
        ) {
            prop_assume!(n > on_field);
            let style =
                if short { SubstitutionStyle::Short } else { SubstitutionStyle::Long };
            let players = roster(n);
            let plan = build_plan(&players, on_field, 10, 4, style);

            let mut appearances: HashMap<Uuid, usize> = HashMap::new();
            for segment in &plan.segments {
                for player in &segment.players {
                    *appearances.entry(player.id).or_default() += 1;
                }
            }
            let expected = on_field * style.rotations_per_player();
            for player in &players {
                prop_assert_eq!(appearances[&player.id], expected);
            }
        }
    }
}
