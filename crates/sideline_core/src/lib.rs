//! # sideline_core - Rotation planning and live game-clock engine
//!
//! Scheduling core for a youth-sports coaching app: builds fair,
//! fixed-length substitution rotations for a roster and keeps a live game
//! clock, substitution countdown and rotation index consistent through
//! pause/resume, quarter changes and background resyncs.
//!
//! ## Features
//! - Fair rotation plans: every player gets the same share of field time
//! - Poll-driven clock engine with typed events (no callback wiring)
//! - Whole-session resync after the app was backgrounded
//! - JSON API for the host app's persistence and rendering layers

pub mod api;
pub mod engine;
pub mod error;
pub mod live_activity;
pub mod models;
pub mod planner;
pub mod roster;

// Re-export the main API surface
pub use api::{build_plan_json, PlanRequest, PlanResponse};
pub use engine::{
    ClockEngine, ClockEvent, ClockStatus, GameSessionCoordinator, PeriodStopwatch,
    SessionSnapshot, SubstitutionTracker,
};
pub use error::{CoreError, Result};
pub use live_activity::{
    LiveActivityContent, LiveActivityError, LiveActivityNotifier, NoopNotifier,
};
pub use models::{GameConfig, Player, Segment, SubstitutionPlan, SubstitutionStyle, TintColor};
pub use planner::{build_plan, build_plan_for_config};
pub use roster::{InMemoryRoster, RosterProvider};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    /// End-to-end: roster provider -> config -> session -> a full game.
    #[test]
    fn test_full_session_from_roster_provider() {
        let mut roster = InMemoryRoster::new();
        let team_id = roster.add_team(
            ["Ana", "Ben", "Cleo", "Dev", "Eli", "Fern", "Gus", "Hana", "Iris"]
                .into_iter()
                .map(Player::new)
                .collect(),
        );
        let config =
            GameConfig::for_team(&roster, team_id, 4, 4, 10, SubstitutionStyle::Short);
        let mut session = GameSessionCoordinator::new(config);

        let mut substitutions = 0;
        for _ in 0..4 {
            session.toggle_play_pause();
            let mut last_group = session.current_players().to_vec();
            for second in 1..=600 {
                let snapshot = session.poll_at(second);
                if snapshot.current_players != last_group {
                    substitutions += 1;
                    last_group = snapshot.current_players;
                }
            }
        }

        assert!(session.is_game_over());
        assert_eq!(substitutions, 16);
    }
}
