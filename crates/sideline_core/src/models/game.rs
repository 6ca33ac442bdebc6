use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Player;
use crate::roster::RosterProvider;

/// How often the rotation cycles through the roster.
///
/// `Long` gives every player one block per game, `Short` gives two shorter
/// blocks. Kept as a two-valued enum; the multiplier lives here so a
/// finer-grained style can be added without touching the planner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubstitutionStyle {
    #[default]
    Long,
    Short,
}

impl SubstitutionStyle {
    /// Number of segments each player appears in over a full game.
    pub fn rotations_per_player(&self) -> usize {
        match self {
            SubstitutionStyle::Long => 1,
            SubstitutionStyle::Short => 2,
        }
    }
}

/// Rules for one scheduled game.
///
/// Period length is entered in minutes (that is what coaches type in); the
/// core converts to seconds once via `period_length_seconds`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameConfig {
    pub players_on_field: usize,
    pub number_of_periods: u32,
    pub period_length_minutes: u32,
    #[serde(default)]
    pub style: SubstitutionStyle,
    pub players: Vec<Player>,
}

impl GameConfig {
    /// Build a config from an injected roster source instead of an ambient
    /// store; the core never looks players up on its own.
    pub fn for_team(
        roster: &dyn RosterProvider,
        team_id: Uuid,
        players_on_field: usize,
        number_of_periods: u32,
        period_length_minutes: u32,
        style: SubstitutionStyle,
    ) -> Self {
        Self {
            players_on_field,
            number_of_periods,
            period_length_minutes,
            style,
            players: roster.players_for(team_id),
        }
    }

    pub fn period_length_seconds(&self) -> u32 {
        self.period_length_minutes * 60
    }

    pub fn total_game_seconds(&self) -> u32 {
        self.period_length_seconds() * self.number_of_periods
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_multiplier() {
        assert_eq!(SubstitutionStyle::Long.rotations_per_player(), 1);
        assert_eq!(SubstitutionStyle::Short.rotations_per_player(), 2);
    }

    #[test]
    fn test_total_game_seconds() {
        let config = GameConfig {
            players_on_field: 4,
            number_of_periods: 4,
            period_length_minutes: 10,
            style: SubstitutionStyle::Short,
            players: Vec::new(),
        };
        assert_eq!(config.period_length_seconds(), 600);
        assert_eq!(config.total_game_seconds(), 2400);
    }

    #[test]
    fn test_style_defaults_to_long_on_deserialization() {
        let json = r#"{
            "players_on_field": 5,
            "number_of_periods": 2,
            "period_length_minutes": 20,
            "players": []
        }"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.style, SubstitutionStyle::Long);
    }
}
