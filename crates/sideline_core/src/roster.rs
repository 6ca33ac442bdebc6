//! Roster access seam.
//!
//! Whatever constructs game sessions injects a `RosterProvider`; the
//! scheduling core itself never reaches into a shared store, it only ever
//! receives `Player` data as parameters.

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::Player;

pub trait RosterProvider {
    /// Ordered roster for a team; empty when the team is unknown.
    fn players_for(&self, team_id: Uuid) -> Vec<Player>;
}

/// Map-backed roster, enough for tests and the CLI driver. The real app
/// plugs its persistence layer in behind the same trait.
#[derive(Debug, Default)]
pub struct InMemoryRoster {
    teams: HashMap<Uuid, Vec<Player>>,
}

impl InMemoryRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a team roster, returning the generated team id.
    pub fn add_team(&mut self, players: Vec<Player>) -> Uuid {
        let team_id = Uuid::new_v4();
        self.teams.insert(team_id, players);
        team_id
    }
}

impl RosterProvider for InMemoryRoster {
    fn players_for(&self, team_id: Uuid) -> Vec<Player> {
        self.teams.get(&team_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GameConfig, SubstitutionStyle};

    #[test]
    fn test_unknown_team_yields_empty_roster() {
        let roster = InMemoryRoster::new();
        assert!(roster.players_for(Uuid::new_v4()).is_empty());
    }

    #[test]
    fn test_config_built_from_provider() {
        let mut roster = InMemoryRoster::new();
        let team_id =
            roster.add_team(vec![Player::new("Ana"), Player::new("Ben"), Player::new("Cleo")]);

        let config = GameConfig::for_team(&roster, team_id, 2, 4, 10, SubstitutionStyle::Short);
        assert_eq!(config.players.len(), 3);
        assert_eq!(config.players[0].name, "Ana");
    }
}
