//! Substitution plan data model.
//!
//! A plan is built wholesale by the planner whenever the game's parameters or
//! roster change and is never patched in place afterwards.

use serde::{Deserialize, Serialize};

use super::Player;

/// One fixed-size slice of total game time with a fixed on-field group.
///
/// Times are seconds from game start across all periods. Segments in a plan
/// are contiguous and non-overlapping: `off_time(i) == on_time(i+1)` and the
/// sequence covers `[0, total_game_seconds)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    pub players: Vec<Player>,
    pub on_time: f64,
    pub off_time: f64,
}

impl Segment {
    /// Whether `time` falls inside this segment's half-open window.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.on_time && time < self.off_time
    }
}

/// Immutable output of the rotation planner.
///
/// Invariants:
/// - zero segments and `sub_duration == 0` for an empty roster;
/// - exactly one segment spanning the whole game when everyone fits on the
///   field at once (`available_players.len() <= players_on_field`);
/// - otherwise `segments.len()` is a multiple of the roster size and every
///   segment is `sub_duration` seconds long.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubstitutionPlan {
    /// Seconds per segment; real-valued, the game length rarely divides
    /// evenly by the segment count.
    pub sub_duration: f64,
    pub segments: Vec<Segment>,
    /// Full roster considered when the plan was built, in roster order.
    pub available_players: Vec<Player>,
}

impl SubstitutionPlan {
    /// Plan for an empty roster: nothing to rotate, nothing to count down.
    pub fn empty() -> Self {
        Self { sub_duration: 0.0, segments: Vec::new(), available_players: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True when the plan actually rotates players (more than one segment).
    pub fn has_rotation(&self) -> bool {
        self.segments.len() > 1
    }

    /// Total seconds covered by the plan (0 for an empty plan).
    pub fn total_seconds(&self) -> f64 {
        self.segments.last().map_or(0.0, |segment| segment.off_time)
    }
}
