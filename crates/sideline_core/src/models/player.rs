use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Roster entry as the surrounding app hands it to the core.
///
/// Identity is the opaque `id`; name and tint are display-only and owned by
/// roster management. Games and segments reference players, they never own
/// them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub tint: TintColor,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), name: name.into(), tint: TintColor::default() }
    }

    pub fn with_tint(name: impl Into<String>, tint: TintColor) -> Self {
        Self { id: Uuid::new_v4(), name: name.into(), tint }
    }
}

/// Display tint used by the app's player chips.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TintColor {
    #[default]
    Blue,
    Red,
    Green,
    Orange,
    Purple,
    Teal,
    Pink,
    Yellow,
}
