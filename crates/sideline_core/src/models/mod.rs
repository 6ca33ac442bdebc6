pub mod game;
pub mod plan;
pub mod player;

pub use game::{GameConfig, SubstitutionStyle};
pub use plan::{Segment, SubstitutionPlan};
pub use player::{Player, TintColor};
