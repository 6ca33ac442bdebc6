pub mod clock;
pub mod events;
pub mod session;
pub mod tracker;

pub use clock::{ClockEngine, ClockStatus, PeriodStopwatch};
pub use events::ClockEvent;
pub use session::{GameSessionCoordinator, SessionSnapshot};
pub use tracker::SubstitutionTracker;
