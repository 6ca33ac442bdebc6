//! Typed clock events.
//!
//! The engine pushes these into an internal buffer instead of invoking
//! optionally-wired callbacks; the session coordinator drains the buffer with
//! a cursor after every tick or transition, so an unset listener can never
//! drop a signal.

use serde::{Deserialize, Serialize};

/// Signals emitted by `ClockEngine` state transitions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum ClockEvent {
    /// A new quarter began ticking (fired by the start transition only,
    /// never by administrative seeks).
    QuarterStarted { quarter: u32 },

    /// The substitution countdown hit zero: advance the rotation. Always
    /// immediately followed by `CountdownRestarted`.
    SubstitutionDue,

    /// The countdown was re-armed, either after a substitution or by a
    /// manual realignment; observers should refresh whatever displays it.
    CountdownRestarted,

    /// The current period ran out; the engine stays `Finished` until the
    /// caller explicitly starts the next quarter.
    PeriodEnded { quarter: u32 },

    /// The final period ran out, or play/pause was toggled after it had.
    GameEnded,
}
