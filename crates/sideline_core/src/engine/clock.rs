//! Game clock engine.
//!
//! Drives elapsed time within the current period, the quarter counter and
//! the substitution countdown. The engine itself is time-source agnostic:
//! something outside feeds it the reported elapsed seconds (normally a
//! `PeriodStopwatch` polled once a second) and drains the event buffer
//! afterwards. All transitions are synchronous; nothing here spawns timers.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::events::ClockEvent;

/// Clock state for the current period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClockStatus {
    NotStarted,
    Running,
    Paused,
    /// The period ran out; a new quarter must be started explicitly.
    Finished,
}

/// Clock + substitution-countdown state machine for one live game.
///
/// `current_quarter` is 1-based and 0 before the first start. Elapsed time is
/// whole seconds within the current period; the countdown runs in f64 because
/// the rotation interval rarely divides the game evenly.
#[derive(Debug, Clone)]
pub struct ClockEngine {
    period_length_secs: u32,
    total_periods: u32,
    /// Seconds between substitutions; 0 disables the countdown entirely
    /// (empty plan).
    sub_interval: f64,
    status: ClockStatus,
    current_quarter: u32,
    elapsed_secs: u32,
    /// Within-period elapsed time at which the current countdown was armed.
    sub_anchor: f64,
    sub_remaining: f64,
    events: Vec<ClockEvent>,
}

impl ClockEngine {
    pub fn new(period_length_secs: u32, total_periods: u32, sub_interval: f64) -> Self {
        let sub_interval = sub_interval.max(0.0);
        Self {
            period_length_secs,
            total_periods: total_periods.max(1),
            sub_interval,
            status: ClockStatus::NotStarted,
            current_quarter: 0,
            elapsed_secs: 0,
            sub_anchor: 0.0,
            sub_remaining: sub_interval,
            events: Vec::new(),
        }
    }

    /// Rebuild an engine mid-game with explicit state transfer, used when a
    /// game's parameters change during a session. Quarter and elapsed time
    /// are clamped to the new bounds; the caller realigns the countdown.
    pub fn with_progress(
        period_length_secs: u32,
        total_periods: u32,
        sub_interval: f64,
        current_quarter: u32,
        elapsed_secs: u32,
        status: ClockStatus,
    ) -> Self {
        let mut engine = Self::new(period_length_secs, total_periods, sub_interval);
        engine.current_quarter = current_quarter.min(engine.total_periods);
        engine.elapsed_secs = elapsed_secs.min(period_length_secs);
        engine.sub_anchor = f64::from(engine.elapsed_secs);
        engine.status = status;
        engine
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Start / pause / resume, driven by the single play-pause control.
    ///
    /// After the final period has finished this only emits `GameEnded`; the
    /// clock never restarts on its own.
    pub fn toggle_play_pause(&mut self) {
        if self.is_game_over() {
            self.events.push(ClockEvent::GameEnded);
            return;
        }

        match self.status {
            ClockStatus::NotStarted | ClockStatus::Finished => {
                self.current_quarter = (self.current_quarter + 1).min(self.total_periods);
                self.elapsed_secs = 0;
                self.sub_anchor = 0.0;
                self.sub_remaining = self.sub_interval;
                self.status = ClockStatus::Running;
                self.events.push(ClockEvent::QuarterStarted { quarter: self.current_quarter });
            }
            ClockStatus::Running => self.status = ClockStatus::Paused,
            ClockStatus::Paused => self.status = ClockStatus::Running,
        }
    }

    /// Apply the time source's reported elapsed value for this period.
    ///
    /// Idempotent: a repeated report is ignored, so polling faster than once
    /// a second never double-fires the countdown. Ignored entirely unless
    /// `Running`.
    pub fn tick(&mut self, reported_elapsed_secs: u32) {
        if self.status != ClockStatus::Running {
            return;
        }
        if reported_elapsed_secs == self.elapsed_secs {
            return;
        }
        self.elapsed_secs = reported_elapsed_secs.min(self.period_length_secs);

        if self.elapsed_secs >= self.period_length_secs {
            self.sub_remaining = 0.0;
            self.status = ClockStatus::Finished;
            self.events.push(ClockEvent::PeriodEnded { quarter: self.current_quarter });
            if self.current_quarter >= self.total_periods {
                self.events.push(ClockEvent::GameEnded);
            }
            return;
        }

        if self.sub_interval > 0.0 {
            let since_last_sub = f64::from(self.elapsed_secs) - self.sub_anchor;
            let remaining = self.sub_interval - since_last_sub;
            if remaining <= 0.0 {
                // Substitution moment: re-arm from the current second and
                // signal the rotation advance before the countdown refresh.
                self.sub_anchor = f64::from(self.elapsed_secs);
                self.sub_remaining = self.sub_interval;
                self.events.push(ClockEvent::SubstitutionDue);
                self.events.push(ClockEvent::CountdownRestarted);
            } else {
                self.sub_remaining = remaining;
            }
        }
    }

    /// Realign the countdown so exactly `remaining` seconds are left,
    /// without touching elapsed time.
    pub fn restart_sub_timer(&mut self, remaining_secs: f64) {
        let remaining = remaining_secs.max(0.0);
        self.sub_anchor = f64::from(self.elapsed_secs) - (self.sub_interval - remaining);
        self.sub_remaining = remaining;
        self.events.push(ClockEvent::CountdownRestarted);
    }

    /// Swap in a new rotation interval (plan rebuild mid-game). The caller
    /// follows up with `restart_sub_timer` to realign the countdown.
    pub fn set_sub_interval(&mut self, sub_interval: f64) {
        self.sub_interval = sub_interval.max(0.0);
    }

    /// Administrative seek used when the app resumes from background.
    ///
    /// Sets quarter and elapsed time directly (clamped) and fires no
    /// start/end events. Lands `Paused` unless already running so the caller
    /// decides whether play resumes; a seek onto the period boundary lands
    /// `Finished`.
    pub fn resync(&mut self, quarter: u32, elapsed_secs: u32) {
        self.current_quarter = quarter.clamp(1, self.total_periods);
        self.elapsed_secs = elapsed_secs.min(self.period_length_secs);
        self.sub_anchor = f64::from(self.elapsed_secs);
        if self.elapsed_secs >= self.period_length_secs {
            self.sub_remaining = 0.0;
            self.status = ClockStatus::Finished;
        } else if self.status != ClockStatus::Running {
            self.status = ClockStatus::Paused;
        }
    }

    /// Resume from pause; anything else is a no-op (a resume on a clock that
    /// is not paused only ever cost a UI refresh in the source app).
    pub fn resume(&mut self) {
        if self.status == ClockStatus::Paused {
            self.status = ClockStatus::Running;
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn status(&self) -> ClockStatus {
        self.status
    }

    pub fn current_quarter(&self) -> u32 {
        self.current_quarter
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_secs
    }

    /// Elapsed seconds summed across all completed periods plus the current
    /// one. 0 before the game starts.
    pub fn total_elapsed_seconds(&self) -> u32 {
        if self.current_quarter == 0 {
            return 0;
        }
        (self.current_quarter - 1) * self.period_length_secs + self.elapsed_secs
    }

    pub fn sub_remaining_seconds(&self) -> f64 {
        self.sub_remaining.max(0.0)
    }

    pub fn sub_interval(&self) -> f64 {
        self.sub_interval
    }

    pub fn period_length_seconds(&self) -> u32 {
        self.period_length_secs
    }

    pub fn total_periods(&self) -> u32 {
        self.total_periods
    }

    pub fn is_game_over(&self) -> bool {
        self.current_quarter >= self.total_periods && self.status == ClockStatus::Finished
    }

    // =========================================================================
    // Event buffer
    // =========================================================================

    pub fn events_len(&self) -> usize {
        self.events.len()
    }

    /// Events pushed since `cursor`; the coordinator advances its own cursor
    /// after consuming them.
    pub fn events_since(&self, cursor: usize) -> &[ClockEvent] {
        &self.events[cursor.min(self.events.len())..]
    }
}

/// Wall-clock elapsed accumulator for one period.
///
/// Stands in for the source app's per-second timer: the session polls it and
/// feeds the result to `ClockEngine::tick`. Pausing drops the running anchor,
/// so once paused no further elapsed time can ever be observed - the
/// cancellation guarantee the tick subscription had in the source.
#[derive(Debug, Clone)]
pub struct PeriodStopwatch {
    accumulated: Duration,
    running_since: Option<Instant>,
}

impl Default for PeriodStopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl PeriodStopwatch {
    pub fn new() -> Self {
        Self { accumulated: Duration::ZERO, running_since: None }
    }

    pub fn start(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    pub fn pause(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += since.elapsed();
        }
    }

    /// Jump to an absolute within-period position, keeping the run state.
    pub fn seek(&mut self, elapsed_secs: u32) {
        self.accumulated = Duration::from_secs(u64::from(elapsed_secs));
        if self.running_since.is_some() {
            self.running_since = Some(Instant::now());
        }
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    pub fn elapsed_seconds(&self) -> u32 {
        let running = self.running_since.map_or(Duration::ZERO, |since| since.elapsed());
        (self.accumulated + running).as_secs() as u32
    }
}
