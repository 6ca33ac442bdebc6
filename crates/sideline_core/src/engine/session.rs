//! Live game session coordinator.
//!
//! Owns one clock engine, one substitution tracker and the current plan for
//! a specific game, and wires clock events to tracker advances and
//! live-activity pushes. Presentation reads the snapshot it returns; nothing
//! external ever mutates clock or tracker directly.

use serde::Serialize;

use crate::engine::clock::{ClockEngine, ClockStatus, PeriodStopwatch};
use crate::engine::events::ClockEvent;
use crate::engine::tracker::SubstitutionTracker;
use crate::live_activity::{LiveActivityContent, LiveActivityNotifier, NoopNotifier};
use crate::models::{GameConfig, Player, SubstitutionPlan};
use crate::planner;

/// Pull-only view of the session after a poll or transition.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SessionSnapshot {
    pub status: ClockStatus,
    pub quarter: u32,
    pub elapsed_seconds: u32,
    pub period_length_seconds: u32,
    pub sub_remaining_seconds: f64,
    pub current_players: Vec<Player>,
    pub next_players: Vec<Player>,
    pub bench_players: Vec<Player>,
    pub is_game_over: bool,
}

pub struct GameSessionCoordinator<N: LiveActivityNotifier = NoopNotifier> {
    config: GameConfig,
    plan: SubstitutionPlan,
    clock: ClockEngine,
    tracker: SubstitutionTracker,
    stopwatch: PeriodStopwatch,
    notifier: N,
    event_cursor: usize,
}

impl GameSessionCoordinator<NoopNotifier> {
    pub fn new(config: GameConfig) -> Self {
        Self::with_notifier(config, NoopNotifier)
    }
}

impl<N: LiveActivityNotifier> GameSessionCoordinator<N> {
    pub fn with_notifier(config: GameConfig, notifier: N) -> Self {
        let plan = planner::build_plan_for_config(&config);
        let clock = ClockEngine::new(
            config.period_length_seconds(),
            config.number_of_periods,
            plan.sub_duration,
        );
        let tracker = SubstitutionTracker::new(plan.clone());
        Self {
            config,
            plan,
            clock,
            tracker,
            stopwatch: PeriodStopwatch::new(),
            notifier,
            event_cursor: 0,
        }
    }

    // =========================================================================
    // Controls
    // =========================================================================

    /// The single play-pause control. Starts the next quarter from
    /// `NotStarted`/`Finished`, otherwise flips between running and paused.
    pub fn toggle_play_pause(&mut self) -> SessionSnapshot {
        self.clock.toggle_play_pause();

        let quarter_started = self
            .clock
            .events_since(self.event_cursor)
            .iter()
            .any(|event| matches!(event, ClockEvent::QuarterStarted { .. }));
        if quarter_started {
            self.stopwatch.seek(0);
        }
        match self.clock.status() {
            ClockStatus::Running => self.stopwatch.start(),
            _ => self.stopwatch.pause(),
        }

        self.process_events();
        self.snapshot()
    }

    /// Poll the wall-clock time source and process whatever became due.
    /// Called once a second by the host while a game screen is visible;
    /// calling it more often is harmless because ticks are idempotent.
    pub fn poll(&mut self) -> SessionSnapshot {
        let reported = self.stopwatch.elapsed_seconds();
        self.poll_at(reported)
    }

    /// Deterministic variant of `poll` fed an explicit within-period elapsed
    /// value; the seam tests and the CLI dry-run drive.
    pub fn poll_at(&mut self, elapsed_secs: u32) -> SessionSnapshot {
        self.clock.tick(elapsed_secs.min(self.clock.period_length_seconds()));
        self.process_events();
        self.snapshot()
    }

    /// Rebuild plan and tracker for edited game parameters, carrying the
    /// clock's progress and run/pause state across the swap.
    pub fn apply_game_changes(&mut self, new_config: GameConfig) {
        let old_interval = self.plan.sub_duration;
        let prev_total = self.clock.total_elapsed_seconds();
        let quarter = self.clock.current_quarter();
        let elapsed = self.clock.elapsed_seconds();
        let status = self.clock.status();

        self.plan = planner::build_plan_for_config(&new_config);
        self.tracker = SubstitutionTracker::new(self.plan.clone());
        self.clock = ClockEngine::with_progress(
            new_config.period_length_seconds(),
            new_config.number_of_periods,
            self.plan.sub_duration,
            quarter,
            elapsed,
            status,
        );
        self.event_cursor = 0;
        self.config = new_config;

        let interval = self.plan.sub_duration;
        if interval > 0.0 {
            if (interval - old_interval).abs() > f64::EPSILON {
                // New rotation interval: arm a full countdown from here.
                self.clock.restart_sub_timer(interval);
            } else {
                // Same interval: keep the cycle phase so the next
                // substitution neither doubles up nor stalls.
                let remaining = interval - (f64::from(prev_total) % interval);
                self.clock.restart_sub_timer(remaining);
            }
        }
        self.tracker.resync(f64::from(prev_total));

        self.process_events();
    }

    /// Jump the whole session to a quarter + elapsed position, e.g. after
    /// the app comes back from background. Clamps, realigns countdown and
    /// rotation from the total elapsed time, and resumes unless the game is
    /// over.
    pub fn resync_timer(&mut self, elapsed_secs: u32, quarter: u32) -> SessionSnapshot {
        let quarter = quarter.clamp(1, self.clock.total_periods());
        let elapsed = elapsed_secs.min(self.clock.period_length_seconds());
        let total = (quarter - 1) * self.clock.period_length_seconds() + elapsed;
        log::debug!("resyncing session to quarter {quarter} at {elapsed}s (total {total}s)");

        self.clock.resync(quarter, elapsed);
        if self.clock.sub_interval() > 0.0 {
            let interval = self.clock.sub_interval();
            let remaining = interval - (f64::from(total) % interval);
            self.clock.restart_sub_timer(remaining);
        }
        self.tracker.resync(f64::from(total));

        self.stopwatch.seek(elapsed);
        if !self.clock.is_game_over() {
            self.clock.resume();
        }
        if self.clock.status() == ClockStatus::Running {
            self.stopwatch.start();
        } else {
            self.stopwatch.pause();
        }

        self.process_events();
        self.snapshot()
    }

    // =========================================================================
    // Event wiring
    // =========================================================================

    fn process_events(&mut self) {
        let events = self.clock.events_since(self.event_cursor).to_vec();
        self.event_cursor = self.clock.events_len();

        for event in events {
            match event {
                ClockEvent::QuarterStarted { .. } => self.notify_start(),
                ClockEvent::SubstitutionDue => self.tracker.advance(),
                ClockEvent::CountdownRestarted => self.notify_update(),
                ClockEvent::PeriodEnded { .. } => {
                    // Period boundary stops the time source; the next quarter
                    // is an explicit toggle away.
                    self.stopwatch.pause();
                    self.notify_update();
                }
                ClockEvent::GameEnded => self.notify_end(),
            }
        }
    }

    fn content(&self) -> LiveActivityContent {
        LiveActivityContent {
            elapsed_seconds: self.clock.elapsed_seconds(),
            period_length_seconds: self.clock.period_length_seconds(),
            quarter: self.clock.current_quarter(),
            next_players: self.tracker.next_players().to_vec(),
            next_sub_countdown_seconds: self.clock.sub_remaining_seconds().round() as u32,
        }
    }

    fn notify_start(&mut self) {
        let content = self.content();
        if let Err(err) = self.notifier.start(&content) {
            log::warn!("live activity start failed: {err}");
        }
    }

    fn notify_update(&mut self) {
        let content = self.content();
        if let Err(err) = self.notifier.update(&content) {
            log::warn!("live activity update failed: {err}");
        }
    }

    fn notify_end(&mut self) {
        if let Err(err) =
            self.notifier.end(self.clock.elapsed_seconds(), self.clock.current_quarter())
        {
            log::warn!("live activity end failed: {err}");
        }
    }

    // =========================================================================
    // Query surface
    // =========================================================================

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.clock.status(),
            quarter: self.clock.current_quarter(),
            elapsed_seconds: self.clock.elapsed_seconds(),
            period_length_seconds: self.clock.period_length_seconds(),
            sub_remaining_seconds: self.clock.sub_remaining_seconds(),
            current_players: self.tracker.current_players().to_vec(),
            next_players: self.tracker.next_players().to_vec(),
            bench_players: self.tracker.bench_players(),
            is_game_over: self.clock.is_game_over(),
        }
    }

    pub fn current_players(&self) -> &[Player] {
        self.tracker.current_players()
    }

    pub fn next_players(&self) -> &[Player] {
        self.tracker.next_players()
    }

    pub fn bench_players(&self) -> Vec<Player> {
        self.tracker.bench_players()
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.clock.elapsed_seconds()
    }

    pub fn current_quarter(&self) -> u32 {
        self.clock.current_quarter()
    }

    pub fn sub_remaining_seconds(&self) -> f64 {
        self.clock.sub_remaining_seconds()
    }

    pub fn is_game_over(&self) -> bool {
        self.clock.is_game_over()
    }

    pub fn status(&self) -> ClockStatus {
        self.clock.status()
    }

    pub fn plan(&self) -> &SubstitutionPlan {
        &self.plan
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
