//! Live-activity notification boundary.
//!
//! The session coordinator pushes clock/rotation snapshots out through this
//! trait so the host app can mirror them on a lock-screen style surface.
//! Delivery is best effort: a failed push is logged and dropped, it never
//! reaches clock or tracker state and is never retried here.

use serde::Serialize;
use thiserror::Error;

use crate::models::Player;

/// Platform/network failure reported by a notifier implementation.
#[derive(Debug, Error)]
#[error("live activity delivery failed: {reason}")]
pub struct LiveActivityError {
    pub reason: String,
}

impl LiveActivityError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

/// Snapshot pushed on every start/refresh.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LiveActivityContent {
    pub elapsed_seconds: u32,
    pub period_length_seconds: u32,
    pub quarter: u32,
    pub next_players: Vec<Player>,
    pub next_sub_countdown_seconds: u32,
}

pub trait LiveActivityNotifier {
    fn start(&mut self, content: &LiveActivityContent) -> Result<(), LiveActivityError>;
    fn update(&mut self, content: &LiveActivityContent) -> Result<(), LiveActivityError>;
    fn end(&mut self, elapsed_seconds: u32, quarter: u32) -> Result<(), LiveActivityError>;
}

/// Default notifier for sessions without a live surface.
#[derive(Debug, Default)]
pub struct NoopNotifier;

impl LiveActivityNotifier for NoopNotifier {
    fn start(&mut self, _content: &LiveActivityContent) -> Result<(), LiveActivityError> {
        Ok(())
    }

    fn update(&mut self, _content: &LiveActivityContent) -> Result<(), LiveActivityError> {
        Ok(())
    }

    fn end(&mut self, _elapsed_seconds: u32, _quarter: u32) -> Result<(), LiveActivityError> {
        Ok(())
    }
}

/// Recorded notifier call, in delivery order.
#[derive(Debug, Clone, PartialEq)]
pub enum NotifierCall {
    Start(LiveActivityContent),
    Update(LiveActivityContent),
    End { elapsed_seconds: u32, quarter: u32 },
}

/// In-memory notifier for tests and dry runs; can be told to fail to
/// exercise the swallow-and-log path.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub calls: Vec<NotifierCall>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn deliver(&mut self, call: NotifierCall) -> Result<(), LiveActivityError> {
        if self.fail {
            return Err(LiveActivityError::new("simulated platform rejection"));
        }
        self.calls.push(call);
        Ok(())
    }
}

impl LiveActivityNotifier for RecordingNotifier {
    fn start(&mut self, content: &LiveActivityContent) -> Result<(), LiveActivityError> {
        self.deliver(NotifierCall::Start(content.clone()))
    }

    fn update(&mut self, content: &LiveActivityContent) -> Result<(), LiveActivityError> {
        self.deliver(NotifierCall::Update(content.clone()))
    }

    fn end(&mut self, elapsed_seconds: u32, quarter: u32) -> Result<(), LiveActivityError> {
        self.deliver(NotifierCall::End { elapsed_seconds, quarter })
    }
}
