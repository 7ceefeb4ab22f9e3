//! Simulated long-running task progress.
//!
//! DESIGN
//! ======
//! Pages that pretend to run work (data audit, report verification) share
//! this state machine: `Idle -> Running -> Idle`. A fixed-period ticker
//! advances the percentage by a fixed step; the first tick that reaches 100
//! clamps, stops the run and yields the page's completion notice exactly
//! once. Progress is tracked as a tick count so fractional steps stay exact.
//!
//! The ticker itself lives in `util::ticker`; this module never touches
//! timers.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use crate::state::toast::Notice;

/// Static description of one simulated task.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressSpec {
    /// Percentage added per tick. Must be positive.
    pub step: f64,
    /// Tick period in milliseconds.
    pub period_ms: u32,
    /// Completion toast title.
    pub title: &'static str,
    /// Completion toast body.
    pub description: &'static str,
}

impl ProgressSpec {
    /// Number of ticks a run takes: `ceil(100 / step)`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn ticks_to_complete(&self) -> u32 {
        (100.0 / self.step).ceil() as u32
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Running,
}

/// Progress of one simulated task on one page instance.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressController {
    spec: ProgressSpec,
    phase: Phase,
    ticks: u32,
}

impl ProgressController {
    #[must_use]
    pub fn new(spec: ProgressSpec) -> Self {
        Self { spec, phase: Phase::Idle, ticks: 0 }
    }

    #[must_use]
    pub fn spec(&self) -> ProgressSpec {
        self.spec
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Begin a run from 0%. Returns `false` (and changes nothing) if a run
    /// is already in progress.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.phase = Phase::Running;
        self.ticks = 0;
        true
    }

    /// Advance one tick. Returns the completion notice on the tick that
    /// reaches 100%; `None` otherwise, including every tick while idle.
    pub fn tick(&mut self) -> Option<Notice> {
        if !self.is_running() {
            return None;
        }
        self.ticks += 1;
        if self.ticks < self.spec.ticks_to_complete() {
            return None;
        }
        self.phase = Phase::Idle;
        Some(Notice::info(self.spec.title, self.spec.description))
    }

    /// Current percentage, clamped to `[0, 100]`.
    #[must_use]
    pub fn percent(&self) -> f64 {
        (f64::from(self.ticks) * self.spec.step).clamp(0.0, 100.0)
    }

    /// Percentage label without a trailing `.0` (`"40%"`, `"37.5%"`).
    #[must_use]
    pub fn percent_label(&self) -> String {
        format_percent(self.percent())
    }
}

/// Format a percentage for display, trimming whole numbers.
#[must_use]
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}%")
    } else {
        format!("{value:.1}%")
    }
}
