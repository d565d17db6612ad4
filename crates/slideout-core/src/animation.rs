//! Time-driven slide transition between resting positions.
//!
//! The transition is pumped by the host event loop via
//! [`crate::SidebarContainer::tick`]; it never blocks and is cancelled by
//! simply dropping it when a new drag begins.

use std::time::Duration;

/// Default snap animation duration.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(240);

/// Cubic ease-in-out curve over `t` in `[0, 1]`.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// An in-flight eased slide of the sidebar's leading edge.
#[derive(Debug, Clone)]
pub struct SlideTransition {
    start: f64,
    target: f64,
    opened: bool,
    elapsed: Duration,
    duration: Duration,
}

impl SlideTransition {
    /// Begin a transition from `start` to `target`. `opened` is the state
    /// label to settle on once the slide completes.
    pub fn new(start: f64, target: f64, opened: bool, duration: Duration) -> Self {
        Self {
            start,
            target,
            opened,
            elapsed: Duration::ZERO,
            duration,
        }
    }

    /// Advance by `dt` and return the current eased offset.
    pub fn advance(&mut self, dt: Duration) -> f64 {
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.is_finished() {
            return self.target;
        }
        let progress = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.start + (self.target - self.start) * ease_in_out(progress)
    }

    /// Whether the slide has reached its target.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Offset this transition is heading toward.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// State label to apply on completion.
    pub fn opened(&self) -> bool {
        self.opened
    }
}
