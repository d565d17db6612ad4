//! Drag tracking: turns a phase-tagged pointer stream into bounded
//! horizontal offsets and a snap decision on release.

use kurbo::Vec2;
use serde::{Deserialize, Serialize};

/// Phase of a pointer drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// One drag input sample.
///
/// `Changed` deltas are incremental: each sample reports only the movement
/// since the previous sample, not the cumulative translation from the start
/// of the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSample {
    pub phase: DragPhase,
    pub delta: Vec2,
}

impl DragSample {
    pub fn new(phase: DragPhase, delta: Vec2) -> Self {
        Self { phase, delta }
    }
}

/// Resting position chosen when a gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapTarget {
    Open,
    Closed,
}

/// Snap toward whichever resting position is geometrically closer:
/// open if the leading edge is within half the panel width of the open
/// position, closed otherwise. Independent of drag velocity or direction.
pub fn snap_target(offset: f64, width: f64) -> SnapTarget {
    if offset.abs() < width / 2.0 {
        SnapTarget::Open
    } else {
        SnapTarget::Closed
    }
}

/// Tracks a single in-flight drag gesture.
///
/// Samples that arrive with no active gesture (e.g. after a cancellation)
/// are ignored by returning `None` from [`DragTracker::translate`] and
/// [`DragTracker::finish`].
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    active: bool,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture should be claimed as a horizontal sidebar drag.
    ///
    /// Evaluated once per gesture on the first meaningful movement: the
    /// translation must be predominantly horizontal. Vertical-dominant
    /// gestures are left for other handlers (e.g. a scroll view).
    pub fn should_recognize(translation: Vec2) -> bool {
        translation.x.abs() > translation.y.abs()
    }

    /// Whether a gesture is currently being tracked.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start tracking a recognized gesture.
    pub fn begin(&mut self) {
        self.active = true;
    }

    /// Apply an incremental horizontal delta to the current offset.
    ///
    /// Returns `None` when no gesture is active. The result is clamped to
    /// `max_offset` on the open side only; the closed side may be overshot
    /// mid-gesture and is corrected by the snap decision afterward.
    pub fn translate(&self, delta_x: f64, current_offset: f64, max_offset: f64) -> Option<f64> {
        if !self.active {
            return None;
        }
        Some((current_offset + delta_x).min(max_offset))
    }

    /// End the gesture and decide where to snap.
    ///
    /// Returns `None` when no gesture is active.
    pub fn finish(&mut self, current_offset: f64, width: f64) -> Option<SnapTarget> {
        if !self.active {
            return None;
        }
        self.active = false;
        Some(snap_target(current_offset, width))
    }

    /// Drop any in-flight gesture without a decision.
    pub fn reset(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognition_gate() {
        // Vertical-dominant movement is left to other handlers.
        assert!(!DragTracker::should_recognize(Vec2::new(10.0, 20.0)));
        assert!(DragTracker::should_recognize(Vec2::new(20.0, 10.0)));
        // A perfect diagonal is not predominantly horizontal.
        assert!(!DragTracker::should_recognize(Vec2::new(15.0, 15.0)));
        assert!(DragTracker::should_recognize(Vec2::new(-20.0, 10.0)));
    }

    #[test]
    fn test_translate_requires_active_gesture() {
        let tracker = DragTracker::new();
        assert_eq!(tracker.translate(10.0, -300.0, 0.0), None);
    }

    #[test]
    fn test_translate_clamps_open_side_only() {
        let mut tracker = DragTracker::new();
        tracker.begin();

        // Pulling past the open bound is clamped.
        assert_eq!(tracker.translate(80.0, -50.0, 0.0), Some(0.0));
        // Pushing past the closed bound is not clamped live.
        assert_eq!(tracker.translate(-280.0, 0.0, 0.0), Some(-280.0));
        assert_eq!(tracker.translate(-200.0, -280.0, 0.0), Some(-480.0));
    }

    #[test]
    fn test_deltas_are_incremental() {
        let mut tracker = DragTracker::new();
        tracker.begin();

        let mut offset = -300.0;
        for delta in [100.0, 100.0, 50.0] {
            offset = tracker.translate(delta, offset, 0.0).unwrap();
        }
        assert!((offset + 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snap_threshold() {
        assert_eq!(snap_target(-100.0, 300.0), SnapTarget::Open);
        assert_eq!(snap_target(-200.0, 300.0), SnapTarget::Closed);
        // Exactly at half width snaps closed.
        assert_eq!(snap_target(-150.0, 300.0), SnapTarget::Closed);
    }

    #[test]
    fn test_finish_deactivates() {
        let mut tracker = DragTracker::new();
        tracker.begin();

        assert_eq!(tracker.finish(-50.0, 300.0), Some(SnapTarget::Open));
        assert!(!tracker.is_active());
        // A second release with no gesture is ignored.
        assert_eq!(tracker.finish(-50.0, 300.0), None);
    }

    #[test]
    fn test_reset_drops_gesture() {
        let mut tracker = DragTracker::new();
        tracker.begin();
        tracker.reset();
        assert_eq!(tracker.translate(10.0, -300.0, 0.0), None);
        assert_eq!(tracker.finish(-300.0, 300.0), None);
    }
}
