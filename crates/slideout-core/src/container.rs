//! Sidebar overlay container: the authoritative open/close state machine.
//!
//! A [`SidebarContainer`] manages two child views inside its own host view: a
//! primary "top" view filling the content area and a "left" sidebar view that
//! slides out over it. The container owns the sidebar's state label and
//! leading-edge offset; the surrounding UI feeds it serialized drag samples
//! and pumps [`SidebarContainer::tick`] from its event loop to run snap
//! animations. No operation returns an error: degenerate inputs (no sidebar
//! view, inert geometry, stray samples) are checked no-op branches.

use std::time::Duration;

use kurbo::{Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::animation::{DEFAULT_ANIMATION_DURATION, SlideTransition};
use crate::drag::{DragPhase, DragSample, DragTracker, SnapTarget};
use crate::geometry::{DEFAULT_RIGHT_INDENT, GeometryError, SidebarGeometry};
use crate::host::{SidebarDelegate, ViewHost, ViewId};
use crate::state::SidebarState;

/// Container configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SidebarConfig {
    /// Gap kept visible on the right when the sidebar is fully open.
    pub right_indent: f64,
    /// Duration of the snap animation.
    pub animation_duration: Duration,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            right_indent: DEFAULT_RIGHT_INDENT,
            animation_duration: DEFAULT_ANIMATION_DURATION,
        }
    }
}

impl SidebarConfig {
    /// Create a configuration, rejecting a negative indent up front.
    pub fn new(right_indent: f64, animation_duration: Duration) -> Result<Self, GeometryError> {
        if right_indent < 0.0 {
            return Err(GeometryError::NegativeIndent(right_indent));
        }
        Ok(Self {
            right_indent,
            animation_duration,
        })
    }
}

/// Host-backed container holding a primary view and a slide-out sidebar.
///
/// The container is single-threaded by construction: it is the sole writer
/// of the offset and state label, and every mutation arrives through the
/// host's serialized event stream.
#[derive(Debug)]
pub struct SidebarContainer {
    view: ViewId,
    config: SidebarConfig,
    bounds: Rect,
    top_view: Option<ViewId>,
    left_view: Option<ViewId>,
    geometry: Option<SidebarGeometry>,
    state: SidebarState,
    current_offset: f64,
    transition: Option<SlideTransition>,
    drag: DragTracker,
}

impl SidebarContainer {
    /// Create a container rooted at the given host view, starting closed
    /// with no children.
    pub fn new(view: ViewId, config: SidebarConfig) -> Self {
        Self {
            view,
            config,
            bounds: Rect::ZERO,
            top_view: None,
            left_view: None,
            geometry: None,
            state: SidebarState::Closed,
            current_offset: 0.0,
            transition: None,
            drag: DragTracker::new(),
        }
    }

    /// The container's own host view.
    pub fn view(&self) -> ViewId {
        self.view
    }

    /// Current primary view, if any.
    pub fn top_view(&self) -> Option<ViewId> {
        self.top_view
    }

    /// Current sidebar view, if any.
    pub fn left_view(&self) -> Option<ViewId> {
        self.left_view
    }

    /// Current state label.
    pub fn state(&self) -> SidebarState {
        self.state
    }

    /// Current leading-edge offset of the sidebar.
    pub fn current_offset(&self) -> f64 {
        self.current_offset
    }

    /// Check if the sidebar is open or opening.
    pub fn is_open(&self) -> bool {
        self.state.is_open_or_opening()
    }

    /// Active sidebar geometry, if the container is wide enough for one.
    pub fn geometry(&self) -> Option<SidebarGeometry> {
        self.geometry
    }

    pub fn config(&self) -> SidebarConfig {
        self.config
    }

    /// Set the content area and reflow both children.
    ///
    /// A container not wider than the right indent has no valid sidebar
    /// geometry; the violation is logged and the sidebar goes inert until
    /// the bounds grow (every drag and open/close call no-ops meanwhile).
    pub fn set_bounds(&mut self, host: &mut dyn ViewHost, bounds: Rect) {
        self.bounds = bounds;
        if let Some(top) = self.top_view {
            host.set_frame(top, bounds);
        }
        let Some(left) = self.left_view else {
            return;
        };
        match SidebarGeometry::for_container(bounds.width(), self.config.right_indent) {
            Ok(geo) => {
                self.geometry = Some(geo);
                // Re-pin a resting sidebar to its bound after the resize.
                if self.state.is_settled() && self.transition.is_none() && !self.drag.is_active() {
                    self.current_offset =
                        geo.resting_offset(self.state == SidebarState::Open);
                }
                host.set_frame(left, geo.frame(bounds, self.current_offset));
            }
            Err(e) => {
                log::error!("sidebar geometry rejected: {e}");
                self.geometry = None;
            }
        }
    }

    /// Replace the primary view.
    ///
    /// Order: will-notification, detach old, attach new, frame to the
    /// content area, restack the sidebar above it, did-notification.
    pub fn set_top_view(
        &mut self,
        host: &mut dyn ViewHost,
        delegate: &mut dyn SidebarDelegate,
        view: Option<ViewId>,
    ) {
        delegate.will_set_top_view(view);
        if let Some(old) = self.top_view.take() {
            host.detach_view(old);
        }
        self.top_view = view;
        if let Some(top) = view {
            host.attach_view(top, self.view);
            host.set_frame(top, self.bounds);
        }
        // The sidebar must stay interactable above a freshly attached
        // primary view.
        if let Some(left) = self.left_view {
            host.bring_to_front(left);
        }
        delegate.did_set_top_view(view);
    }

    /// Replace the sidebar view.
    ///
    /// The sidebar always (re)starts closed: any in-flight animation or
    /// gesture belonging to the old view is dropped with it.
    pub fn set_left_view(
        &mut self,
        host: &mut dyn ViewHost,
        delegate: &mut dyn SidebarDelegate,
        view: Option<ViewId>,
    ) {
        delegate.will_set_left_view(view);
        if let Some(old) = self.left_view.take() {
            host.detach_view(old);
        }
        self.transition = None;
        self.drag.reset();
        self.state = SidebarState::Closed;
        self.geometry = None;
        self.left_view = view;
        if let Some(left) = view {
            host.attach_view(left, self.view);
            match SidebarGeometry::for_container(self.bounds.width(), self.config.right_indent) {
                Ok(geo) => {
                    self.current_offset = geo.closed_offset();
                    host.set_frame(left, geo.frame(self.bounds, self.current_offset));
                    host.bring_to_front(left);
                    self.geometry = Some(geo);
                }
                Err(e) => {
                    log::error!("sidebar geometry rejected: {e}");
                }
            }
        }
        delegate.did_set_left_view(view);
    }

    /// Animate the sidebar open. No-op while already open or opening.
    pub fn open(&mut self) {
        self.set_opened(true);
    }

    /// Animate the sidebar closed. No-op while already closed or closing.
    pub fn close(&mut self) {
        self.set_opened(false);
    }

    /// Open if not currently open/opening, otherwise close.
    pub fn toggle(&mut self) {
        if self.state.is_open_or_opening() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Start an eased slide to the given resting position.
    ///
    /// This is the direct form used by the drag-end path. Re-entrancy is
    /// gated so an animation is never restarted: the call no-ops when the
    /// label already matches the requested side and the offset is genuinely
    /// at rest or already heading there. A drag-displaced offset still
    /// animates home even when the label matches.
    pub fn set_opened(&mut self, opened: bool) {
        if self.left_view.is_none() {
            return;
        }
        let Some(geo) = self.geometry else {
            return;
        };
        let target = geo.resting_offset(opened);
        let same_side = if opened {
            self.state.is_open_or_opening()
        } else {
            self.state.is_closed_or_closing()
        };
        let at_rest =
            self.state.is_settled() && (self.current_offset - target).abs() < f64::EPSILON;
        if same_side && (self.transition.is_some() || at_rest) {
            return;
        }
        self.state = if opened {
            SidebarState::Opening
        } else {
            SidebarState::Closing
        };
        log::debug!(
            "sidebar {} from offset {}",
            if opened { "opening" } else { "closing" },
            self.current_offset
        );
        self.transition = Some(SlideTransition::new(
            self.current_offset,
            target,
            opened,
            self.config.animation_duration,
        ));
    }

    /// Feed one drag sample from a recognized horizontal gesture.
    ///
    /// `Began` cancels any in-flight animation and hands offset ownership to
    /// live tracking; the state label is untouched until the gesture ends.
    /// `Changed` samples without an active gesture are ignored.
    pub fn handle_drag(&mut self, host: &mut dyn ViewHost, sample: DragSample) {
        let Some(left) = self.left_view else {
            return;
        };
        let Some(geo) = self.geometry else {
            return;
        };
        match sample.phase {
            DragPhase::Began => {
                self.transition = None;
                self.drag.begin();
            }
            DragPhase::Changed => {
                let Some(offset) =
                    self.drag
                        .translate(sample.delta.x, self.current_offset, geo.open_offset())
                else {
                    return;
                };
                // A stale snap animation must not fight the live drag.
                self.transition = None;
                self.current_offset = offset;
                host.set_frame(left, geo.frame(self.bounds, offset));
            }
            DragPhase::Ended | DragPhase::Cancelled => {
                let Some(target) = self.drag.finish(self.current_offset, geo.width) else {
                    return;
                };
                self.set_opened(target == SnapTarget::Open);
            }
        }
    }

    /// Whether an initial gesture translation should be claimed as a
    /// sidebar drag. Evaluated once per gesture, before any sample is fed.
    pub fn should_recognize(&self, translation: Vec2) -> bool {
        self.left_view.is_some() && DragTracker::should_recognize(translation)
    }

    /// Advance the snap animation by `dt`.
    ///
    /// Called from the host's event loop each frame. On completion the
    /// offset lands exactly on the resting bound, the state label settles,
    /// and `sidebar_pulled_out` fires exactly once.
    pub fn tick(
        &mut self,
        host: &mut dyn ViewHost,
        delegate: &mut dyn SidebarDelegate,
        dt: Duration,
    ) {
        let Some(left) = self.left_view else {
            return;
        };
        let Some(transition) = self.transition.as_mut() else {
            return;
        };
        let offset = transition.advance(dt);
        let finished = transition.is_finished();
        let opened = transition.opened();
        self.current_offset = offset;
        if let Some(geo) = self.geometry {
            host.set_frame(left, geo.frame(self.bounds, offset));
        }
        if finished {
            self.transition = None;
            self.state = if opened {
                SidebarState::Open
            } else {
                SidebarState::Closed
            };
            log::debug!("sidebar settled {}", if opened { "open" } else { "closed" });
            delegate.sidebar_pulled_out(opened);
        }
    }
}
