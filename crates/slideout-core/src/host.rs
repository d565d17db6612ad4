//! View hierarchy host abstraction.
//!
//! The container does not render or lay out anything itself; it drives an
//! external host through [`ViewHost`] and reports back through
//! [`SidebarDelegate`]. All calls are fire-and-forget: the container never
//! consumes a return value from the host.

use std::collections::HashMap;

use kurbo::Rect;
use uuid::Uuid;

use crate::hierarchy::ViewHierarchy;

/// Opaque handle to a view managed by the host.
pub type ViewId = Uuid;

/// Capabilities the container needs from the surrounding view hierarchy.
pub trait ViewHost {
    /// Insert `view` as a child of `parent`.
    fn attach_view(&mut self, view: ViewId, parent: ViewId);

    /// Remove `view` from its parent.
    fn detach_view(&mut self, view: ViewId);

    /// Position and size `view` within its parent.
    fn set_frame(&mut self, view: ViewId, frame: Rect);

    /// Raise `view` above its siblings.
    fn bring_to_front(&mut self, view: ViewId);
}

/// Notifications emitted by the container.
///
/// Every method has a default no-op body, so a delegate implements only the
/// events it cares about.
pub trait SidebarDelegate {
    /// The sidebar settled at a resting position; `opened` is the final
    /// state. Fired exactly once per completed transition.
    fn sidebar_pulled_out(&mut self, _opened: bool) {}

    fn will_set_top_view(&mut self, _view: Option<ViewId>) {}
    fn did_set_top_view(&mut self, _view: Option<ViewId>) {}

    fn will_set_left_view(&mut self, _view: Option<ViewId>) {}
    fn did_set_left_view(&mut self, _view: Option<ViewId>) {}
}

/// Delegate that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDelegate;

impl SidebarDelegate for NoopDelegate {}

/// In-memory view hierarchy for testing and ephemeral embedding.
///
/// Tracks parents, frames, and per-parent z-order (last entry is frontmost).
#[derive(Debug, Default)]
pub struct MemoryViewHost {
    parents: HashMap<ViewId, ViewId>,
    frames: HashMap<ViewId, Rect>,
    children: HashMap<ViewId, Vec<ViewId>>,
}

impl MemoryViewHost {
    /// Create a new empty hierarchy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frame last applied to `view`, if any.
    pub fn frame(&self, view: ViewId) -> Option<Rect> {
        self.frames.get(&view).copied()
    }

    /// Children of `parent`, back to front.
    pub fn children(&self, parent: ViewId) -> &[ViewId] {
        self.children.get(&parent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check if `view` is currently attached to a parent.
    pub fn is_attached(&self, view: ViewId) -> bool {
        self.parents.contains_key(&view)
    }
}

impl ViewHost for MemoryViewHost {
    fn attach_view(&mut self, view: ViewId, parent: ViewId) {
        self.detach_view(view);
        self.parents.insert(view, parent);
        self.children.entry(parent).or_default().push(view);
    }

    fn detach_view(&mut self, view: ViewId) {
        if let Some(parent) = self.parents.remove(&view) {
            if let Some(siblings) = self.children.get_mut(&parent) {
                siblings.retain(|&v| v != view);
            }
        }
        self.frames.remove(&view);
    }

    fn set_frame(&mut self, view: ViewId, frame: Rect) {
        self.frames.insert(view, frame);
    }

    fn bring_to_front(&mut self, view: ViewId) {
        if let Some(parent) = self.parents.get(&view).copied() {
            if let Some(siblings) = self.children.get_mut(&parent) {
                siblings.retain(|&v| v != view);
                siblings.push(view);
            }
        }
    }
}

impl ViewHierarchy for MemoryViewHost {
    fn parent_of(&self, view: ViewId) -> Option<ViewId> {
        self.parents.get(&view).copied()
    }
}
