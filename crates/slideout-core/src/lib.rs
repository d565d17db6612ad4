//! Slideout Core Library
//!
//! Platform-agnostic state machine for a sliding sidebar overlay: a host
//! view holds a primary "top" view and a "left" sidebar that can be dragged
//! out over it and snapped open or closed. Rendering, layout, and input
//! recognition live in the embedding UI, which drives the container through
//! the [`ViewHost`] trait and listens via [`SidebarDelegate`].

pub mod animation;
pub mod container;
pub mod drag;
pub mod geometry;
pub mod hierarchy;
pub mod host;
pub mod state;

pub use animation::{DEFAULT_ANIMATION_DURATION, SlideTransition, ease_in_out};
pub use container::{SidebarConfig, SidebarContainer};
pub use drag::{DragPhase, DragSample, DragTracker, SnapTarget, snap_target};
pub use geometry::{DEFAULT_RIGHT_INDENT, GeometryError, SidebarGeometry};
pub use hierarchy::{ViewHierarchy, enclosing_container, find_ancestor};
pub use host::{MemoryViewHost, NoopDelegate, SidebarDelegate, ViewHost, ViewId};
pub use state::SidebarState;
