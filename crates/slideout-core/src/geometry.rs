//! Sidebar geometry: panel width, right indent, and frame math.

use kurbo::Rect;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Horizontal inset reserved so the open sidebar never covers the full
/// container width.
pub const DEFAULT_RIGHT_INDENT: f64 = 56.0;

/// Geometry configuration errors.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("right indent must be non-negative, got {0}")]
    NegativeIndent(f64),
    #[error("sidebar width {width} must exceed right indent {right_indent}")]
    TooNarrow { width: f64, right_indent: f64 },
}

/// Static geometry of the sidebar panel.
///
/// The sidebar slides horizontally between two resting positions: fully open
/// (leading edge at offset `0.0`) and fully closed (leading edge at
/// `-width`, just off the left edge of the container).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SidebarGeometry {
    /// Width of the sidebar panel.
    pub width: f64,
    /// Gap kept visible on the right when the sidebar is fully open.
    pub right_indent: f64,
}

impl SidebarGeometry {
    /// Create a geometry, enforcing `width > right_indent >= 0`.
    pub fn new(width: f64, right_indent: f64) -> Result<Self, GeometryError> {
        if right_indent < 0.0 {
            return Err(GeometryError::NegativeIndent(right_indent));
        }
        if width <= right_indent {
            return Err(GeometryError::TooNarrow {
                width,
                right_indent,
            });
        }
        Ok(Self {
            width,
            right_indent,
        })
    }

    /// Derive the geometry from the container width: the panel spans the
    /// container minus the right indent.
    pub fn for_container(container_width: f64, right_indent: f64) -> Result<Self, GeometryError> {
        Self::new(container_width - right_indent, right_indent)
    }

    /// Leading-edge offset when fully open.
    pub fn open_offset(&self) -> f64 {
        0.0
    }

    /// Leading-edge offset when fully closed.
    pub fn closed_offset(&self) -> f64 {
        -self.width
    }

    /// Resting offset for the given opened state.
    pub fn resting_offset(&self, opened: bool) -> f64 {
        if opened {
            self.open_offset()
        } else {
            self.closed_offset()
        }
    }

    /// Sidebar frame within the container bounds at the given offset.
    ///
    /// The panel always spans the full container height.
    pub fn frame(&self, bounds: Rect, offset: f64) -> Rect {
        Rect::new(
            bounds.x0 + offset,
            bounds.y0,
            bounds.x0 + offset + self.width,
            bounds.y1,
        )
    }
}
