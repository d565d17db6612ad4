//! Sidebar state definitions.

use serde::{Deserialize, Serialize};

/// Open/closed state of the sidebar.
///
/// `Opening`/`Closing` are held while the snap animation is in flight; only
/// a completed transition settles the label on `Open` or `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SidebarState {
    /// Resting fully off-screen (except during a live drag).
    Closed,
    /// Snap animation toward the open position is in flight.
    Opening,
    /// Resting fully pulled out.
    Open,
    /// Snap animation toward the closed position is in flight.
    Closing,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::Closed
    }
}

impl SidebarState {
    /// Check if the sidebar is open or on its way there.
    pub fn is_open_or_opening(&self) -> bool {
        matches!(self, Self::Open | Self::Opening)
    }

    /// Check if the sidebar is closed or on its way there.
    pub fn is_closed_or_closing(&self) -> bool {
        matches!(self, Self::Closed | Self::Closing)
    }

    /// Check if the sidebar is at a resting position (no animation label).
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Open | Self::Closed)
    }
}
