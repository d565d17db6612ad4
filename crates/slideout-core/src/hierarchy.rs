//! Ancestor lookup over the logical view-parent chain.

use crate::container::SidebarContainer;
use crate::host::ViewId;

/// Logical-parent capability of a view hierarchy.
pub trait ViewHierarchy {
    /// Parent of `view`, or `None` at the root.
    fn parent_of(&self, view: ViewId) -> Option<ViewId>;
}

/// Walk upward from `start` (inclusive) and return the first view matching
/// `predicate`.
pub fn find_ancestor<H, P>(hierarchy: &H, start: ViewId, mut predicate: P) -> Option<ViewId>
where
    H: ViewHierarchy + ?Sized,
    P: FnMut(ViewId) -> bool,
{
    let mut current = Some(start);
    while let Some(view) = current {
        if predicate(view) {
            return Some(view);
        }
        current = hierarchy.parent_of(view);
    }
    None
}

/// Find the nearest container enclosing `start`.
///
/// A view belongs to a container when the walk reaches that container's own
/// host view.
pub fn enclosing_container<'a, H>(
    hierarchy: &H,
    containers: impl IntoIterator<Item = &'a SidebarContainer>,
    start: ViewId,
) -> Option<&'a SidebarContainer>
where
    H: ViewHierarchy + ?Sized,
{
    let containers: Vec<&SidebarContainer> = containers.into_iter().collect();
    let hit = find_ancestor(hierarchy, start, |view| {
        containers.iter().any(|c| c.view() == view)
    })?;
    containers.into_iter().find(|c| c.view() == hit)
}
