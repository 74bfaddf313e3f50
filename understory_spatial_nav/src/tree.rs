// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read and write access to the host's element tree.

use kurbo::Rect;
use smallvec::SmallVec;

/// Navigation role of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavRole {
    /// Transparent to search: never a candidate, but its children are.
    Wrapper,
    /// A leaf that can hold the selection directly.
    Item,
    /// A boundary that scopes navigation and owns a nested selection.
    ///
    /// From outside, a group is compared as a single box; entering it selects
    /// its initial selectable item.
    Group,
}

/// Read-only view of the host's element tree.
///
/// The tree is owned by the host. Navigation only borrows it for the duration
/// of a call and never keeps keys around between calls, so hosts are free to
/// rebuild or mutate the tree between navigation requests.
///
/// All queries are expected to be cheap (O(1) or close). Implementations
/// should treat unknown or stale keys as absent: no parent, no children, no
/// bounds.
pub trait NavTree<K>
where
    K: Copy + Eq,
{
    /// Parent of `node`, or `None` for a root or an unknown node.
    fn parent_of(&self, node: K) -> Option<K>;

    /// Children of `node` in document order.
    fn children_of(&self, node: K) -> &[K];

    /// Current bounding box of `node` in the shared coordinate space.
    ///
    /// Nodes without a box are never candidates, and navigating from a
    /// selected node without a box finds nothing.
    fn bounds(&self, node: K) -> Option<Rect>;

    /// Navigation role of `node`.
    ///
    /// Hosts decide focusability here: an element that cannot take focus
    /// right now should be reported as a [`NavRole::Wrapper`].
    fn role(&self, node: K) -> NavRole;

    /// Whether `node` is the preferred entry point of its enclosing group.
    fn is_initial(&self, node: K) -> bool;

    /// Whether `node` currently holds the selection.
    fn is_selected(&self, node: K) -> bool;
}

/// Mutable access to the selection marker.
///
/// This is the only write the navigation layer performs on the host tree.
pub trait NavTreeMut<K>: NavTree<K>
where
    K: Copy + Eq,
{
    /// Set or clear the selection marker on `node`.
    fn set_selected(&mut self, node: K, selected: bool);
}

/// Pre-order iterator over the strict descendants of a node.
///
/// Created by [`descendants`].
pub struct Descendants<'a, K, T: ?Sized> {
    tree: &'a T,
    stack: SmallVec<[K; 16]>,
}

impl<K: core::fmt::Debug, T: ?Sized> core::fmt::Debug for Descendants<'_, K, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Descendants")
            .field("pending", &self.stack.as_slice())
            .finish_non_exhaustive()
    }
}

/// Iterate the strict descendants of `node` in document (pre-order) order.
pub fn descendants<K, T>(tree: &T, node: K) -> Descendants<'_, K, T>
where
    K: Copy + Eq,
    T: NavTree<K> + ?Sized,
{
    let mut stack = SmallVec::new();
    stack.extend(tree.children_of(node).iter().rev().copied());
    Descendants { tree, stack }
}

impl<K, T> Iterator for Descendants<'_, K, T>
where
    K: Copy + Eq,
    T: NavTree<K> + ?Sized,
{
    type Item = K;

    fn next(&mut self) -> Option<K> {
        let node = self.stack.pop()?;
        self.stack
            .extend(self.tree.children_of(node).iter().rev().copied());
        Some(node)
    }
}
