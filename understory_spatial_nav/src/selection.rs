// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection state: bootstrap, hand-off, and entering groups.

use core::fmt::Debug;

use crate::{
    Direction, FocusRequest, FocusSink, NavRole, NavTree, NavTreeMut, ScrollIntoView,
    descendants, search_next,
};

/// Configuration for a [`SelectionController`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SelectionOptions {
    /// Scroll behavior attached to every [`FocusRequest`].
    pub scroll: Option<ScrollIntoView>,
    /// Whether the very first selection (made when nothing was selected) also
    /// requests focus.
    pub focus_on_bootstrap: bool,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            scroll: Some(ScrollIntoView::default()),
            focus_on_bootstrap: true,
        }
    }
}

/// Result of a selection request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome<K> {
    /// Nothing changed: no candidate, an empty group, or already selected.
    Unchanged,
    /// The selection moved.
    Selected {
        /// Previously selected node, `None` when bootstrapping.
        previous: Option<K>,
        /// Newly selected node.
        current: K,
    },
}

impl<K> Outcome<K> {
    /// Whether the selection changed.
    pub fn is_change(&self) -> bool {
        matches!(self, Self::Selected { .. })
    }
}

/// Error returned by [`SelectionController::select`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectError<K> {
    /// The node is neither an item nor a group.
    #[error("node {0:?} is not a selectable item or group")]
    NotSelectable(K),
    /// The node is a group without any selectable item inside.
    #[error("group {0:?} has no selectable item")]
    EmptyGroup(K),
}

/// The node holding the selection within `root`'s subtree, if any.
///
/// Scans in document order, `root` included, and returns the first match.
pub fn selected<K, T>(tree: &T, root: K) -> Option<K>
where
    K: Copy + Eq,
    T: NavTree<K> + ?Sized,
{
    if tree.is_selected(root) {
        return Some(root);
    }
    descendants(tree, root).find(|&node| tree.is_selected(node))
}

/// The item selected when `container` is entered from outside.
///
/// This is the first descendant of `container` in document order that is an
/// [`NavRole::Item`] marked initial, or failing that, the first
/// [`NavRole::Item`]. Nested groups are searched too. Non-item nodes marked
/// initial are ignored.
pub fn initial_selectable<K, T>(tree: &T, container: K) -> Option<K>
where
    K: Copy + Eq,
    T: NavTree<K> + ?Sized,
{
    let mut first_item = None;
    for node in descendants(tree, container) {
        if tree.role(node) != NavRole::Item {
            continue;
        }
        if tree.is_initial(node) {
            return Some(node);
        }
        first_item.get_or_insert(node);
    }
    first_item
}

/// Drives directional navigation over a host tree.
///
/// The controller keeps no state between calls; the selection lives in the
/// host tree and every call names its `root` explicitly. Within a call, the
/// tree is only read until the search has committed to a target, then the old
/// marker is cleared, the new one set, and a single [`FocusRequest`] is sent.
///
/// ```rust
/// # use kurbo::Rect;
/// # use understory_spatial_nav::{NavRole, NavTree, NavTreeMut};
/// # #[derive(Default)]
/// # struct Row { selected: Option<u32> }
/// # const KIDS: [u32; 3] = [1, 2, 3];
/// # impl NavTree<u32> for Row {
/// #     fn parent_of(&self, n: u32) -> Option<u32> { (n != 0).then_some(0) }
/// #     fn children_of(&self, n: u32) -> &[u32] { if n == 0 { &KIDS } else { &[] } }
/// #     fn bounds(&self, n: u32) -> Option<Rect> {
/// #         let x = f64::from(n) * 100.0;
/// #         (n != 0).then(|| Rect::new(x, 0.0, x + 40.0, 40.0))
/// #     }
/// #     fn role(&self, n: u32) -> NavRole { if n == 0 { NavRole::Wrapper } else { NavRole::Item } }
/// #     fn is_initial(&self, _: u32) -> bool { false }
/// #     fn is_selected(&self, n: u32) -> bool { self.selected == Some(n) }
/// # }
/// # impl NavTreeMut<u32> for Row {
/// #     fn set_selected(&mut self, n: u32, on: bool) {
/// #         if on { self.selected = Some(n) } else if self.selected == Some(n) { self.selected = None }
/// #     }
/// # }
/// use understory_spatial_nav::{Direction, FocusRequest, SelectionController, selected};
///
/// // Three items in a row under root `0`.
/// let mut row = Row::default();
/// let nav = SelectionController::default();
/// let mut focused = Vec::new();
/// let mut sink = |req: FocusRequest<u32>| focused.push(req.node);
///
/// // The first request selects the initial item.
/// nav.advance(&mut row, 0, Direction::Right, &mut sink);
/// assert_eq!(selected(&row, 0), Some(1));
///
/// nav.advance(&mut row, 0, Direction::Right, &mut sink);
/// assert_eq!(selected(&row, 0), Some(2));
/// assert_eq!(focused, [1, 2]);
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct SelectionController {
    /// Options applied to every call.
    pub options: SelectionOptions,
}

impl SelectionController {
    /// Create a controller with the given options.
    pub fn new(options: SelectionOptions) -> Self {
        Self { options }
    }

    /// Move the selection one step in `direction`.
    ///
    /// - With no selection, selects `root`'s initial selectable item.
    /// - Otherwise searches from the selected node. An item found is selected
    ///   directly; a group found is entered at its initial selectable item.
    /// - Finding nothing, or a group with nothing selectable, leaves the
    ///   selection as it was and returns [`Outcome::Unchanged`].
    pub fn advance<K, T, F>(
        &self,
        tree: &mut T,
        root: K,
        direction: Direction,
        sink: &mut F,
    ) -> Outcome<K>
    where
        K: Copy + Eq + Debug,
        T: NavTreeMut<K> + ?Sized,
        F: FocusSink<K> + ?Sized,
    {
        let Some(current) = selected(tree, root) else {
            let Some(initial) = initial_selectable(tree, root) else {
                tracing::debug!(?root, "nothing selectable");
                return Outcome::Unchanged;
            };
            tracing::debug!(node = ?initial, "bootstrap selection");
            tree.set_selected(initial, true);
            if self.options.focus_on_bootstrap {
                sink.apply_focus(self.request(tree, initial));
            }
            return Outcome::Selected {
                previous: None,
                current: initial,
            };
        };

        let Some(found) = search_next(tree, root, direction, current, current) else {
            return Outcome::Unchanged;
        };
        let target = match tree.role(found) {
            NavRole::Item => found,
            NavRole::Group => {
                let Some(entry) = initial_selectable(tree, found) else {
                    tracing::debug!(group = ?found, "entered group has no selectable item");
                    return Outcome::Unchanged;
                };
                entry
            }
            NavRole::Wrapper => return Outcome::Unchanged,
        };
        self.hand_off(tree, sink, Some(current), target)
    }

    /// Select `node` programmatically.
    ///
    /// Items are selected directly and groups are entered at their initial
    /// selectable item. Selecting the node that is already selected changes
    /// nothing and sends no focus request.
    pub fn select<K, T, F>(
        &self,
        tree: &mut T,
        root: K,
        node: K,
        sink: &mut F,
    ) -> Result<Outcome<K>, SelectError<K>>
    where
        K: Copy + Eq + Debug,
        T: NavTreeMut<K> + ?Sized,
        F: FocusSink<K> + ?Sized,
    {
        let target = match tree.role(node) {
            NavRole::Item => node,
            NavRole::Group => {
                initial_selectable(tree, node).ok_or(SelectError::EmptyGroup(node))?
            }
            NavRole::Wrapper => return Err(SelectError::NotSelectable(node)),
        };
        let current = selected(tree, root);
        if current == Some(target) {
            return Ok(Outcome::Unchanged);
        }
        Ok(self.hand_off(tree, sink, current, target))
    }

    fn hand_off<K, T, F>(
        &self,
        tree: &mut T,
        sink: &mut F,
        previous: Option<K>,
        current: K,
    ) -> Outcome<K>
    where
        K: Copy + Eq + Debug,
        T: NavTreeMut<K> + ?Sized,
        F: FocusSink<K> + ?Sized,
    {
        tracing::debug!(?previous, ?current, "selection moved");
        if let Some(previous) = previous {
            tree.set_selected(previous, false);
        }
        tree.set_selected(current, true);
        sink.apply_focus(self.request(tree, current));
        Outcome::Selected { previous, current }
    }

    fn request<K, T>(&self, tree: &T, node: K) -> FocusRequest<K>
    where
        K: Copy + Eq,
        T: NavTree<K> + ?Sized,
    {
        FocusRequest {
            node,
            bounds: tree.bounds(node),
            scroll: self.options.scroll,
        }
    }
}
