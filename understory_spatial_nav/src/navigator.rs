// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hierarchical search: closest candidate per boundary, escalating outward.
//!
//! ## Scope levels
//!
//! A search starts at a *scope anchor* (normally the selected node). The
//! anchor's nearest enclosing [`NavRole::Group`] is the first *boundary*; the
//! candidates of that level are the boundary's selectable descendants minus
//! the anchor's subtree. If none of them is reachable, the boundary becomes the
//! anchor of the next level and its own enclosing group (or the root) becomes
//! the boundary. The level whose boundary is the root is the last one.
//!
//! The search is greedy: the first level with a reachable candidate wins, and
//! once escalated, sibling groups are only compared by their outer boxes.

use core::fmt::Debug;

use kurbo::Rect;

use crate::{Direction, NavRole, NavTree, candidates_of, distance};

/// One level of a hierarchical search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Scope<K> {
    /// Node whose subtree is searched at this level.
    pub boundary: K,
    /// Node excluded (with its subtree) from this level's candidates.
    pub anchor: K,
}

/// Nearest strict ancestor of `node` that is a [`NavRole::Group`], or `root`.
///
/// The walk stops at `root`: it is returned when no group lies between, when
/// `node` is `root` itself, and when `node`'s ancestry never reaches `root`.
pub fn boundary_of<K, T>(tree: &T, root: K, node: K) -> K
where
    K: Copy + Eq,
    T: NavTree<K> + ?Sized,
{
    if node == root {
        return root;
    }
    let mut current = tree.parent_of(node);
    while let Some(p) = current {
        if p == root || tree.role(p) == NavRole::Group {
            return p;
        }
        current = tree.parent_of(p);
    }
    root
}

/// Iterator over the scope levels of a search, innermost first.
///
/// Created by [`scopes`].
pub struct Scopes<'a, K, T: ?Sized> {
    tree: &'a T,
    root: K,
    next_anchor: Option<K>,
}

impl<K: Debug, T: ?Sized> Debug for Scopes<'_, K, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scopes")
            .field("root", &self.root)
            .field("next_anchor", &self.next_anchor)
            .finish_non_exhaustive()
    }
}

/// Iterate the scope levels visited when searching from `anchor`.
///
/// Every level's boundary is a strict ancestor of its anchor (or `root`), so
/// the sequence is at most as long as the tree is deep and always ends with a
/// level whose boundary is `root`.
pub fn scopes<K, T>(tree: &T, root: K, anchor: K) -> Scopes<'_, K, T>
where
    K: Copy + Eq,
    T: NavTree<K> + ?Sized,
{
    Scopes {
        tree,
        root,
        next_anchor: Some(anchor),
    }
}

impl<K, T> Iterator for Scopes<'_, K, T>
where
    K: Copy + Eq,
    T: NavTree<K> + ?Sized,
{
    type Item = Scope<K>;

    fn next(&mut self) -> Option<Scope<K>> {
        let anchor = self.next_anchor.take()?;
        let boundary = boundary_of(self.tree, self.root, anchor);
        if boundary != self.root {
            self.next_anchor = Some(boundary);
        }
        Some(Scope { boundary, anchor })
    }
}

/// Closest reachable candidate of a single scope level.
///
/// Ties go to the candidate met first in document order.
pub fn closest_in_scope<K, T>(
    tree: &T,
    scope: Scope<K>,
    reference: Rect,
    direction: Direction,
) -> Option<K>
where
    K: Copy + Eq,
    T: NavTree<K> + ?Sized,
{
    let mut best: Option<(K, f64)> = None;
    for candidate in candidates_of(tree, scope.boundary, scope.anchor) {
        let Some(bounds) = tree.bounds(candidate) else {
            continue;
        };
        let Some(d) = distance(reference, bounds, direction) else {
            continue;
        };
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((candidate, d));
        }
    }
    best.map(|(node, _)| node)
}

/// Find the next node in `direction` from `selected`.
///
/// Distances are measured from `selected`'s box; `scope_anchor` decides where
/// the search starts (pass `selected` itself for a normal step). Levels are
/// tried innermost first until one yields a reachable candidate. Returns `None`
/// when the root level is exhausted, or when `selected` has no box.
///
/// The result is an [`NavRole::Item`] or a [`NavRole::Group`]; it is never
/// `scope_anchor` nor one of its descendants.
pub fn search_next<K, T>(
    tree: &T,
    root: K,
    direction: Direction,
    selected: K,
    scope_anchor: K,
) -> Option<K>
where
    K: Copy + Eq + Debug,
    T: NavTree<K> + ?Sized,
{
    let Some(reference) = tree.bounds(selected) else {
        tracing::debug!(?selected, "selected node has no bounds");
        return None;
    };
    for scope in scopes(tree, root, scope_anchor) {
        if let Some(found) = closest_in_scope(tree, scope, reference, direction) {
            return Some(found);
        }
        tracing::trace!(
            boundary = ?scope.boundary,
            %direction,
            "no candidate in boundary"
        );
    }
    tracing::debug!(?selected, %direction, "search exhausted at root");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestTree;
    use alloc::vec::Vec;

    fn boxed(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::new(x, y, x + w, y + h)
    }

    #[test]
    fn three_in_a_row_picks_the_nearest() {
        let mut t = TestTree::new();
        let root = t.root();
        let a = t.item(root, boxed(0.0, 0.0, 40.0, 40.0));
        let b = t.item(root, boxed(100.0, 0.0, 40.0, 40.0));
        let c = t.item(root, boxed(200.0, 0.0, 40.0, 40.0));

        assert_eq!(search_next(&t, root, Direction::Right, a, a), Some(b));
        assert_eq!(search_next(&t, root, Direction::Right, b, b), Some(c));
        assert_eq!(search_next(&t, root, Direction::Left, c, c), Some(b));
        assert_eq!(search_next(&t, root, Direction::Right, c, c), None);
    }

    #[test]
    fn ties_go_to_document_order() {
        let mut t = TestTree::new();
        let root = t.root();
        let origin = t.item(root, boxed(50.0, 0.0, 10.0, 10.0));
        // Mirror images below the origin: equal distance.
        let first = t.item(root, boxed(30.0, 50.0, 10.0, 10.0));
        let _second = t.item(root, boxed(70.0, 50.0, 10.0, 10.0));

        assert_eq!(search_next(&t, root, Direction::Down, origin, origin), Some(first));
    }

    #[test]
    fn boundary_stops_at_nearest_group_or_root() {
        let mut t = TestTree::new();
        let root = t.root();
        let panel = t.group(root, Rect::ZERO);
        let wrap = t.wrapper(panel, Rect::ZERO);
        let item = t.item(wrap, Rect::ZERO);
        let loose = t.item(root, Rect::ZERO);

        assert_eq!(boundary_of(&t, root, item), panel);
        assert_eq!(boundary_of(&t, root, panel), root);
        assert_eq!(boundary_of(&t, root, loose), root);
        assert_eq!(boundary_of(&t, root, root), root);

        // A subtree root passed as `root` caps the walk.
        assert_eq!(boundary_of(&t, wrap, item), wrap);
    }

    #[test]
    fn scope_levels_escalate_to_root() {
        let mut t = TestTree::new();
        let root = t.root();
        let outer = t.group(root, Rect::ZERO);
        let inner = t.group(outer, Rect::ZERO);
        let item = t.item(inner, Rect::ZERO);

        let levels: Vec<_> = scopes(&t, root, item).collect();
        assert_eq!(
            levels,
            [
                Scope { boundary: inner, anchor: item },
                Scope { boundary: outer, anchor: inner },
                Scope { boundary: root, anchor: outer },
            ]
        );
        assert_eq!(scopes(&t, root, root).count(), 1);
    }

    #[test]
    fn escalates_out_of_group_to_sibling_group() {
        let mut t = TestTree::new();
        let root = t.root();
        let a = t.group(root, boxed(0.0, 0.0, 100.0, 40.0));
        let a1 = t.item(a, boxed(0.0, 0.0, 40.0, 40.0));
        let a2 = t.item(a, boxed(60.0, 0.0, 40.0, 40.0));
        let b = t.group(root, boxed(150.0, 0.0, 100.0, 40.0));
        let _b1 = t.item(b, boxed(150.0, 0.0, 40.0, 40.0));

        // Inside A first.
        assert_eq!(search_next(&t, root, Direction::Right, a1, a1), Some(a2));
        // Past A's last item: escalate and find B as a whole.
        assert_eq!(search_next(&t, root, Direction::Right, a2, a2), Some(b));
    }

    #[test]
    fn inner_candidates_win_over_closer_outer_ones() {
        let mut t = TestTree::new();
        let root = t.root();
        let panel = t.group(root, boxed(0.0, 0.0, 300.0, 40.0));
        let start = t.item(panel, boxed(0.0, 0.0, 40.0, 40.0));
        let far_inside = t.item(panel, boxed(260.0, 0.0, 40.0, 40.0));
        // Closer, but outside the panel's boundary.
        let _near_outside = t.item(root, boxed(50.0, 0.0, 40.0, 40.0));

        assert_eq!(
            search_next(&t, root, Direction::Right, start, start),
            Some(far_inside)
        );
    }

    #[test]
    fn never_returns_anchor_or_its_descendants() {
        let mut t = TestTree::new();
        let root = t.root();
        let panel = t.group(root, boxed(0.0, 0.0, 200.0, 200.0));
        let inside = t.item(panel, boxed(100.0, 100.0, 20.0, 20.0));
        let selected = t.item(root, boxed(0.0, 300.0, 10.0, 10.0));

        // Anchoring at the panel hides it and its contents.
        assert_eq!(search_next(&t, root, Direction::Up, selected, panel), None);
        assert_eq!(search_next(&t, root, Direction::Up, selected, selected), Some(panel));
        assert_ne!(search_next(&t, root, Direction::Up, selected, selected), Some(inside));
    }

    #[test]
    fn candidates_without_bounds_are_skipped() {
        let mut t = TestTree::new();
        let root = t.root();
        let origin = t.item(root, boxed(0.0, 0.0, 10.0, 10.0));
        let _unplaced = t.add(root, NavRole::Item, None);
        let placed = t.item(root, boxed(0.0, 50.0, 10.0, 10.0));

        assert_eq!(search_next(&t, root, Direction::Down, origin, origin), Some(placed));

        let unplaced_origin = t.add(root, NavRole::Item, None);
        assert_eq!(
            search_next(&t, root, Direction::Down, unplaced_origin, unplaced_origin),
            None
        );
    }
}
