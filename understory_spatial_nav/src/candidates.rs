// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate enumeration within one navigation boundary.

use smallvec::SmallVec;

use crate::{NavRole, NavTree};

/// Iterator over the candidates directly selectable from a boundary.
///
/// Created by [`candidates_of`].
pub struct Candidates<'a, K, T: ?Sized> {
    tree: &'a T,
    exclude: K,
    stack: SmallVec<[K; 16]>,
}

impl<K: core::fmt::Debug, T: ?Sized> core::fmt::Debug for Candidates<'_, K, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Candidates")
            .field("exclude", &self.exclude)
            .field("pending", &self.stack.as_slice())
            .finish_non_exhaustive()
    }
}

/// Enumerate the nodes that compete for selection inside `boundary`.
///
/// Walks the strict descendants of `boundary` in document order:
///
/// - `exclude` is skipped together with its whole subtree, so a container is
///   never offered its own children as neighbours.
/// - [`NavRole::Item`] and [`NavRole::Group`] nodes are yielded and their
///   subtrees are not entered. A nested group competes as one box.
/// - [`NavRole::Wrapper`] nodes are not yielded; their children are visited.
///
/// If `boundary == exclude`, nothing is yielded.
///
/// ```rust
/// # use kurbo::Rect;
/// # use understory_spatial_nav::{NavRole, NavTree, candidates_of};
/// # struct Flat { children: [Vec<u8>; 5] }
/// # impl NavTree<u8> for Flat {
/// #     fn parent_of(&self, n: u8) -> Option<u8> { (n != 0).then_some(if n == 4 { 3 } else { 0 }) }
/// #     fn children_of(&self, n: u8) -> &[u8] { &self.children[n as usize] }
/// #     fn bounds(&self, _: u8) -> Option<Rect> { Some(Rect::ZERO) }
/// #     fn role(&self, n: u8) -> NavRole {
/// #         match n { 1 | 2 | 4 => NavRole::Item, 3 => NavRole::Group, _ => NavRole::Wrapper }
/// #     }
/// #     fn is_initial(&self, _: u8) -> bool { false }
/// #     fn is_selected(&self, _: u8) -> bool { false }
/// # }
/// // root(0) -> [item 1, item 2, group 3 -> [item 4]]
/// # let tree = Flat { children: [vec![1, 2, 3], vec![], vec![], vec![4], vec![]] };
/// let found: Vec<u8> = candidates_of(&tree, 0, 1).collect();
/// assert_eq!(found, [2, 3]);
/// ```
pub fn candidates_of<K, T>(tree: &T, boundary: K, exclude: K) -> Candidates<'_, K, T>
where
    K: Copy + Eq,
    T: NavTree<K> + ?Sized,
{
    let mut stack = SmallVec::new();
    if boundary != exclude {
        stack.extend(tree.children_of(boundary).iter().rev().copied());
    }
    Candidates {
        tree,
        exclude,
        stack,
    }
}

impl<K, T> Iterator for Candidates<'_, K, T>
where
    K: Copy + Eq,
    T: NavTree<K> + ?Sized,
{
    type Item = K;

    fn next(&mut self) -> Option<K> {
        while let Some(node) = self.stack.pop() {
            if node == self.exclude {
                continue;
            }
            match self.tree.role(node) {
                NavRole::Item | NavRole::Group => return Some(node),
                NavRole::Wrapper => {
                    self.stack
                        .extend(self.tree.children_of(node).iter().rev().copied());
                }
            }
        }
        None
    }
}
