// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, updates, queries.

use alloc::vec::Vec;
use kurbo::Rect;

use crate::types::{NavNode, NodeFlags, NodeId};

/// Arena of navigable nodes.
///
/// Nodes are addressed by generational [`NodeId`]s: removing a node frees its
/// slot, and any id that still points at the old occupant becomes stale.
/// Queries on stale ids return `None` (or an empty slice) instead of
/// panicking.
///
/// Unlike a layout or scene tree, this tree applies no transforms: each
/// node's [`NavNode::bounds`] is already expressed in the shared coordinate
/// space that directional navigation compares boxes in.
///
/// ## Example
///
/// ```rust
/// use kurbo::Rect;
/// use understory_nav_tree::{NavNode, NodeFlags, Tree};
///
/// let mut tree = Tree::new();
/// let root = tree.insert(None, NavNode::wrapper(Rect::new(0.0, 0.0, 100.0, 100.0)));
/// let item = tree.insert(Some(root), NavNode::item(Rect::new(10.0, 10.0, 30.0, 30.0)));
///
/// assert_eq!(tree.parent_of(item), Some(root));
/// assert!(tree.is_focusable(item));
///
/// tree.set_flags(item, NodeFlags::ITEM | NodeFlags::DISABLED | NodeFlags::VISIBLE);
/// assert!(!tree.is_focusable(item));
/// ```
#[derive(Clone, Default)]
pub struct Tree {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Tree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    data: NavNode,
}

impl Node {
    fn new(generation: u32, data: NavNode) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            data,
        }
    }
}

impl Tree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Insert a new node as the last child of `parent` (or as a root if `None`).
    ///
    /// Inserting under a stale `parent` creates a detached root.
    pub fn insert(&mut self, parent: Option<NodeId>, data: NavNode) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, data));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, data)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = NodeId::new(idx, generation);
        if let Some(p) = parent
            && self.is_alive(p)
        {
            self.link_parent(id, p);
        }
        id
    }

    /// Remove a node and its whole subtree.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        // Iterative so deep trees cannot overflow the stack.
        let mut stack = alloc::vec![id];
        while let Some(current) = stack.pop() {
            let node = self.nodes[current.idx()].take();
            if let Some(node) = node {
                stack.extend(node.children);
                self.free_list.push(current.idx());
            }
        }
    }

    /// Reparent `id` as the last child of `new_parent` (or detach it if `None`).
    ///
    /// Requests that would make a node its own ancestor are ignored.
    pub fn reparent(&mut self, id: NodeId, new_parent: Option<NodeId>) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(p) = new_parent
            && (!self.is_alive(p) || p == id || self.is_ancestor(id, p))
        {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        if let Some(p) = new_parent {
            self.link_parent(id, p);
        }
    }

    /// Update the bounding box of a node.
    pub fn set_bounds(&mut self, id: NodeId, bounds: Rect) {
        if let Some(n) = self.node_opt_mut(id) {
            n.data.bounds = bounds;
        }
    }

    /// Replace the flags of a node.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(n) = self.node_opt_mut(id) {
            n.data.flags = flags;
        }
    }

    /// Set or clear [`NodeFlags::SELECTED`] on a node, leaving its other flags untouched.
    ///
    /// The tree does not enforce a single selection; that is the job of the
    /// navigation layer driving it.
    pub fn set_selected(&mut self, id: NodeId, selected: bool) {
        if let Some(n) = self.node_opt_mut(id) {
            n.data.flags.set(NodeFlags::SELECTED, selected);
        }
    }

    /// Returns true if `id` refers to a live node.
    ///
    /// A `NodeId` is considered live if its slot exists and its generation matches
    /// the current generation stored in that slot.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    /// Returns the parent of a node if live, or `None` for roots or stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|node| node.parent)
    }

    /// Get the children of a node in document order, or an empty slice if the node is stale.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.node_opt(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the bounding box of a live node.
    pub fn bounds(&self, id: NodeId) -> Option<Rect> {
        self.node_opt(id).map(|node| node.data.bounds)
    }

    /// Returns the flags of a live node.
    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        self.node_opt(id).map(|node| node.data.flags)
    }

    /// Whether `ancestor` is a strict ancestor of `node`.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.parent_of(node);
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.parent_of(p);
        }
        false
    }

    /// Whether a node takes part in navigation at all.
    ///
    /// A node is navigable when it is live, and it and every ancestor are
    /// [`NodeFlags::VISIBLE`] and not [`NodeFlags::INERT`]. Collapsed or hidden
    /// panels keep their last bounds but drop out here.
    pub fn is_navigable(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(c) = current {
            let Some(n) = self.node_opt(c) else {
                return false;
            };
            let flags = n.data.flags;
            if !flags.contains(NodeFlags::VISIBLE) || flags.contains(NodeFlags::INERT) {
                return false;
            }
            current = n.parent;
        }
        true
    }

    /// Whether a node can currently take keyboard focus.
    ///
    /// A node is focusable when it is [navigable](Self::is_navigable), not
    /// [`NodeFlags::DISABLED`], and has a non-empty bounding box (zero width or
    /// height counts as not rendered).
    pub fn is_focusable(&self, id: NodeId) -> bool {
        let Some(node) = self.node_opt(id) else {
            return false;
        };
        if node.data.flags.contains(NodeFlags::DISABLED) {
            return false;
        }
        let bounds = node.data.bounds;
        if !(bounds.width() > 0.0 && bounds.height() > 0.0) {
            return false;
        }
        self.is_navigable(id)
    }

    /// Get the next node in depth-first (document) order.
    ///
    /// Returns `None` if no next node exists or if the current node is stale.
    /// This is a standard tree traversal that does not wrap around.
    pub fn next_depth_first(&self, current: NodeId) -> Option<NodeId> {
        if !self.is_alive(current) {
            return None;
        }

        if let Some(&first_child) = self.children_of(current).first() {
            return Some(first_child);
        }

        let mut node = current;
        while let Some(parent) = self.parent_of(node) {
            if let Some(next_sibling) = self.next_sibling(node) {
                return Some(next_sibling);
            }
            node = parent;
        }
        None
    }

    // --- internals ---

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent_of(node)?;
        let siblings = self.children_of(parent);
        let pos = siblings.iter().position(|&id| id == node)?;
        siblings.get(pos + 1).copied()
    }

    /// Access a live node; panics if `id` is stale.
    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    /// Access a live node mutably; panics if `id` is stale.
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        let parent_node = self.node_mut(parent);
        parent_node.children.push(id);
        self.node_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        let p = self.node_mut(parent);
        p.children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn square(x: f64, y: f64) -> Rect {
        Rect::new(x, y, x + 10.0, y + 10.0)
    }

    #[test]
    fn insert_links_children_in_order() {
        let mut tree = Tree::new();
        let root = tree.insert(None, NavNode::wrapper(Rect::new(0.0, 0.0, 100.0, 100.0)));
        let a = tree.insert(Some(root), NavNode::item(square(0.0, 0.0)));
        let b = tree.insert(Some(root), NavNode::item(square(20.0, 0.0)));

        assert_eq!(tree.children_of(root), &[a, b]);
        assert_eq!(tree.parent_of(a), Some(root));
        assert_eq!(tree.parent_of(root), None);
        assert_eq!(tree.bounds(b), Some(square(20.0, 0.0)));
    }

    #[test]
    fn remove_drops_subtree_and_stales_ids() {
        let mut tree = Tree::new();
        let root = tree.insert(None, NavNode::default());
        let group = tree.insert(Some(root), NavNode::group(square(0.0, 0.0)));
        let item = tree.insert(Some(group), NavNode::item(square(0.0, 0.0)));

        tree.remove(group);
        assert!(!tree.is_alive(group));
        assert!(!tree.is_alive(item));
        assert!(tree.children_of(root).is_empty());
        assert_eq!(tree.flags(item), None);

        // Slots are reused with a bumped generation; old ids stay stale.
        let fresh = tree.insert(Some(root), NavNode::item(square(50.0, 0.0)));
        assert!(tree.is_alive(fresh));
        assert!(!tree.is_alive(group));
        assert!(!tree.is_alive(item));
    }

    #[test]
    fn reparent_moves_node_and_rejects_cycles() {
        let mut tree = Tree::new();
        let root = tree.insert(None, NavNode::default());
        let a = tree.insert(Some(root), NavNode::group(square(0.0, 0.0)));
        let b = tree.insert(Some(root), NavNode::group(square(20.0, 0.0)));
        let leaf = tree.insert(Some(a), NavNode::item(square(0.0, 0.0)));

        tree.reparent(leaf, Some(b));
        assert_eq!(tree.parent_of(leaf), Some(b));
        assert!(tree.children_of(a).is_empty());

        // `b` cannot move under its own descendant.
        tree.reparent(b, Some(leaf));
        assert_eq!(tree.parent_of(b), Some(root));
        assert!(tree.is_ancestor(root, leaf));
        assert!(!tree.is_ancestor(leaf, root));
    }

    #[test]
    fn depth_first_visits_document_order() {
        let mut tree = Tree::new();
        let root = tree.insert(None, NavNode::default());
        let a = tree.insert(Some(root), NavNode::default());
        let a1 = tree.insert(Some(a), NavNode::default());
        let b = tree.insert(Some(root), NavNode::default());

        let mut order = vec![root];
        let mut cur = root;
        while let Some(next) = tree.next_depth_first(cur) {
            order.push(next);
            cur = next;
        }
        assert_eq!(order, vec![root, a, a1, b]);
    }

    #[test]
    fn focusability_follows_flags_and_geometry() {
        let mut tree = Tree::new();
        let root = tree.insert(None, NavNode::wrapper(Rect::new(0.0, 0.0, 100.0, 100.0)));
        let panel = tree.insert(Some(root), NavNode::group(Rect::new(0.0, 0.0, 50.0, 50.0)));
        let button = tree.insert(Some(panel), NavNode::item(square(5.0, 5.0)));
        let empty = tree.insert(Some(panel), NavNode::item(Rect::new(20.0, 20.0, 20.0, 30.0)));

        assert!(tree.is_focusable(button));
        assert!(!tree.is_focusable(empty), "zero-width boxes are not rendered");

        tree.set_flags(button, NodeFlags::VISIBLE | NodeFlags::ITEM | NodeFlags::INERT);
        assert!(!tree.is_focusable(button));
        tree.set_flags(button, NodeFlags::VISIBLE | NodeFlags::ITEM);
        assert!(tree.is_focusable(button));

        // Hiding an ancestor hides the whole subtree.
        tree.set_flags(panel, NodeFlags::GROUP);
        assert!(!tree.is_focusable(button));
    }

    #[test]
    fn navigability_ignores_disabled_and_size() {
        let mut tree = Tree::new();
        let root = tree.insert(None, NavNode::wrapper(Rect::new(0.0, 0.0, 100.0, 100.0)));
        let panel = tree.insert(Some(root), NavNode::group(Rect::ZERO));
        let off = tree.insert(
            Some(panel),
            NavNode::item(square(0.0, 0.0)).with_flags(NodeFlags::DISABLED),
        );

        assert!(tree.is_navigable(panel));
        assert!(tree.is_navigable(off));
        assert!(!tree.is_focusable(off));

        tree.set_flags(panel, NodeFlags::VISIBLE | NodeFlags::GROUP | NodeFlags::INERT);
        assert!(!tree.is_navigable(panel));
        assert!(!tree.is_navigable(off), "inert covers the whole subtree");

        tree.set_flags(panel, NodeFlags::VISIBLE | NodeFlags::GROUP);
        assert!(tree.is_navigable(off));

        tree.set_flags(panel, NodeFlags::GROUP);
        assert!(!tree.is_navigable(panel));
        assert!(!tree.is_navigable(off));

        tree.remove(panel);
        assert!(!tree.is_navigable(panel));
    }

    #[test]
    fn set_bounds_moves_node_and_updates_focusability() {
        let mut tree = Tree::new();
        let root = tree.insert(None, NavNode::wrapper(Rect::new(0.0, 0.0, 100.0, 100.0)));
        let item = tree.insert(Some(root), NavNode::item(square(0.0, 0.0)));

        tree.set_bounds(item, square(40.0, 60.0));
        assert_eq!(tree.bounds(item), Some(square(40.0, 60.0)));
        assert!(tree.is_focusable(item));

        // Collapsed to zero height by layout.
        tree.set_bounds(item, Rect::new(40.0, 60.0, 50.0, 60.0));
        assert!(!tree.is_focusable(item));

        tree.set_bounds(item, square(5.0, 5.0));
        assert!(tree.is_focusable(item));

        // Stale ids are ignored.
        tree.remove(item);
        tree.set_bounds(item, square(0.0, 0.0));
        assert_eq!(tree.bounds(item), None);
    }

    #[test]
    fn set_selected_toggles_only_selection() {
        let mut tree = Tree::new();
        let root = tree.insert(None, NavNode::default());
        let item = tree.insert(
            Some(root),
            NavNode::item(square(0.0, 0.0)).with_flags(NodeFlags::INITIAL),
        );

        tree.set_selected(item, true);
        assert_eq!(
            tree.flags(item),
            Some(NodeFlags::VISIBLE | NodeFlags::ITEM | NodeFlags::INITIAL | NodeFlags::SELECTED)
        );
        tree.set_selected(item, false);
        assert_eq!(
            tree.flags(item),
            Some(NodeFlags::VISIBLE | NodeFlags::ITEM | NodeFlags::INITIAL)
        );
    }
}
