// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the navigation tree: node identifiers, flags, and node data.

use kurbo::Rect;

/// Identifier for a node in the tree (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Node flags describing focusability inputs and navigation markers.
    ///
    /// The first group of flags feeds [`Tree::is_focusable`](crate::Tree::is_focusable).
    /// The second group marks the node's navigation role and state.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is rendered. A hidden node also hides its whole subtree from focus.
        const VISIBLE  = 0b0000_0001;
        /// Node is disabled (for example a disabled button or input).
        const DISABLED = 0b0000_0010;
        /// Node is inert and ignores user interaction, along with its whole subtree.
        const INERT    = 0b0000_0100;
        /// Node is a selectable item.
        const ITEM     = 0b0000_1000;
        /// Node is a group: a navigation boundary with its own nested selection.
        const GROUP    = 0b0001_0000;
        /// Node is preferred when its enclosing group is entered.
        const INITIAL  = 0b0010_0000;
        /// Node currently holds the selection.
        const SELECTED = 0b0100_0000;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Per-node data supplied by the host.
#[derive(Clone, Debug)]
pub struct NavNode {
    /// Bounding box in the shared (viewport) coordinate space, y pointing down.
    ///
    /// The tree does not perform layout; hosts refresh this before navigating.
    pub bounds: Rect,
    /// Focusability and navigation flags.
    pub flags: NodeFlags,
}

impl Default for NavNode {
    fn default() -> Self {
        Self {
            bounds: Rect::ZERO,
            flags: NodeFlags::default(),
        }
    }
}

impl NavNode {
    /// A visible selectable item occupying `bounds`.
    pub fn item(bounds: Rect) -> Self {
        Self {
            bounds,
            flags: NodeFlags::VISIBLE | NodeFlags::ITEM,
        }
    }

    /// A visible group occupying `bounds`.
    pub fn group(bounds: Rect) -> Self {
        Self {
            bounds,
            flags: NodeFlags::VISIBLE | NodeFlags::GROUP,
        }
    }

    /// A visible plain wrapper occupying `bounds`.
    pub fn wrapper(bounds: Rect) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    /// Add `flags` to this node.
    #[must_use]
    pub fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.flags |= flags;
        self
    }
}
