// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for Understory Nav Tree.
//!
//! ## Feature
//!
//! Enable with `nav_tree_adapter`.
//!
//! ## Roles
//!
//! Roles are derived from [`NodeFlags`]:
//!
//! - [`NodeFlags::GROUP`] makes a node a [`NavRole::Group`], whether or not it
//!   is also marked as an item, while [`Tree::is_navigable`] holds. Hidden or
//!   inert groups degrade to [`NavRole::Wrapper`]; their contents are then
//!   judged one by one, and they are not focusable either.
//! - [`NodeFlags::ITEM`] makes a node a [`NavRole::Item`] only while
//!   [`Tree::is_focusable`] holds. Disabled, inert, hidden, or zero-sized items
//!   degrade to [`NavRole::Wrapper`], so they are never selected.
//! - Everything else is a [`NavRole::Wrapper`].
//!
//! Stale [`NodeId`]s behave like detached wrappers without bounds.

use kurbo::Rect;
use understory_nav_tree::{NodeFlags, NodeId, Tree};

use crate::{NavRole, NavTree, NavTreeMut};

impl NavTree<NodeId> for Tree {
    fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        Self::parent_of(self, node)
    }

    fn children_of(&self, node: NodeId) -> &[NodeId] {
        Self::children_of(self, node)
    }

    fn bounds(&self, node: NodeId) -> Option<Rect> {
        Self::bounds(self, node)
    }

    fn role(&self, node: NodeId) -> NavRole {
        let Some(flags) = self.flags(node) else {
            return NavRole::Wrapper;
        };
        if flags.contains(NodeFlags::GROUP) {
            if self.is_navigable(node) {
                NavRole::Group
            } else {
                NavRole::Wrapper
            }
        } else if flags.contains(NodeFlags::ITEM) && self.is_focusable(node) {
            NavRole::Item
        } else {
            NavRole::Wrapper
        }
    }

    fn is_initial(&self, node: NodeId) -> bool {
        self.flags(node)
            .is_some_and(|f| f.contains(NodeFlags::INITIAL))
    }

    fn is_selected(&self, node: NodeId) -> bool {
        self.flags(node)
            .is_some_and(|f| f.contains(NodeFlags::SELECTED))
    }
}

impl NavTreeMut<NodeId> for Tree {
    fn set_selected(&mut self, node: NodeId, selected: bool) {
        Self::set_selected(self, node, selected);
    }
}
