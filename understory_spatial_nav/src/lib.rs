// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_spatial_nav --heading-base-level=0

//! Understory Spatial Nav: directional focus navigation over nested groups.
//!
//! Given the selected element and an arrow direction, this crate picks the
//! element that is geometrically closest in that direction. Elements live in
//! a host-owned tree where some nodes are **groups** (panels, toolbars, grids)
//! that scope navigation: a search first looks for neighbours inside the
//! innermost group and only escalates to the enclosing group when nothing
//! inside is reachable.
//!
//! The crate is layered:
//!
//! - **Geometry** ([`distance`]): a pure directional distance between two
//!   [`kurbo::Rect`]s, or `None` when the candidate is not ahead of the
//!   reference.
//! - **Candidates** ([`candidates_of`]): the items and groups directly
//!   selectable inside one boundary. Nested groups compete as a single box.
//! - **Search** ([`search_next`]): closest candidate per scope level,
//!   escalating outward until the root is exhausted.
//! - **Selection** ([`SelectionController`]): bootstrap, hand-off, entering a
//!   group at its initial selectable item, and the focus side effect.
//!
//! The host tree is read through the [`NavTree`] trait and written only through
//! [`NavTreeMut::set_selected`]. Focus changes are delivered as
//! [`FocusRequest`]s to a [`FocusSink`]. Every call receives the tree root
//! explicitly; there is no global "current document".
//!
//! ## Minimal example
//!
//! With the `nav_tree_adapter` feature, an `understory_nav_tree::Tree` can be
//! navigated directly:
//!
//! ```rust
//! # #[cfg(feature = "nav_tree_adapter")]
//! # {
//! use kurbo::Rect;
//! use understory_nav_tree::{NavNode, NodeId, Tree};
//! use understory_spatial_nav::{Direction, FocusRequest, SelectionController, selected};
//!
//! let mut tree = Tree::new();
//! let root = tree.insert(None, NavNode::wrapper(Rect::new(0.0, 0.0, 300.0, 100.0)));
//! let left = tree.insert(Some(root), NavNode::item(Rect::new(0.0, 0.0, 40.0, 40.0)));
//! let right = tree.insert(Some(root), NavNode::item(Rect::new(100.0, 0.0, 140.0, 40.0)));
//!
//! let nav = SelectionController::default();
//! let mut focus = |req: FocusRequest<NodeId>| println!("focus {:?}", req.node);
//!
//! // Nothing selected yet: the first request picks the initial item.
//! nav.advance(&mut tree, root, Direction::Right, &mut focus);
//! assert_eq!(selected(&tree, root), Some(left));
//!
//! nav.advance(&mut tree, root, Direction::Right, &mut focus);
//! assert_eq!(selected(&tree, root), Some(right));
//! # }
//! ```
//!
//! ## Groups
//!
//! When the search lands on a group, the controller enters it at its
//! *initial selectable*: the first item inside marked initial, or else the
//! first item in document order. A group with no item inside is a dead end and
//! leaves the selection where it was.
//!
//! ## Logging
//!
//! Search escalation and selection changes are reported through `tracing`
//! at `trace` and `debug` level. Install a subscriber in the host to see them.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `nav_tree_adapter`: enables the [`adapters::nav_tree`] module and pulls in
//!   `understory_nav_tree` so its `Tree` implements [`NavTree`] and [`NavTreeMut`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;

mod candidates;
mod direction;
mod focus;
mod geometry;
mod navigator;
mod selection;
mod tree;

#[cfg(test)]
mod testing;

pub use candidates::{Candidates, candidates_of};
pub use direction::{Direction, ParseDirectionError};
pub use focus::{FocusRequest, FocusSink, ScrollAlign, ScrollIntoView};
pub use geometry::distance;
pub use navigator::{Scope, Scopes, boundary_of, closest_in_scope, scopes, search_next};
pub use selection::{
    Outcome, SelectError, SelectionController, SelectionOptions, initial_selectable, selected,
};
pub use tree::{Descendants, NavRole, NavTree, NavTreeMut, descendants};
