// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_nav_tree --heading-base-level=0

//! Understory Nav Tree: an arena tree of navigable boxes.
//!
//! Understory Nav Tree is the host-side half of directional focus navigation.
//! It stores what a UI knows about each element that navigation cares about:
//!
//! - Where the element is: a world-space bounding box ([`NavNode::bounds`]).
//! - What role it plays: a selectable item, a group (navigation boundary), or a
//!   plain wrapper ([`NodeFlags::ITEM`], [`NodeFlags::GROUP`]).
//! - Whether it can take focus right now: visibility, disabled, and inert state
//!   ([`Tree::is_navigable`], [`Tree::is_focusable`]).
//! - Which item is selected and which item a group prefers on entry
//!   ([`NodeFlags::SELECTED`], [`NodeFlags::INITIAL`]).
//!
//! The search itself lives in `understory_spatial_nav`, which reads this tree
//! through its `nav_tree_adapter` feature.
//!
//! ## Not a layout engine
//!
//! This crate does not measure or arrange anything. Upstream code computes the
//! boxes with whatever layout system it uses and writes them here with
//! [`Tree::set_bounds`] before navigating.
//!
//! ## API overview
//!
//! - [`Tree`]: the arena. [`Tree::insert`], [`Tree::remove`], [`Tree::reparent`],
//!   [`Tree::set_bounds`], [`Tree::set_flags`], [`Tree::set_selected`].
//! - Queries: [`Tree::parent_of`], [`Tree::children_of`], [`Tree::bounds`],
//!   [`Tree::flags`], [`Tree::is_ancestor`], [`Tree::next_depth_first`].
//! - [`NodeId`]: generational handle of a node. Stale handles are ignored.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::Tree;
pub use types::{NavNode, NodeFlags, NodeId};
