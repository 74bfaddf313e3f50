// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with other Understory crates.
//!
//! Each adapter is gated behind a feature flag to keep the core lightweight.
//!
//! ## Available Adapters
//!
//! - [`nav_tree`] (`nav_tree_adapter` feature): implements [`NavTree`](crate::NavTree)
//!   and [`NavTreeMut`](crate::NavTreeMut) for `understory_nav_tree::Tree`, deriving
//!   roles from its flags and focusability.

#[cfg(feature = "nav_tree_adapter")]
pub mod nav_tree;
