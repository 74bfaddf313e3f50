// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus transfer requests handed to the host.

use kurbo::Rect;

/// Alignment used when scrolling a newly selected node into view.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScrollAlign {
    /// Align the start (top/leading edge) of the node with the viewport.
    Start,
    /// Center the node within the viewport.
    Center,
    /// Align the end (bottom/trailing edge) of the node with the viewport.
    End,
    /// Move just enough to make the node fully visible.
    Nearest,
}

/// How to bring a node into view, per axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScrollIntoView {
    /// Alignment along the inline (horizontal) axis.
    pub inline: ScrollAlign,
    /// Alignment along the block (vertical) axis.
    pub block: ScrollAlign,
}

impl Default for ScrollIntoView {
    fn default() -> Self {
        Self {
            inline: ScrollAlign::Center,
            block: ScrollAlign::Center,
        }
    }
}

/// A request to move host input focus to `node`.
///
/// Hosts should focus the node without any implicit scrolling of their own,
/// then apply `scroll` if present.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FocusRequest<K> {
    /// Node that now holds the selection.
    pub node: K,
    /// The node's box as seen by the search, if it had one.
    pub bounds: Option<Rect>,
    /// How to scroll the node into view; `None` leaves scroll positions alone.
    pub scroll: Option<ScrollIntoView>,
}

/// Receiver of focus transfer requests.
///
/// The navigation layer calls [`FocusSink::apply_focus`] once per call that
/// changes the selection and does not check the outcome.
///
/// Closures taking a [`FocusRequest`] implement this trait:
///
/// ```rust
/// use understory_spatial_nav::{FocusRequest, FocusSink};
///
/// let mut focused = Vec::new();
/// let mut sink = |req: FocusRequest<u32>| focused.push(req.node);
/// sink.apply_focus(FocusRequest { node: 7, bounds: None, scroll: None });
/// assert_eq!(focused, [7]);
/// ```
pub trait FocusSink<K> {
    /// Move host focus to `request.node` and bring it into view.
    fn apply_focus(&mut self, request: FocusRequest<K>);
}

impl<K, F> FocusSink<K> for F
where
    F: FnMut(FocusRequest<K>),
{
    fn apply_focus(&mut self, request: FocusRequest<K>) {
        self(request);
    }
}
