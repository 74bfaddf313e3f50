// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directional distance between two boxes.
//!
//! Boxes are [`kurbo::Rect`]s in screen space: `x0`/`x1` are the left/right
//! edges and `y0`/`y1` the top/bottom edges, with y growing downward.

use kurbo::Rect;

use crate::Direction;

/// Distance from `reference` to `candidate` when travelling in `direction`.
///
/// Returns `None` when `candidate` is unreachable: it must lie entirely past
/// the edge of `reference` that faces `direction`. Boxes that touch or overlap
/// along the travel axis are unreachable.
///
/// For reachable candidates:
///
/// - If `candidate` spans the whole cross-axis extent of `reference` (for
///   example a wide bar below a button when moving down), the distance is the
///   gap from the center of `reference` to the near edge of `candidate`.
/// - Otherwise the distance is measured center to center: the travel-axis delta
///   plus the **square** of the cross-axis delta, so aligned candidates beat
///   diagonally offset ones.
///
/// Non-finite results (from NaN or infinite coordinates) are reported as
/// unreachable.
///
/// ```rust
/// use kurbo::Rect;
/// use understory_spatial_nav::{Direction, distance};
///
/// let origin = Rect::new(0.0, 0.0, 40.0, 40.0);
/// let near = Rect::new(100.0, 0.0, 140.0, 40.0);
/// let far = Rect::new(200.0, 0.0, 240.0, 40.0);
///
/// assert_eq!(distance(origin, near, Direction::Right), Some(80.0));
/// assert_eq!(distance(origin, far, Direction::Right), Some(180.0));
/// assert_eq!(distance(origin, near, Direction::Left), None);
/// ```
pub fn distance(reference: Rect, candidate: Rect, direction: Direction) -> Option<f64> {
    debug_assert!(
        !(reference.x0 > reference.x1 || reference.y0 > reference.y1),
        "reference box must have non-negative size"
    );
    debug_assert!(
        !(candidate.x0 > candidate.x1 || candidate.y0 > candidate.y1),
        "candidate box must have non-negative size"
    );

    let blocked = match direction {
        Direction::Up => reference.y0 <= candidate.y1,
        Direction::Down => reference.y1 >= candidate.y0,
        Direction::Left => reference.x0 <= candidate.x1,
        Direction::Right => reference.x1 >= candidate.x0,
    };
    // NaN compares false above, so it only gets rejected here.
    if blocked || !(reference.is_finite() && candidate.is_finite()) {
        return None;
    }

    let center = reference.center();
    let straddles = if direction.is_vertical() {
        candidate.x0 <= reference.x0 && candidate.x1 >= reference.x1
    } else {
        candidate.y0 <= reference.y0 && candidate.y1 >= reference.y1
    };

    let d = if straddles {
        match direction {
            Direction::Up => (center.y - candidate.y1).abs(),
            Direction::Down => candidate.y0 - center.y,
            Direction::Left => center.x - candidate.x1,
            Direction::Right => candidate.x0 - center.x,
        }
    } else {
        let other = candidate.center();
        let dx = (center.x - other.x).abs();
        let dy = (center.y - other.y).abs();
        if direction.is_horizontal() {
            dx + dy * dy
        } else {
            dy + dx * dx
        }
    };

    d.is_finite().then_some(d)
}
