// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrow-key navigation across a toolbar and a grid of cards.
//!
//! This example shows how to combine:
//! - `understory_nav_tree` as the host tree, with flags for items and groups,
//! - `understory_spatial_nav` for directional search and selection hand-off,
//! - a closure as the focus sink that "scrolls" by printing the request.
//!
//! Directions are read from the command line (defaults to a short tour):
//! - `cargo run -p understory_demos --example spatial_grid -- right down down left`
//!
//! Set `RUST_LOG=understory_spatial_nav=trace` to watch scope escalation.

use std::collections::HashMap;

use kurbo::Rect;
use understory_nav_tree::{NavNode, NodeFlags, NodeId, Tree};
use understory_spatial_nav::{
    Direction, FocusRequest, Outcome, ScrollAlign, ScrollIntoView, SelectionController,
    SelectionOptions, selected,
};

fn main() {
    understory_demos::init_logging("debug");

    let mut names: HashMap<NodeId, String> = HashMap::new();
    let mut tree = Tree::new();
    let root = tree.insert(None, NavNode::wrapper(Rect::new(0.0, 0.0, 400.0, 400.0)));

    // Toolbar: three buttons, the middle one disabled.
    let toolbar = tree.insert(Some(root), NavNode::group(Rect::new(0.0, 0.0, 400.0, 40.0)));
    for (i, label) in ["open", "save", "share"].into_iter().enumerate() {
        let x = 10.0 + 130.0 * i as f64;
        let mut node = NavNode::item(Rect::new(x, 5.0, x + 110.0, 35.0));
        if label == "save" {
            node = node.with_flags(NodeFlags::DISABLED);
        }
        let id = tree.insert(Some(toolbar), node);
        names.insert(id, format!("toolbar/{label}"));
    }

    // Grid: 3x3 cards inside a layout wrapper. The center card is the entry point.
    let grid = tree.insert(Some(root), NavNode::group(Rect::new(0.0, 60.0, 400.0, 400.0)));
    let rows = tree.insert(Some(grid), NavNode::wrapper(Rect::new(0.0, 60.0, 400.0, 400.0)));
    for row in 0..3 {
        for col in 0..3 {
            let x = 10.0 + 130.0 * f64::from(col);
            let y = 70.0 + 110.0 * f64::from(row);
            let mut node = NavNode::item(Rect::new(x, y, x + 110.0, y + 100.0));
            if (row, col) == (1, 1) {
                node = node.with_flags(NodeFlags::INITIAL);
            }
            let id = tree.insert(Some(rows), node);
            names.insert(id, format!("grid/{row},{col}"));
        }
    }

    let steps: Vec<Direction> = {
        let args: Vec<String> = std::env::args().skip(1).collect();
        if args.is_empty() {
            vec![
                Direction::Down,
                Direction::Up,
                Direction::Up,
                Direction::Up,
                Direction::Right,
                Direction::Down,
                Direction::Left,
                Direction::Left,
            ]
        } else {
            match args.iter().map(|a| a.parse::<Direction>()).collect() {
                Ok(steps) => steps,
                Err(err) => {
                    eprintln!("{err}");
                    std::process::exit(2);
                }
            }
        }
    };

    let nav = SelectionController::new(SelectionOptions {
        scroll: Some(ScrollIntoView {
            inline: ScrollAlign::Nearest,
            block: ScrollAlign::Center,
        }),
        ..SelectionOptions::default()
    });
    let label = |id: NodeId| names.get(&id).map_or("?", String::as_str);
    let mut focus = |req: FocusRequest<NodeId>| {
        println!(
            "  focus {} at {:?} (scroll {:?})",
            label(req.node),
            req.bounds,
            req.scroll
        );
    };

    tracing::info!(steps = steps.len(), "starting navigation tour");
    for dir in steps {
        println!("{dir}:");
        match nav.advance(&mut tree, root, dir, &mut focus) {
            Outcome::Selected { previous, current } => println!(
                "  {} -> {}",
                previous.map_or("(none)", label),
                label(current)
            ),
            Outcome::Unchanged => println!(
                "  stays on {}",
                selected(&tree, root).map_or("(none)", label)
            ),
        }
    }
}
