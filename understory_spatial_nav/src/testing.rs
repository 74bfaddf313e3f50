// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synthetic tree of plain records for unit tests.

use alloc::vec;
use alloc::vec::Vec;
use kurbo::Rect;

use crate::{NavRole, NavTree, NavTreeMut};

#[derive(Clone, Debug)]
struct Record {
    parent: Option<u32>,
    children: Vec<u32>,
    bounds: Option<Rect>,
    role: NavRole,
    initial: bool,
    selected: bool,
}

/// Vec-backed tree keyed by `u32`; node `0` is a wrapper root without bounds.
#[derive(Clone, Debug)]
pub(crate) struct TestTree {
    records: Vec<Record>,
}

impl TestTree {
    pub(crate) fn new() -> Self {
        Self {
            records: vec![Record {
                parent: None,
                children: Vec::new(),
                bounds: None,
                role: NavRole::Wrapper,
                initial: false,
                selected: false,
            }],
        }
    }

    pub(crate) fn root(&self) -> u32 {
        0
    }

    pub(crate) fn add(&mut self, parent: u32, role: NavRole, bounds: Option<Rect>) -> u32 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Test trees are tiny."
        )]
        let id = self.records.len() as u32;
        self.records.push(Record {
            parent: Some(parent),
            children: Vec::new(),
            bounds,
            role,
            initial: false,
            selected: false,
        });
        self.records[parent as usize].children.push(id);
        id
    }

    pub(crate) fn item(&mut self, parent: u32, bounds: Rect) -> u32 {
        self.add(parent, NavRole::Item, Some(bounds))
    }

    pub(crate) fn group(&mut self, parent: u32, bounds: Rect) -> u32 {
        self.add(parent, NavRole::Group, Some(bounds))
    }

    pub(crate) fn wrapper(&mut self, parent: u32, bounds: Rect) -> u32 {
        self.add(parent, NavRole::Wrapper, Some(bounds))
    }

    pub(crate) fn mark_initial(&mut self, id: u32) {
        self.records[id as usize].initial = true;
    }

    pub(crate) fn selected_count(&self) -> usize {
        self.records.iter().filter(|r| r.selected).count()
    }

    fn record(&self, node: u32) -> Option<&Record> {
        self.records.get(node as usize)
    }
}

impl NavTree<u32> for TestTree {
    fn parent_of(&self, node: u32) -> Option<u32> {
        self.record(node).and_then(|r| r.parent)
    }

    fn children_of(&self, node: u32) -> &[u32] {
        self.record(node).map(|r| r.children.as_slice()).unwrap_or(&[])
    }

    fn bounds(&self, node: u32) -> Option<Rect> {
        self.record(node).and_then(|r| r.bounds)
    }

    fn role(&self, node: u32) -> NavRole {
        self.record(node).map(|r| r.role).unwrap_or(NavRole::Wrapper)
    }

    fn is_initial(&self, node: u32) -> bool {
        self.record(node).is_some_and(|r| r.initial)
    }

    fn is_selected(&self, node: u32) -> bool {
        self.record(node).is_some_and(|r| r.selected)
    }
}

impl NavTreeMut<u32> for TestTree {
    fn set_selected(&mut self, node: u32, selected: bool) {
        if let Some(r) = self.records.get_mut(node as usize) {
            r.selected = selected;
        }
    }
}
