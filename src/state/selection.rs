// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Selection-order list.
//!
//! Records which constraints hold a tentative face, in the order they were
//! selected. Nodes live in an arena and link to each other by index, so the
//! list never owns a cycle. Backtracking only ever removes the tail.

use crate::geometry::Code;
use crate::memo::ConstraintId;
use crate::search::FaceGenerator;

/// One selected constraint.
#[derive(Debug, Clone)]
pub struct SelectionNode {
    pub constraint: ConstraintId,
    /// Trail length when the node was pushed; every candidate starts here.
    pub checkpoint: usize,
    /// Where this constraint's candidate enumeration has got to.
    pub generator: FaceGenerator,
    /// First candidate the generator produced.
    pub first_tried: Option<Code>,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionList {
    nodes: Vec<SelectionNode>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl SelectionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a newly selected constraint.
    pub fn push(&mut self, constraint: ConstraintId, checkpoint: usize, generator: FaceGenerator) {
        let index = self.nodes.len();
        self.nodes.push(SelectionNode {
            constraint,
            checkpoint,
            generator,
            first_tried: None,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
    }

    /// Remove the most recently selected node.
    pub fn pop(&mut self) -> Option<SelectionNode> {
        let tail = self.tail?;
        // Nodes are only removed from the tail, so the arena shrinks with the list.
        let node = self.nodes.pop()?;
        debug_assert_eq!(tail, self.nodes.len());
        self.tail = node.prev;
        match node.prev {
            Some(prev) => self.nodes[prev].next = None,
            None => self.head = None,
        }
        Some(node)
    }

    pub fn tail(&self) -> Option<&SelectionNode> {
        self.tail.map(|index| &self.nodes[index])
    }

    pub fn tail_mut(&mut self) -> Option<&mut SelectionNode> {
        let index = self.tail?;
        self.nodes.get_mut(index)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Walk the list from the first selection to the last.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    /// Selected constraints, first to last.
    pub fn order(&self) -> Vec<ConstraintId> {
        self.iter().map(|node| node.constraint).collect()
    }
}

pub struct Iter<'a> {
    list: &'a SelectionList,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a SelectionNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.list.nodes[self.cursor?];
        self.cursor = node.next;
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> FaceGenerator {
        FaceGenerator::universe_child(Code::wildcard_prefix(2, 1))
    }

    #[test]
    fn test_push_and_order() {
        let mut list = SelectionList::new();
        assert!(list.is_empty());
        list.push(3, 0, generator());
        list.push(1, 4, generator());
        list.push(7, 9, generator());
        assert_eq!(list.order(), vec![3, 1, 7]);
        assert_eq!(list.tail().map(|n| n.checkpoint), Some(9));
    }

    #[test]
    fn test_pop_walks_left() {
        let mut list = SelectionList::new();
        list.push(3, 0, generator());
        list.push(1, 4, generator());
        assert_eq!(list.pop().map(|n| n.constraint), Some(1));
        assert_eq!(list.tail().map(|n| n.constraint), Some(3));
        list.push(5, 6, generator());
        assert_eq!(list.order(), vec![3, 5]);
        assert_eq!(list.pop().map(|n| n.constraint), Some(5));
        assert_eq!(list.pop().map(|n| n.constraint), Some(3));
        assert!(list.pop().is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut list = SelectionList::new();
        list.push(3, 0, generator());
        list.clear();
        assert_eq!(list.len(), 0);
        assert!(list.tail().is_none());
    }
}
