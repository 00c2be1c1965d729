//! Indexed binary min-heap used as the A* open list.
//!
//! The heap stores grid indices and orders them by the f-cost of the node
//! they refer to. Every node carries its own position inside the heap
//! array ([`SearchNode::heap_index`]), which the heap keeps in sync on every
//! swap. That back-pointer is what makes [`OpenList::remove`] O(log n): a
//! node whose cost just dropped can be pulled out from the middle of the
//! heap instead of being left behind as a stale entry.
//!
//! Nodes with equal f-cost pop in insertion order.

use std::cmp::Ordering;

use crate::grid::SearchNode;

/// Priority queue of discovered-but-unexpanded nodes.
#[derive(Debug, Clone, Default)]
pub struct OpenList {
    heap: Vec<usize>,
    next_order: u64,
}

impl OpenList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an open list that can hold `capacity` nodes without growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            next_order: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The node that [`extract_min`](Self::extract_min) would return.
    #[inline]
    pub fn peek(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// Whether node `idx` is queued.
    pub fn contains(&self, nodes: &[SearchNode], idx: usize) -> bool {
        nodes[idx]
            .heap_index
            .is_some_and(|pos| self.heap.get(pos) == Some(&idx))
    }

    /// Drop every entry, unlinking the queued nodes from the heap.
    pub fn clear(&mut self, nodes: &mut [SearchNode]) {
        for &idx in &self.heap {
            if let Some(node) = nodes.get_mut(idx) {
                node.heap_index = None;
            }
        }
        self.heap.clear();
        self.next_order = 0;
    }

    /// Queue node `idx`, keyed by its current f-cost.
    pub fn insert(&mut self, nodes: &mut [SearchNode], idx: usize) {
        let pos = self.heap.len();
        let node = &mut nodes[idx];
        node.order = self.next_order;
        node.heap_index = Some(pos);
        self.next_order += 1;
        self.heap.push(idx);
        self.sift_up(nodes, pos);
    }

    /// Remove and return the node with the smallest f-cost.
    pub fn extract_min(&mut self, nodes: &mut [SearchNode]) -> Option<usize> {
        let top = *self.heap.first()?;
        self.take_at(nodes, 0);
        Some(top)
    }

    /// Remove node `idx` from anywhere in the heap.
    ///
    /// Returns `false` if the node was not queued.
    pub fn remove(&mut self, nodes: &mut [SearchNode], idx: usize) -> bool {
        if !self.contains(nodes, idx) {
            return false;
        }
        let Some(pos) = nodes[idx].heap_index else {
            return false;
        };
        self.take_at(nodes, pos);
        true
    }

    /// Iterate queued node indices in heap order (not priority order).
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.heap.iter().copied()
    }

    // -----------------------------------------------------------------------
    // Heap internals
    // -----------------------------------------------------------------------

    /// Remove the entry at heap position `pos`, refilling the hole with the
    /// last entry and restoring heap order around it.
    fn take_at(&mut self, nodes: &mut [SearchNode], pos: usize) {
        let removed = self.heap.swap_remove(pos);
        nodes[removed].heap_index = None;
        if pos < self.heap.len() {
            nodes[self.heap[pos]].heap_index = Some(pos);
            let pos = self.sift_up(nodes, pos);
            self.sift_down(nodes, pos);
        }
    }

    fn sift_up(&mut self, nodes: &mut [SearchNode], mut pos: usize) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !Self::less(nodes, self.heap[pos], self.heap[parent]) {
                break;
            }
            self.swap(nodes, pos, parent);
            pos = parent;
        }
        pos
    }

    fn sift_down(&mut self, nodes: &mut [SearchNode], mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let best = if right < len && Self::less(nodes, self.heap[right], self.heap[left]) {
                right
            } else {
                left
            };
            if !Self::less(nodes, self.heap[best], self.heap[pos]) {
                break;
            }
            self.swap(nodes, pos, best);
            pos = best;
        }
    }

    fn swap(&mut self, nodes: &mut [SearchNode], a: usize, b: usize) {
        self.heap.swap(a, b);
        nodes[self.heap[a]].heap_index = Some(a);
        nodes[self.heap[b]].heap_index = Some(b);
    }

    /// Heap order: lower f-cost first, then earlier insertion.
    fn less(nodes: &[SearchNode], a: usize, b: usize) -> bool {
        let (na, nb) = (&nodes[a], &nodes[b]);
        match na.f_cost().total_cmp(&nb.f_cost()) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => na.order < nb.order,
        }
    }
}
