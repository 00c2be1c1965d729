use tilepath_core::{Point, Range};

/// Where a node stands in the current search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeState {
    /// Not discovered yet, or reopened after a cheaper path was found.
    #[default]
    Unvisited,
    /// Waiting in the open list.
    Open,
    /// Expanded.
    Closed,
}

/// Per-tile bookkeeping for the A* search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode {
    pos: Point,
    pub(crate) cost: f32,
    pub(crate) heuristic: f32,
    pub(crate) parent: Option<usize>,
    pub(crate) depth: usize,
    pub(crate) state: NodeState,
    pub(crate) heap_index: Option<usize>,
    pub(crate) order: u64,
}

impl SearchNode {
    fn new(pos: Point) -> Self {
        Self {
            pos,
            cost: 0.0,
            heuristic: 0.0,
            parent: None,
            depth: 0,
            state: NodeState::Unvisited,
            heap_index: None,
            order: 0,
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Accumulated cost from the start (g).
    #[inline]
    pub fn cost(&self) -> f32 {
        self.cost
    }

    /// Estimated cost to the target (h).
    #[inline]
    pub fn heuristic(&self) -> f32 {
        self.heuristic
    }

    /// Total estimated path cost through this node (f = g + h).
    #[inline]
    pub fn f_cost(&self) -> f32 {
        self.cost + self.heuristic
    }

    /// Grid index of the predecessor on the best known path.
    #[inline]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Steps from the start node along the parent chain.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn state(&self) -> NodeState {
        self.state
    }

    /// Position in the open list's heap array, if queued.
    #[inline]
    pub fn heap_index(&self) -> Option<usize> {
        self.heap_index
    }

    fn reset(&mut self) {
        self.cost = 0.0;
        self.heuristic = 0.0;
        self.parent = None;
        self.depth = 0;
        self.state = NodeState::Unvisited;
        self.heap_index = None;
        self.order = 0;
    }
}

/// Fixed-size arena of [`SearchNode`]s, one per tile, indexed `y * width + x`.
#[derive(Debug, Clone)]
pub struct SearchGrid {
    rng: Range,
    pub(crate) nodes: Vec<SearchNode>,
}

impl SearchGrid {
    /// Create a grid covering `width × height` tiles.
    pub fn new(width: i32, height: i32) -> Self {
        let rng = Range::with_size(width, height);
        Self {
            rng,
            nodes: rng.iter().map(SearchNode::new).collect(),
        }
    }

    /// The tiles covered by the grid.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.rng.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.rng.height()
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Flat index of tile `p`, or `None` outside the grid.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        self.rng.index_of(p)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        self.nodes[idx].pos
    }

    /// The node for tile `p`, if inside the grid.
    pub fn node(&self, p: Point) -> Option<&SearchNode> {
        self.idx(p).map(|i| &self.nodes[i])
    }

    /// All nodes in row-major order.
    pub fn nodes(&self) -> &[SearchNode] {
        &self.nodes
    }

    /// Rebuild the grid for a map of a different size, keeping the node
    /// buffer's allocation when the new size fits in it.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.rng = Range::with_size(width, height);
        self.nodes.clear();
        self.nodes.extend(self.rng.iter().map(SearchNode::new));
    }

    /// Return every node to its pre-search state. Visits the whole grid.
    pub fn reset(&mut self) {
        for n in self.nodes.iter_mut() {
            n.reset();
        }
    }

    /// Number of nodes currently in `state`.
    pub fn count(&self, state: NodeState) -> usize {
        self.nodes.iter().filter(|n| n.state == state).count()
    }
}
