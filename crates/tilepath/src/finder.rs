//! The A* search loop.

use tilepath_core::Point;

use crate::config::FinderConfig;
use crate::grid::{NodeState, SearchGrid};
use crate::heuristic::{ClosestHeuristic, Heuristic};
use crate::nav_path::NavPath;
use crate::open_list::OpenList;
use crate::traits::{SearchContext, TileMap};

/// A* path finder for tile maps of one size.
///
/// The finder owns the per-tile node arena and the open list so that
/// repeated searches reuse them. Everything a single search needs beyond
/// those buffers lives on the stack of [`find_path`](Self::find_path).
#[derive(Debug, Clone)]
pub struct AStarPathFinder<H = ClosestHeuristic> {
    grid: SearchGrid,
    open: OpenList,
    config: FinderConfig,
    heuristic: H,
}

impl AStarPathFinder {
    /// Create a finder for `width × height` maps using straight-line
    /// distance as the heuristic.
    pub fn new(width: i32, height: i32, config: FinderConfig) -> Self {
        Self::with_heuristic(width, height, config, ClosestHeuristic)
    }
}

impl<H> AStarPathFinder<H> {
    /// Create a finder for `width × height` maps with a custom heuristic.
    pub fn with_heuristic(width: i32, height: i32, config: FinderConfig, heuristic: H) -> Self {
        let grid = SearchGrid::new(width, height);
        let open = OpenList::with_capacity(grid.len());
        Self {
            grid,
            open,
            config,
            heuristic,
        }
    }

    /// Create a finder sized for `map`.
    pub fn for_map<M: TileMap + ?Sized>(map: &M, config: FinderConfig, heuristic: H) -> Self {
        Self::with_heuristic(map.width_in_tiles(), map.height_in_tiles(), config, heuristic)
    }

    #[inline]
    pub fn config(&self) -> FinderConfig {
        self.config
    }

    pub fn set_config(&mut self, config: FinderConfig) {
        self.config = config;
    }

    #[inline]
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Node states left behind by the most recent search.
    #[inline]
    pub fn grid(&self) -> &SearchGrid {
        &self.grid
    }

    /// Open list left behind by the most recent search.
    #[inline]
    pub fn open_list(&self) -> &OpenList {
        &self.open
    }

    /// Prepare the finder for maps of another size.
    pub fn resize(&mut self, width: i32, height: i32) {
        log::debug!(
            "resizing search grid from {}x{} to {width}x{height}",
            self.grid.width(),
            self.grid.height()
        );
        self.open.clear(&mut self.grid.nodes);
        self.grid.resize(width, height);
    }

    /// Find a path from `start` to `target` for `mover`.
    ///
    /// Returns the steps from `start` to `target`, both included, or `None`
    /// when the target is blocked, unreachable, or further away than the
    /// configured search distance.
    pub fn find_path<M>(
        &mut self,
        map: &M,
        mover: &M::Mover,
        start: Point,
        target: Point,
    ) -> Option<NavPath>
    where
        M: TileMap + ?Sized,
        H: Heuristic<M>,
    {
        let mut path = NavPath::new();
        self.find_path_into(map, mover, start, target, &mut path)
            .then_some(path)
    }

    /// Like [`find_path`](Self::find_path), but writes the steps into a
    /// caller-owned buffer.
    ///
    /// On failure `path` is left exactly as it was.
    pub fn find_path_into<M>(
        &mut self,
        map: &M,
        mover: &M::Mover,
        start: Point,
        target: Point,
        path: &mut NavPath,
    ) -> bool
    where
        M: TileMap + ?Sized,
        H: Heuristic<M>,
    {
        let Some(target_idx) = self.search(map, mover, start, target) else {
            return false;
        };

        path.clear();
        let mut next = Some(target_idx);
        while let Some(i) = next {
            path.push(self.grid.point(i));
            next = self.grid.nodes[i].parent;
        }
        path.reverse();
        true
    }

    /// Run the search and return the target's node index on success.
    fn search<M>(&mut self, map: &M, mover: &M::Mover, start: Point, target: Point) -> Option<usize>
    where
        M: TileMap + ?Sized,
        H: Heuristic<M>,
    {
        let (w, h) = (map.width_in_tiles(), map.height_in_tiles());
        if w != self.grid.width() || h != self.grid.height() {
            self.resize(w, h);
        }

        let (Some(start_idx), Some(target_idx)) = (self.grid.idx(start), self.grid.idx(target))
        else {
            log::warn!(
                "path request {start} -> {target} lies outside the {w}x{h} map"
            );
            return None;
        };

        // Tile-intrinsic check: the target is queried as if entered from itself.
        if map.blocked(&SearchContext::new(mover, target, 0), target) {
            log::debug!("no path {start} -> {target}: target is blocked");
            return None;
        }

        self.open.clear(&mut self.grid.nodes);
        self.grid.reset();

        self.grid.nodes[start_idx].state = NodeState::Open;
        self.open.insert(&mut self.grid.nodes, start_idx);

        let diagonal = self.config.allow_diagonal;
        let max_distance = self.config.max_search_distance;
        let mut search_distance = 0;
        let mut current = start_idx;
        let mut expanded = 0usize;
        let mut arrived = false;

        while search_distance < max_distance {
            let last = self.grid.point(current);
            let Some(ci) = self.open.extract_min(&mut self.grid.nodes) else {
                break;
            };
            current = ci;
            expanded += 1;

            let node = &mut self.grid.nodes[ci];
            node.state = NodeState::Closed;
            search_distance = node.depth;
            let (pos, cost, depth) = (node.pos(), node.cost, node.depth);

            // Arrival check from the previously expanded tile, which rejects
            // diagonal squeezes onto the target.
            if ci == target_idx {
                let arrival = SearchContext::new(mover, last, search_distance);
                if !map.blocked(&arrival, target) {
                    arrived = true;
                    break;
                }
            }

            let ctx = SearchContext::new(mover, pos, search_distance);
            let (n4, n8) = (pos.neighbors_4(), pos.neighbors_8());
            let neighbors: &[Point] = if diagonal { &n8 } else { &n4 };
            for &np in neighbors {
                let Some(ni) = self.grid.idx(np) else {
                    continue;
                };
                if map.blocked(&ctx, np) {
                    continue;
                }
                map.visited(np);

                let next_cost = cost + map.cost(&ctx, np);
                if next_cost < self.grid.nodes[ni].cost {
                    if self.grid.nodes[ni].state == NodeState::Open {
                        self.open.remove(&mut self.grid.nodes, ni);
                    }
                    self.grid.nodes[ni].state = NodeState::Unvisited;
                }

                if self.grid.nodes[ni].state == NodeState::Unvisited {
                    let estimate = self.heuristic.estimate(map, mover, np, target);
                    let n = &mut self.grid.nodes[ni];
                    n.cost = next_cost;
                    n.heuristic = estimate;
                    n.parent = Some(ci);
                    n.depth = depth + 1;
                    n.state = NodeState::Open;
                    self.open.insert(&mut self.grid.nodes, ni);
                }
            }
        }

        let found = arrived || self.grid.nodes[target_idx].parent.is_some();
        log::trace!(
            "search {start} -> {target}: expanded {expanded} nodes, depth {search_distance}, found {found}"
        );
        if !found {
            if self.open.is_empty() {
                log::debug!("no path {start} -> {target}: open list exhausted");
            } else {
                log::debug!(
                    "no path {start} -> {target}: search distance {max_distance} reached"
                );
            }
            return None;
        }
        Some(target_idx)
    }
}
