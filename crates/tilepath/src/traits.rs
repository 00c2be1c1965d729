use tilepath_core::Point;

/// Per-query view of an in-progress search, handed to every [`TileMap`] call.
///
/// A fresh context is built for each map query, so the finder itself keeps
/// no per-call state between searches.
#[derive(Debug)]
pub struct SearchContext<'a, M: ?Sized> {
    mover: &'a M,
    source: Point,
    search_distance: usize,
}

impl<M: ?Sized> Clone for SearchContext<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: ?Sized> Copy for SearchContext<'_, M> {}

impl<'a, M: ?Sized> SearchContext<'a, M> {
    /// Create a context for a query made from `source`.
    pub fn new(mover: &'a M, source: Point, search_distance: usize) -> Self {
        Self {
            mover,
            source,
            search_distance,
        }
    }

    /// The entity being moved.
    #[inline]
    pub fn mover(&self) -> &'a M {
        self.mover
    }

    /// The tile the move under query starts from.
    #[inline]
    pub fn source(&self) -> Point {
        self.source
    }

    /// Depth of the node most recently taken from the open list.
    #[inline]
    pub fn search_distance(&self) -> usize {
        self.search_distance
    }
}

/// A tile map the path finder can search.
///
/// The map decides which tiles a mover may enter and what each step costs.
/// Coordinates passed to [`blocked`](Self::blocked) and [`cost`](Self::cost)
/// are always inside `width_in_tiles() × height_in_tiles()`.
pub trait TileMap {
    /// Opaque token identifying what is being moved.
    type Mover: ?Sized;

    fn width_in_tiles(&self) -> i32;

    fn height_in_tiles(&self) -> i32;

    /// Whether the mover may not step from `ctx.source()` onto `to`.
    fn blocked(&self, ctx: &SearchContext<'_, Self::Mover>, to: Point) -> bool;

    /// Cost of stepping from `ctx.source()` onto `to`. Must be non-negative.
    fn cost(&self, ctx: &SearchContext<'_, Self::Mover>, to: Point) -> f32;

    /// Called for every neighbour the finder evaluates. Useful for debugging
    /// and visualising how much of the map a search touched.
    fn visited(&self, _p: Point) {}
}

impl<T: TileMap + ?Sized> TileMap for &T {
    type Mover = T::Mover;

    fn width_in_tiles(&self) -> i32 {
        (**self).width_in_tiles()
    }

    fn height_in_tiles(&self) -> i32 {
        (**self).height_in_tiles()
    }

    fn blocked(&self, ctx: &SearchContext<'_, Self::Mover>, to: Point) -> bool {
        (**self).blocked(ctx, to)
    }

    fn cost(&self, ctx: &SearchContext<'_, Self::Mover>, to: Point) -> f32 {
        (**self).cost(ctx, to)
    }

    fn visited(&self, p: Point) {
        (**self).visited(p)
    }
}
