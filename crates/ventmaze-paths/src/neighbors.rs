use ventmaze_core::Point;

use crate::cost::step_cost;
use crate::traits::MapQuery;

/// Cached successor computation helper.
///
/// Enumerates the cells reachable in one move from a point together with
/// the move cost. Blocked moves are left out rather than reported with an
/// infinite cost.
pub struct Neighbors {
    buf: Vec<(Point, f64)>,
    links: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
            links: Vec::new(),
        }
    }

    /// Return the successors of `p`: orthogonal moves in north, east, south,
    /// west order, then one entry per linked vent in the order the map
    /// reports them.
    pub fn successors<M: MapQuery>(&mut self, map: &M, p: Point) -> &[(Point, f64)] {
        self.buf.clear();
        self.links.clear();
        if map.has_vent(p) {
            map.other_vent_positions(p, &mut self.links);
        }
        for n in p.neighbors_4() {
            if let Some(c) = step_cost(p, n, &self.links, map) {
                self.buf.push((n, c));
            }
        }
        for &n in &self.links {
            if let Some(c) = step_cost(p, n, &self.links, map) {
                self.buf.push((n, c));
            }
        }
        &self.buf
    }
}
