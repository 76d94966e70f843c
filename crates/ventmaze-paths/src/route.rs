use ventmaze_core::Point;

use crate::dijkstra::dijkstra_map;
use crate::error::PathError;
use crate::traits::MapQuery;

/// A complete route from a start cell to a goal.
///
/// `steps` excludes the start cell (the caller is already standing on it)
/// and ends with the goal. `cost` is the sum of every step's move cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub steps: Vec<Point>,
    pub cost: f64,
}

impl Route {
    /// Number of moves.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the route stays on the start cell.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The last cell, or `None` for an empty route.
    pub fn destination(&self) -> Option<Point> {
        self.steps.last().copied()
    }
}

/// Find the cheapest route from `start` to `goal`.
///
/// Returns `Ok(None)` when the goal cannot be reached, and
/// [`PathError::OutOfBounds`] when either cell lies outside the grid. When
/// several routes share the minimal cost, the one picked is the same on
/// every call.
pub fn find_shortest_path<M: MapQuery>(
    start: Point,
    goal: Point,
    map: &M,
) -> Result<Option<Route>, PathError> {
    let bounds = map.bounds();
    for point in [start, goal] {
        if !bounds.contains(point) {
            return Err(PathError::OutOfBounds { point, bounds });
        }
    }
    dijkstra_map(map, start)?.route_to(goal)
}
