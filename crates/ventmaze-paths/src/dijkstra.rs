use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ventmaze_core::{Point, Range};

use crate::error::PathError;
use crate::neighbors::Neighbors;
use crate::reconstruct::reconstruct;
use crate::route::Route;
use crate::traits::MapQuery;

/// Frontier entry, ordered for use in `BinaryHeap`.
///
/// Smallest distance pops first; ties go to the smaller `x`, then the
/// smaller `y`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrontierEntry {
    pub(crate) dist: f64,
    pub(crate) pos: Point,
    pub(crate) idx: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest entry first.
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Distances and predecessor links from a single start cell, as left by a
/// complete search. Owned by the caller; nothing is cached between searches.
#[derive(Debug, Clone)]
pub struct DistanceMap {
    bounds: Range,
    start: Point,
    dist: Vec<f64>,
    prev: Vec<Option<usize>>,
}

impl DistanceMap {
    /// The cell the search started from.
    pub fn start(&self) -> Point {
        self.start
    }

    /// The grid rectangle covered by the map.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Best total cost from the start to `p`, or `None` if `p` is outside
    /// the grid or unreachable.
    pub fn distance_at(&self, p: Point) -> Option<f64> {
        let d = self.dist[self.bounds.index_of(p)?];
        (d != f64::INFINITY).then_some(d)
    }

    /// The cell preceding `p` on its best route, if any.
    pub fn predecessor(&self, p: Point) -> Option<Point> {
        let i = self.prev[self.bounds.index_of(p)?]?;
        Some(self.bounds.point_at(i))
    }

    pub fn is_reachable(&self, p: Point) -> bool {
        self.distance_at(p).is_some()
    }

    /// All reached cells with their distances, in row-major order.
    pub fn reached(&self) -> impl Iterator<Item = (Point, f64)> + '_ {
        self.bounds
            .iter()
            .zip(self.dist.iter().copied())
            .filter(|&(_, d)| d != f64::INFINITY)
    }

    /// The cells leading from the start to `goal`, start excluded.
    ///
    /// `Ok(None)` means `goal` is unreachable.
    pub fn path_to(&self, goal: Point) -> Result<Option<Vec<Point>>, PathError> {
        reconstruct(goal, self.start, self.bounds, &self.prev, &self.dist)
    }

    /// Like [`path_to`](Self::path_to), with the route's total cost.
    pub fn route_to(&self, goal: Point) -> Result<Option<Route>, PathError> {
        let Some(steps) = self.path_to(goal)? else {
            return Ok(None);
        };
        let cost = self.distance_at(goal).unwrap_or(f64::INFINITY);
        Ok(Some(Route { steps, cost }))
    }
}

/// Compute the cost of the cheapest route from `start` to every cell.
///
/// The search settles cells in order of distance, breaking ties by `x` then
/// `y`, and runs until the frontier is exhausted. Improved cells are pushed
/// again rather than updated in place; outdated entries are skipped when
/// popped.
pub fn dijkstra_map<M: MapQuery>(map: &M, start: Point) -> Result<DistanceMap, PathError> {
    let bounds = map.bounds();
    let si = bounds.index_of(start).ok_or(PathError::OutOfBounds {
        point: start,
        bounds,
    })?;

    let len = bounds.len();
    let mut dist = vec![f64::INFINITY; len];
    let mut prev: Vec<Option<usize>> = vec![None; len];
    dist[si] = 0.0;

    let mut open: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    open.push(FrontierEntry {
        dist: 0.0,
        pos: start,
        idx: si,
    });

    let mut nb = Neighbors::new();
    let (mut settled, mut pushed, mut stale) = (0usize, 1usize, 0usize);

    while let Some(current) = open.pop() {
        let ci = current.idx;
        if current.dist > dist[ci] {
            stale += 1;
            continue;
        }
        settled += 1;
        let current_d = dist[ci];
        log::trace!("settled {} at {current_d}", current.pos);

        for &(np, w) in nb.successors(map, current.pos) {
            let Some(ni) = bounds.index_of(np) else {
                continue;
            };
            let tentative = current_d + w;
            if tentative >= dist[ni] {
                continue;
            }
            dist[ni] = tentative;
            prev[ni] = Some(ci);
            pushed += 1;
            open.push(FrontierEntry {
                dist: tentative,
                pos: np,
                idx: ni,
            });
        }
    }

    log::debug!(
        "dijkstra from {start} over {bounds}: {settled} settled, {pushed} pushed, {stale} stale"
    );

    Ok(DistanceMap {
        bounds,
        start,
        dist,
        prev,
    })
}
