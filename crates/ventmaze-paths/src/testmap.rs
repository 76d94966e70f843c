//! Small in-crate map used by the unit tests.

use std::collections::HashMap;

use ventmaze_core::Point;

use crate::traits::MapQuery;

pub(crate) struct TestMap {
    width: i32,
    height: i32,
    base: f64,
    horizontal: HashMap<Point, f64>,
    vertical: HashMap<Point, f64>,
    vents: HashMap<Point, (f64, Vec<Point>)>,
}

impl TestMap {
    pub(crate) fn open(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            base: 1.0,
            horizontal: HashMap::new(),
            vertical: HashMap::new(),
            vents: HashMap::new(),
        }
    }

    /// Boundary between `p` and the cell south of it.
    pub(crate) fn south_wall(mut self, p: Point, cost: f64) -> Self {
        self.horizontal.insert(p, cost);
        self
    }

    /// Boundary between `p` and the cell west of it.
    pub(crate) fn west_wall(mut self, p: Point, cost: f64) -> Self {
        self.vertical.insert(p, cost);
        self
    }

    pub(crate) fn vent(mut self, p: Point, cost: f64, links: &[Point]) -> Self {
        self.vents.insert(p, (cost, links.to_vec()));
        self
    }

    /// Vents at `a` and `b`, linked both ways.
    pub(crate) fn vent_pair(self, a: Point, b: Point, cost: f64) -> Self {
        self.vent(a, cost, &[b]).vent(b, cost, &[a])
    }
}

impl MapQuery for TestMap {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn horizontal_wall_cost(&self, p: Point) -> f64 {
        self.horizontal.get(&p).copied().unwrap_or(self.base)
    }

    fn vertical_wall_cost(&self, p: Point) -> f64 {
        self.vertical.get(&p).copied().unwrap_or(self.base)
    }

    fn has_vent(&self, p: Point) -> bool {
        self.vents.contains_key(&p)
    }

    fn other_vent_positions(&self, p: Point, buf: &mut Vec<Point>) {
        if let Some((_, links)) = self.vents.get(&p) {
            buf.extend_from_slice(links);
        }
    }

    fn vent_cost(&self, p: Point) -> f64 {
        self.vents.get(&p).map_or(0.0, |(c, _)| *c)
    }
}
