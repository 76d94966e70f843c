//! An in-memory maze map.
//!
//! [`MazeGrid`] stores one horizontal and one vertical [`Wall`] record per
//! cell (the boundary on the cell's south and west side respectively) and
//! an optional [`Vent`]. Edits are addressed by cell and direction; the
//! grid works out which record the boundary lives in.

use std::fmt;

use ventmaze_core::{Direction, Point, Range};
use ventmaze_paths::{BLOCKED, Boundary, MapQuery};

/// State of one boundary between two adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Wall {
    /// Crossing costs the grid's base cost.
    #[default]
    Open,
    /// Crossing costs the given amount.
    Climb(f64),
    /// Impassable.
    Blocked,
}

/// A vent: its usage cost and the vents it leads to, in link order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vent {
    pub cost: f64,
    pub links: Vec<Point>,
}

/// A rectangular maze with weighted walls and vents.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeGrid {
    width: i32,
    height: i32,
    base_cost: f64,
    /// Boundary on the south side of each cell, row-major.
    horizontal: Vec<Wall>,
    /// Boundary on the west side of each cell, row-major.
    vertical: Vec<Wall>,
    vents: Vec<Option<Vent>>,
}

impl MazeGrid {
    /// Create an open maze where every crossing costs `1.0`.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            base_cost: 1.0,
            horizontal: vec![Wall::Open; len],
            vertical: vec![Wall::Open; len],
            vents: vec![None; len],
        }
    }

    /// Create an open maze where every crossing costs `base_cost`.
    pub fn with_base_cost(width: i32, height: i32, base_cost: f64) -> Result<Self, MapError> {
        check_cost(base_cost)?;
        let mut grid = Self::new(width, height);
        grid.base_cost = base_cost;
        Ok(grid)
    }

    /// Cost of crossing an open boundary.
    pub fn base_cost(&self) -> f64 {
        self.base_cost
    }

    fn idx(&self, p: Point) -> Option<usize> {
        Range::new(0, 0, self.width, self.height).index_of(p)
    }

    fn slot(&self, p: Point, dir: Direction) -> Result<Boundary, MapError> {
        let q = p.step(dir);
        for point in [p, q] {
            if self.idx(point).is_none() {
                return Err(MapError::OutOfBounds { point });
            }
        }
        Ok(Boundary::crossed(p, dir))
    }

    /// The boundary between `p` and its neighbour towards `dir`, or `None`
    /// if either cell is outside the grid.
    pub fn wall(&self, p: Point, dir: Direction) -> Option<Wall> {
        let slot = self.slot(p, dir).ok()?;
        let i = self.idx(slot.cell())?;
        match slot {
            Boundary::Horizontal(_) => self.horizontal.get(i).copied(),
            Boundary::Vertical(_) => self.vertical.get(i).copied(),
        }
    }

    /// Set the boundary between `p` and its neighbour towards `dir`.
    ///
    /// `set_wall(p, North, w)` and `set_wall(p + North, South, w)` address
    /// the same boundary.
    pub fn set_wall(&mut self, p: Point, dir: Direction, wall: Wall) -> Result<(), MapError> {
        if let Wall::Climb(c) = wall {
            check_cost(c)?;
        }
        let slot = self.slot(p, dir)?;
        let i = self.idx(slot.cell()).ok_or(MapError::OutOfBounds { point: p })?;
        let records = match slot {
            Boundary::Horizontal(_) => &mut self.horizontal,
            Boundary::Vertical(_) => &mut self.vertical,
        };
        if let Some(r) = records.get_mut(i) {
            *r = wall;
        }
        Ok(())
    }

    /// Make the boundary between `p` and its neighbour towards `dir`
    /// impassable.
    pub fn block(&mut self, p: Point, dir: Direction) -> Result<(), MapError> {
        self.set_wall(p, dir, Wall::Blocked)
    }

    /// Make crossing from `p` towards `dir` cost `cost`, in both directions.
    pub fn climb(&mut self, p: Point, dir: Direction, cost: f64) -> Result<(), MapError> {
        self.set_wall(p, dir, Wall::Climb(cost))
    }

    /// Turn `p` into a vent with the given usage cost. An existing vent
    /// keeps its links.
    pub fn add_vent(&mut self, p: Point, cost: f64) -> Result<(), MapError> {
        check_cost(cost)?;
        let slot = self
            .idx(p)
            .and_then(|i| self.vents.get_mut(i))
            .ok_or(MapError::OutOfBounds { point: p })?;
        if let Some(v) = slot {
            v.cost = cost;
        } else {
            *slot = Some(Vent {
                cost,
                links: Vec::new(),
            });
        }
        Ok(())
    }

    /// The vent at `p`, if any.
    pub fn vent(&self, p: Point) -> Option<&Vent> {
        self.vents.get(self.idx(p)?)?.as_ref()
    }

    fn vent_mut(&mut self, p: Point) -> Result<&mut Vent, MapError> {
        let slot = self
            .idx(p)
            .and_then(|i| self.vents.get_mut(i))
            .ok_or(MapError::OutOfBounds { point: p })?;
        slot.as_mut().ok_or(MapError::NotAVent { point: p })
    }

    /// Link two vents in both directions. Linking twice is a no-op.
    pub fn link_vents(&mut self, a: Point, b: Point) -> Result<(), MapError> {
        if a == b {
            return Err(MapError::SelfLink { point: a });
        }
        // Check both ends before touching either.
        self.vent_mut(b)?;
        for (from, to) in [(a, b), (b, a)] {
            let v = self.vent_mut(from)?;
            if !v.links.contains(&to) {
                v.links.push(to);
            }
        }
        Ok(())
    }

    /// Link every pair of vents in `group`, in order.
    pub fn link_group(&mut self, group: &[Point]) -> Result<(), MapError> {
        for (i, &a) in group.iter().enumerate() {
            for &b in &group[i + 1..] {
                self.link_vents(a, b)?;
            }
        }
        Ok(())
    }

    /// Iterate over every vent and its position in row-major order.
    pub fn vents(&self) -> impl Iterator<Item = (Point, &Vent)> + '_ {
        let bounds = self.bounds();
        bounds
            .iter()
            .zip(self.vents.iter())
            .filter_map(|(p, v)| v.as_ref().map(|v| (p, v)))
    }

    fn record_cost(&self, records: &[Wall], p: Point) -> f64 {
        let wall = self.idx(p).and_then(|i| records.get(i));
        match wall {
            Some(Wall::Open) => self.base_cost,
            Some(Wall::Climb(c)) => *c,
            Some(Wall::Blocked) | None => BLOCKED,
        }
    }
}

impl MapQuery for MazeGrid {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn horizontal_wall_cost(&self, p: Point) -> f64 {
        self.record_cost(&self.horizontal, p)
    }

    fn vertical_wall_cost(&self, p: Point) -> f64 {
        self.record_cost(&self.vertical, p)
    }

    fn has_vent(&self, p: Point) -> bool {
        self.vent(p).is_some()
    }

    fn other_vent_positions(&self, p: Point, buf: &mut Vec<Point>) {
        if let Some(v) = self.vent(p) {
            buf.extend_from_slice(&v.links);
        }
    }

    fn vent_cost(&self, p: Point) -> f64 {
        self.vent(p).map_or(BLOCKED, |v| v.cost)
    }
}

pub(crate) fn check_cost(cost: f64) -> Result<(), MapError> {
    if cost.is_finite() && cost >= 0.0 {
        Ok(())
    } else {
        Err(MapError::InvalidCost { cost })
    }
}

/// Errors returned when editing a [`MazeGrid`].
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    /// A cell (or the neighbour across the edited boundary) is outside the grid.
    OutOfBounds { point: Point },
    /// Costs must be finite and non-negative.
    InvalidCost { cost: f64 },
    /// The cell is not a vent.
    NotAVent { point: Point },
    /// A vent cannot link to itself.
    SelfLink { point: Point },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { point } => write!(f, "maze: cell {point} is out of bounds"),
            Self::InvalidCost { cost } => write!(f, "maze: invalid cost {cost}"),
            Self::NotAVent { point } => write!(f, "maze: no vent at {point}"),
            Self::SelfLink { point } => write!(f, "maze: vent at {point} cannot link to itself"),
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;
    use ventmaze_paths::{cost, is_movement_blocked};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_new_and_size() {
        let g = MazeGrid::new(10, 5);
        assert_eq!(g.width(), 10);
        assert_eq!(g.height(), 5);
        assert_eq!(g.bounds(), Range::new(0, 0, 10, 5));
        assert_eq!(g.base_cost(), 1.0);

        let g = MazeGrid::new(-3, 4);
        assert_eq!(g.bounds().len(), 0);
    }

    #[test]
    fn test_base_cost() {
        let g = MazeGrid::with_base_cost(3, 3, 2.5).unwrap();
        assert_eq!(cost(p(0, 0), p(1, 0), &g), Some(2.5));
        assert_eq!(
            MazeGrid::with_base_cost(3, 3, -1.0),
            Err(MapError::InvalidCost { cost: -1.0 })
        );
    }

    #[test]
    fn test_wall_lands_in_shared_record() {
        let mut g = MazeGrid::new(3, 3);
        g.climb(p(1, 1), Direction::North, 4.0).unwrap();
        assert_eq!(g.wall(p(1, 2), Direction::South), Some(Wall::Climb(4.0)));
        assert_eq!(g.horizontal_wall_cost(p(1, 2)), 4.0);

        g.block(p(2, 1), Direction::West).unwrap();
        assert_eq!(g.wall(p(1, 1), Direction::East), Some(Wall::Blocked));
        assert!(g.has_vertical_wall(p(2, 1)));
        assert!(!g.has_horizontal_wall(p(2, 1)));

        assert_eq!(cost(p(1, 1), p(1, 2), &g), Some(4.0));
        assert_eq!(cost(p(1, 2), p(1, 1), &g), Some(4.0));
        assert!(is_movement_blocked(p(1, 1), p(2, 1), &g));
        assert!(is_movement_blocked(p(2, 1), p(1, 1), &g));
    }

    #[test]
    fn test_edit_errors() {
        let mut g = MazeGrid::new(2, 2);
        assert_eq!(
            g.block(p(1, 1), Direction::East),
            Err(MapError::OutOfBounds { point: p(2, 1) })
        );
        assert_eq!(
            g.climb(p(0, 0), Direction::North, f64::NAN).unwrap_err().to_string(),
            "maze: invalid cost NaN"
        );
        assert_eq!(
            g.add_vent(p(5, 5), 1.0),
            Err(MapError::OutOfBounds { point: p(5, 5) })
        );
        assert_eq!(g.wall(p(0, 0), Direction::South), None);
    }

    #[test]
    fn test_vents_link_both_ways_once() {
        let mut g = MazeGrid::new(4, 4);
        g.add_vent(p(0, 0), 2.0).unwrap();
        g.add_vent(p(3, 3), 2.0).unwrap();
        g.link_vents(p(0, 0), p(3, 3)).unwrap();
        g.link_vents(p(3, 3), p(0, 0)).unwrap();

        let mut buf = Vec::new();
        g.other_vent_positions(p(0, 0), &mut buf);
        assert_eq!(buf, vec![p(3, 3)]);
        assert_eq!(g.vent(p(3, 3)).unwrap().links, vec![p(0, 0)]);
        assert_eq!(g.vent_cost(p(0, 0)), 2.0);
        assert_eq!(cost(p(0, 0), p(3, 3), &g), Some(2.0));
    }

    #[test]
    fn test_link_errors_leave_grid_untouched() {
        let mut g = MazeGrid::new(4, 4);
        g.add_vent(p(0, 0), 1.0).unwrap();
        assert_eq!(
            g.link_vents(p(0, 0), p(1, 1)),
            Err(MapError::NotAVent { point: p(1, 1) })
        );
        assert_eq!(
            g.link_vents(p(0, 0), p(0, 0)),
            Err(MapError::SelfLink { point: p(0, 0) })
        );
        assert!(g.vent(p(0, 0)).unwrap().links.is_empty());
        assert!(!g.has_vent(p(1, 1)));
    }

    #[test]
    fn test_link_group_and_iteration() {
        let mut g = MazeGrid::new(3, 3);
        let group = [p(2, 2), p(0, 0), p(1, 2)];
        for &v in &group {
            g.add_vent(v, 1.0).unwrap();
        }
        g.link_group(&group).unwrap();
        assert_eq!(g.vent(p(2, 2)).unwrap().links, vec![p(0, 0), p(1, 2)]);
        assert_eq!(g.vent(p(0, 0)).unwrap().links, vec![p(2, 2), p(1, 2)]);

        let positions: Vec<_> = g.vents().map(|(q, _)| q).collect();
        assert_eq!(positions, vec![p(0, 0), p(1, 2), p(2, 2)]);
    }

    #[test]
    fn test_re_adding_vent_keeps_links() {
        let mut g = MazeGrid::new(2, 1);
        g.add_vent(p(0, 0), 1.0).unwrap();
        g.add_vent(p(1, 0), 1.0).unwrap();
        g.link_vents(p(0, 0), p(1, 0)).unwrap();
        g.add_vent(p(0, 0), 0.5).unwrap();
        let v = g.vent(p(0, 0)).unwrap();
        assert_eq!(v.cost, 0.5);
        assert_eq!(v.links, vec![p(1, 0)]);
    }
}
