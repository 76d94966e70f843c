//! Random maze generation.
//!
//! [`MazeGen`] rolls every interior boundary independently (open, climb or
//! wall) and then scatters vent pairs over the grid. Given a seeded RNG the
//! result is reproducible, which makes it a convenient source of test mazes.

use rand::Rng;
use ventmaze_core::{Direction, Point};

use crate::grid::{MapError, MazeGrid, Wall, check_cost};

/// Parameters for [`MazeGen::generate`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeGenConfig {
    /// Chance (0.0–1.0) that a boundary is a wall.
    pub wall_pct: f64,
    /// Chance (0.0–1.0) that a boundary is a climb.
    pub climb_pct: f64,
    /// Climb costs are drawn uniformly from this inclusive range.
    pub climb_cost: (f64, f64),
    /// Number of vent pairs to place.
    pub vent_pairs: usize,
    /// Usage cost of every vent.
    pub vent_cost: f64,
}

impl Default for MazeGenConfig {
    fn default() -> Self {
        Self {
            wall_pct: 0.25,
            climb_pct: 0.15,
            climb_cost: (2.0, 5.0),
            vent_pairs: 2,
            vent_cost: 1.5,
        }
    }
}

/// Random maze generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `width` × `height` maze.
    ///
    /// Vent pairs join two distinct random cells; a cell picked twice ends
    /// up linked to both partners. Both climb cost bounds must be finite
    /// and non-negative.
    pub fn generate(
        &mut self,
        width: i32,
        height: i32,
        cfg: &MazeGenConfig,
    ) -> Result<MazeGrid, MapError> {
        let (lo, hi) = cfg.climb_cost;
        check_cost(lo)?;
        check_cost(hi)?;
        let mut grid = MazeGrid::new(width, height);
        let (mut walls, mut climbs) = (0usize, 0usize);

        for y in 0..height {
            for x in 0..width {
                let p = Point::new(x, y);
                for dir in [Direction::North, Direction::East] {
                    let q = p.step(dir);
                    if q.x >= width || q.y >= height {
                        continue;
                    }
                    let wall = self.roll_wall(cfg);
                    match wall {
                        Wall::Open => continue,
                        Wall::Climb(_) => climbs += 1,
                        Wall::Blocked => walls += 1,
                    }
                    grid.set_wall(p, dir, wall)?;
                }
            }
        }

        let cells = (width.max(0) as usize) * (height.max(0) as usize);
        let mut vents = 0usize;
        if cells >= 2 {
            for _ in 0..cfg.vent_pairs {
                let a = self.random_cell(width, height);
                let mut b = self.random_cell(width, height);
                while b == a {
                    b = self.random_cell(width, height);
                }
                for v in [a, b] {
                    if grid.vent(v).is_none() {
                        grid.add_vent(v, cfg.vent_cost)?;
                    }
                }
                grid.link_vents(a, b)?;
                vents += 1;
            }
        }

        log::debug!(
            "mapgen: {width}x{height} maze with {walls} walls, {climbs} climbs, {vents} vent pairs"
        );
        Ok(grid)
    }

    fn roll_wall(&mut self, cfg: &MazeGenConfig) -> Wall {
        let roll: f64 = self.rng.random();
        if roll < cfg.wall_pct {
            Wall::Blocked
        } else if roll < cfg.wall_pct + cfg.climb_pct {
            let (lo, hi) = cfg.climb_cost;
            let c = if hi > lo {
                self.rng.random_range(lo..=hi)
            } else {
                lo
            };
            Wall::Climb(c)
        } else {
            Wall::Open
        }
    }

    fn random_cell(&mut self, width: i32, height: i32) -> Point {
        Point::new(
            self.rng.random_range(0..width),
            self.rng.random_range(0..height),
        )
    }
}
