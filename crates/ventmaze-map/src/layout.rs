//! Mazes drawn as text.
//!
//! A [`Layout`] is `2h+1` lines of `2w+1` characters. The first line is the
//! northern border. Cell `(x, y)` sits at column `2x+1` of line
//! `2(h-1-y)+1`; the characters between cells describe the boundaries:
//!
//! ```text
//! +-+-+-+
//! |A  ~B|     ' ' open   '|' / '-' wall   '~' climb
//! + +-+ +
//! |. . A|     '.' or ' ' floor, 'A'..='Z' vents (same letter = linked)
//! +-+-+-+
//! ```
//!
//! Corners and the outer border are decoration and never interpreted.

use std::collections::BTreeMap;
use std::fmt;

use ventmaze_core::{Direction, Point};

use crate::grid::{MapError, MazeGrid, Wall};

/// Costs applied when building a maze from a layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutOptions {
    /// Cost of an open boundary.
    pub base_cost: f64,
    /// Cost of a `~` boundary.
    pub climb_cost: f64,
    /// Usage cost of every vent.
    pub vent_cost: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            base_cost: 1.0,
            climb_cost: 3.0,
            vent_cost: 2.0,
        }
    }
}

/// A parsed maze drawing.
#[derive(Debug, Clone)]
pub struct Layout {
    lines: Vec<Vec<char>>,
    width: i32,
    height: i32,
}

impl Layout {
    /// Parse a drawing. Blank lines before and after the drawing are
    /// ignored; every other line must have the same length.
    pub fn new(s: &str) -> Result<Self, LayoutError> {
        let mut lines: Vec<Vec<char>> = s
            .lines()
            .map(|l| l.trim_end_matches('\r').chars().collect())
            .collect();
        while lines.first().is_some_and(|l| is_blank(l)) {
            lines.remove(0);
        }
        while lines.last().is_some_and(|l| is_blank(l)) {
            lines.pop();
        }
        if lines.is_empty() {
            return Err(LayoutError::Empty);
        }

        let columns = lines[0].len();
        for (i, l) in lines.iter().enumerate() {
            if l.len() != columns {
                return Err(LayoutError::InconsistentWidth {
                    line: i,
                    expected: columns,
                    found: l.len(),
                });
            }
        }
        let rows = lines.len();
        if rows < 3 || columns < 3 || rows % 2 == 0 || columns % 2 == 0 {
            return Err(LayoutError::BadDimensions { rows, columns });
        }

        Ok(Self {
            width: ((columns - 1) / 2) as i32,
            height: ((rows - 1) / 2) as i32,
            lines,
        })
    }

    /// Size in cells as (width, height).
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    fn glyph(&self, line: usize, column: usize) -> char {
        self.lines[line][column]
    }

    /// Text position of cell `p`.
    fn cell_pos(&self, p: Point) -> (usize, usize) {
        let line = 2 * (self.height - 1 - p.y) + 1;
        (line as usize, (2 * p.x + 1) as usize)
    }

    /// Build the maze described by the drawing.
    pub fn build(&self, opts: &LayoutOptions) -> Result<MazeGrid, LayoutError> {
        let mut grid = MazeGrid::with_base_cost(self.width, self.height, opts.base_cost)?;
        let mut groups: BTreeMap<char, Vec<Point>> = BTreeMap::new();

        // Reading order: northern row first, west to east.
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let p = Point::new(x, y);
                let (line, column) = self.cell_pos(p);
                match self.glyph(line, column) {
                    '.' | ' ' => {}
                    c @ 'A'..='Z' => groups.entry(c).or_default().push(p),
                    ch => return Err(LayoutError::InvalidGlyph { ch, line, column }),
                }
                if x + 1 < self.width {
                    let wall = self.boundary(line, column + 1, '|', opts)?;
                    if wall != Wall::Open {
                        grid.set_wall(p, Direction::East, wall)?;
                    }
                }
                if y > 0 {
                    let wall = self.boundary(line + 1, column, '-', opts)?;
                    if wall != Wall::Open {
                        grid.set_wall(p, Direction::South, wall)?;
                    }
                }
            }
        }

        for (letter, members) in &groups {
            for &p in members {
                grid.add_vent(p, opts.vent_cost)?;
            }
            grid.link_group(members)?;
            log::debug!("layout: vent {letter} links {} cells", members.len());
        }
        Ok(grid)
    }

    fn boundary(
        &self,
        line: usize,
        column: usize,
        wall: char,
        opts: &LayoutOptions,
    ) -> Result<Wall, LayoutError> {
        match self.glyph(line, column) {
            ' ' => Ok(Wall::Open),
            '~' => Ok(Wall::Climb(opts.climb_cost)),
            c if c == wall => Ok(Wall::Blocked),
            ch => Err(LayoutError::InvalidGlyph { ch, line, column }),
        }
    }
}

fn is_blank(line: &[char]) -> bool {
    line.iter().all(|c| c.is_whitespace())
}

/// Errors that can occur when reading a layout.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Nothing but blank lines.
    Empty,
    /// A line's length differs from the first line's.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// Line count and length must both be odd and at least 3.
    BadDimensions { rows: usize, columns: usize },
    /// A cell or boundary holds a character with no meaning there.
    InvalidGlyph { ch: char, line: usize, column: usize },
    /// The options produced an invalid maze (e.g. a negative cost).
    Map(MapError),
}

impl From<MapError> for LayoutError {
    fn from(e: MapError) -> Self {
        Self::Map(e)
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "layout: empty drawing"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "layout: line {line} has {found} characters, expected {expected}"
            ),
            Self::BadDimensions { rows, columns } => write!(
                f,
                "layout: {rows}x{columns} drawing is not an odd size of at least 3x3"
            ),
            Self::InvalidGlyph { ch, line, column } => write!(
                f,
                "layout: unexpected '{ch}' at line {line}, column {column}"
            ),
            Self::Map(e) => write!(f, "layout: {e}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Map(e) => Some(e),
            _ => None,
        }
    }
}
