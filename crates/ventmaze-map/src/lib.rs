//! Maze maps for ventmaze: an in-memory [`MazeGrid`], an ASCII
//! [`Layout`] format and a seeded random generator, [`MazeGen`].
//!
//! [`MazeGrid`] implements [`ventmaze_paths::MapQuery`], so it can be
//! handed straight to [`ventmaze_paths::find_shortest_path`].

pub mod grid;
pub mod layout;
pub mod mapgen;

pub use grid::{MapError, MazeGrid, Vent, Wall};
pub use layout::{Layout, LayoutError, LayoutOptions};
pub use mapgen::{MazeGen, MazeGenConfig};
