//! **ventmaze-core**: geometry primitives for grid mazes.
//!
//! This crate provides the foundational types shared by the *ventmaze*
//! crates: the [`Point`] cell coordinate, the half-open [`Range`] used for
//! grid bounds, and the four cardinal [`Direction`]s.

pub mod geom;

pub use geom::{Direction, Point, Range};
