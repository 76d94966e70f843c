use std::fmt;

use ventmaze_core::{Point, Range};

/// Errors reported by the route search.
///
/// An unreachable goal is not an error: searches return `Ok(None)` for it.
#[derive(Debug, Clone, PartialEq)]
pub enum PathError {
    /// A start or goal cell lies outside the grid.
    OutOfBounds { point: Point, bounds: Range },
    /// The predecessor links of a reached cell do not lead back to the
    /// start. This is a defect in the solver or an inconsistent map, never
    /// a property of the maze layout.
    BrokenPredecessorChain { start: Point, goal: Point },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { point, bounds } => {
                write!(f, "cell {point} is outside the grid {bounds}")
            }
            Self::BrokenPredecessorChain { start, goal } => write!(
                f,
                "internal error: predecessor chain from {goal} does not reach {start}"
            ),
        }
    }
}

impl std::error::Error for PathError {}
