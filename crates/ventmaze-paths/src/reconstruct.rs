use ventmaze_core::{Point, Range};

use crate::error::PathError;

/// Turn the predecessor links of a finished search into a forward route.
///
/// The returned cells run from the one after `start` through `goal`; for
/// `goal == start` the route is empty. Returns `Ok(None)` when `goal` was
/// never reached. The walk is bounded by the number of cells so a cyclic or
/// truncated chain fails instead of looping.
pub(crate) fn reconstruct(
    goal: Point,
    start: Point,
    bounds: Range,
    predecessor: &[Option<usize>],
    distance: &[f64],
) -> Result<Option<Vec<Point>>, PathError> {
    debug_assert_eq!(predecessor.len(), distance.len());
    let gi = bounds.index_of(goal).ok_or(PathError::OutOfBounds {
        point: goal,
        bounds,
    })?;
    let si = bounds.index_of(start).ok_or(PathError::OutOfBounds {
        point: start,
        bounds,
    })?;
    if distance[gi] == f64::INFINITY {
        return Ok(None);
    }

    let broken = || {
        log::error!("predecessor chain from {goal} does not reach {start}");
        PathError::BrokenPredecessorChain { start, goal }
    };

    let limit = distance.len();
    let mut path = Vec::new();
    let mut ci = gi;
    while ci != si {
        if path.len() >= limit {
            return Err(broken());
        }
        path.push(bounds.point_at(ci));
        ci = predecessor[ci].ok_or_else(broken)?;
    }
    path.reverse();
    Ok(Some(path))
}
