//! Edge costs between cells.

use ventmaze_core::{Direction, Point};

use crate::traits::{BLOCKED, MapQuery};

/// Cost of moving directly from `from` to `to`, or `None` if the move is
/// blocked.
///
/// A move between two linked vents costs the source vent's usage cost no
/// matter how far apart the cells are. Any other move must go to an
/// orthogonally adjacent in-bounds cell and costs the wall record of the
/// boundary it crosses.
pub fn cost<M: MapQuery>(from: Point, to: Point, map: &M) -> Option<f64> {
    let mut links = Vec::new();
    if map.has_vent(from) {
        map.other_vent_positions(from, &mut links);
    }
    step_cost(from, to, &links, map)
}

/// Whether a single step from `from` to `to` is impossible.
///
/// Walls reported by the map predicates block the step without weighing it.
/// Vent links take priority over walls. Any other step is blocked exactly
/// when [`cost`] would reject it, so malformed records block here too.
pub fn is_movement_blocked<M: MapQuery>(from: Point, to: Point, map: &M) -> bool {
    let bounds = map.bounds();
    if !bounds.contains(from) || !bounds.contains(to) {
        return true;
    }
    let mut links = Vec::new();
    if map.has_vent(from) {
        map.other_vent_positions(from, &mut links);
    }
    if !vent_linked(from, to, &links, map) {
        match from.direction_to(to) {
            Some(dir) if Boundary::crossed(from, dir).is_wall(map) => return true,
            Some(_) => {}
            None => return true,
        }
    }
    step_cost(from, to, &links, map).is_none()
}

/// Total cost of following `steps` from `start`, or `None` if any step is
/// blocked. An empty route costs nothing.
pub fn route_cost<M: MapQuery>(start: Point, steps: &[Point], map: &M) -> Option<f64> {
    let mut total = 0.0;
    let mut cur = start;
    for &next in steps {
        total += cost(cur, next, map)?;
        cur = next;
    }
    Some(total)
}

/// Cost model with the source's vent links already fetched into `links`.
pub(crate) fn step_cost<M: MapQuery>(
    from: Point,
    to: Point,
    links: &[Point],
    map: &M,
) -> Option<f64> {
    let bounds = map.bounds();
    if !bounds.contains(from) || !bounds.contains(to) {
        return None;
    }
    if vent_linked(from, to, links, map) {
        return usable(map.vent_cost(from), from, to);
    }
    let dir = from.direction_to(to)?;
    usable(Boundary::crossed(from, dir).cost(map), from, to)
}

/// One wall record: the kind of record and the cell it is stored at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Horizontal record, crossed by north/south moves.
    Horizontal(Point),
    /// Vertical record, crossed by east/west moves.
    Vertical(Point),
}

impl Boundary {
    /// The record crossed when leaving `from` towards `dir`.
    ///
    /// North and east read the target cell, south and west the source cell,
    /// so both directions across one boundary read the same record.
    #[inline]
    pub fn crossed(from: Point, dir: Direction) -> Self {
        match dir {
            Direction::North => Boundary::Horizontal(from.step(dir)),
            Direction::South => Boundary::Horizontal(from),
            Direction::East => Boundary::Vertical(from.step(dir)),
            Direction::West => Boundary::Vertical(from),
        }
    }

    /// The cell the record is stored at.
    #[inline]
    pub fn cell(self) -> Point {
        match self {
            Boundary::Horizontal(p) | Boundary::Vertical(p) => p,
        }
    }

    /// The raw record as reported by `map`.
    pub fn cost<M: MapQuery>(self, map: &M) -> f64 {
        match self {
            Boundary::Horizontal(p) => map.horizontal_wall_cost(p),
            Boundary::Vertical(p) => map.vertical_wall_cost(p),
        }
    }

    /// Whether `map` marks the record as a wall.
    pub fn is_wall<M: MapQuery>(self, map: &M) -> bool {
        match self {
            Boundary::Horizontal(p) => map.has_horizontal_wall(p),
            Boundary::Vertical(p) => map.has_vertical_wall(p),
        }
    }
}

#[inline]
fn vent_linked<M: MapQuery>(from: Point, to: Point, links: &[Point], map: &M) -> bool {
    from != to && links.contains(&to) && map.has_vent(from) && map.has_vent(to)
}

fn usable(c: f64, from: Point, to: Point) -> Option<f64> {
    if c == BLOCKED {
        return None;
    }
    if c.is_nan() || c < 0.0 {
        log::warn!("ignoring malformed cost {c} for move {from} -> {to}");
        return None;
    }
    Some(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testmap::TestMap;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn open_moves_cost_base() {
        let map = TestMap::open(3, 3);
        for d in Direction::ALL {
            assert_eq!(cost(p(1, 1), p(1, 1).step(d), &map), Some(1.0));
        }
    }

    #[test]
    fn non_adjacent_and_out_of_bounds_are_blocked() {
        let map = TestMap::open(3, 3);
        assert_eq!(cost(p(0, 0), p(1, 1), &map), None);
        assert_eq!(cost(p(0, 0), p(2, 0), &map), None);
        assert_eq!(cost(p(0, 0), p(0, 0), &map), None);
        assert_eq!(cost(p(0, 0), p(-1, 0), &map), None);
        assert_eq!(cost(p(2, 2), p(2, 3), &map), None);
        assert_eq!(cost(p(3, 0), p(2, 0), &map), None);
    }

    #[test]
    fn north_and_east_read_target_south_and_west_read_source() {
        // Climb between (1,1) and (1,2), stored on the south side of (1,2).
        // Wall between (1,1) and (2,1), stored on the west side of (2,1).
        let map = TestMap::open(3, 3)
            .south_wall(p(1, 2), 4.0)
            .west_wall(p(2, 1), BLOCKED);

        assert_eq!(cost(p(1, 1), p(1, 2), &map), Some(4.0));
        assert_eq!(cost(p(1, 2), p(1, 1), &map), Some(4.0));
        assert_eq!(cost(p(1, 1), p(2, 1), &map), None);
        assert_eq!(cost(p(2, 1), p(1, 1), &map), None);

        // The records do not leak onto the other sides of (1,1).
        assert_eq!(cost(p(1, 1), p(1, 0), &map), Some(1.0));
        assert_eq!(cost(p(1, 1), p(0, 1), &map), Some(1.0));
    }

    #[test]
    fn both_directions_share_a_record() {
        let p0 = p(2, 2);
        for d in Direction::ALL {
            assert_eq!(
                Boundary::crossed(p0, d),
                Boundary::crossed(p0.step(d), d.opposite())
            );
        }
        assert_eq!(Boundary::crossed(p0, Direction::North).cell(), p(2, 3));
        assert_eq!(Boundary::crossed(p0, Direction::West).cell(), p0);
    }

    #[test]
    fn orthogonal_costs_are_symmetric() {
        let map = TestMap::open(4, 4)
            .south_wall(p(1, 1), 2.5)
            .south_wall(p(3, 2), BLOCKED)
            .west_wall(p(2, 3), 7.0)
            .west_wall(p(1, 0), BLOCKED);
        for a in map.bounds() {
            for b in a.neighbors_4() {
                assert_eq!(cost(a, b, &map), cost(b, a, &map), "{a} <-> {b}");
            }
        }
    }

    #[test]
    fn vent_link_ignores_distance() {
        let map = TestMap::open(5, 5).vent_pair(p(0, 0), p(4, 4), 1.5);
        assert_eq!(cost(p(0, 0), p(4, 4), &map), Some(1.5));
        assert_eq!(cost(p(4, 4), p(0, 0), &map), Some(1.5));
    }

    #[test]
    fn vent_rule_wins_over_wall() {
        let map = TestMap::open(2, 1)
            .west_wall(p(1, 0), BLOCKED)
            .vent_pair(p(0, 0), p(1, 0), 0.5);
        assert_eq!(cost(p(0, 0), p(1, 0), &map), Some(0.5));
        assert!(!is_movement_blocked(p(0, 0), p(1, 0), &map));
    }

    #[test]
    fn vent_needs_both_ends_flagged_and_linked() {
        // (0,0) links to (3,3) but (3,3) is not a vent.
        let map = TestMap::open(4, 4)
            .vent(p(0, 0), 1.0, &[p(3, 3)])
            .vent(p(3, 0), 1.0, &[]);
        assert_eq!(cost(p(0, 0), p(3, 3), &map), None);
        assert_eq!(cost(p(0, 0), p(3, 0), &map), None);
    }

    #[test]
    fn vent_uses_source_cost() {
        let map = TestMap::open(4, 1)
            .vent(p(0, 0), 1.0, &[p(3, 0)])
            .vent(p(3, 0), 9.0, &[p(0, 0)]);
        assert_eq!(cost(p(0, 0), p(3, 0), &map), Some(1.0));
        assert_eq!(cost(p(3, 0), p(0, 0), &map), Some(9.0));
    }

    #[test]
    fn malformed_costs_are_blocked() {
        let map = TestMap::open(3, 1)
            .west_wall(p(1, 0), -1.0)
            .west_wall(p(2, 0), f64::NAN);
        assert_eq!(cost(p(0, 0), p(1, 0), &map), None);
        assert_eq!(cost(p(2, 0), p(1, 0), &map), None);
    }

    #[test]
    fn movement_blocked_agrees_on_malformed_costs() {
        let map = TestMap::open(3, 2)
            .west_wall(p(1, 0), -1.0)
            .south_wall(p(2, 1), f64::NAN)
            .vent(p(0, 1), -2.0, &[p(2, 1)])
            .vent(p(2, 1), 1.0, &[p(0, 1)]);
        assert!(is_movement_blocked(p(0, 0), p(1, 0), &map));
        assert!(is_movement_blocked(p(1, 0), p(0, 0), &map));
        assert!(is_movement_blocked(p(2, 0), p(2, 1), &map));
        assert!(is_movement_blocked(p(0, 1), p(2, 1), &map));
        assert!(!is_movement_blocked(p(2, 1), p(0, 1), &map));
        for a in map.bounds() {
            for b in map.bounds() {
                assert_eq!(
                    is_movement_blocked(a, b, &map),
                    cost(a, b, &map).is_none(),
                    "{a} -> {b}"
                );
            }
        }
    }

    #[test]
    fn movement_blocked_matches_walls() {
        let map = TestMap::open(3, 3)
            .south_wall(p(0, 1), BLOCKED)
            .west_wall(p(2, 2), 3.0);
        assert!(is_movement_blocked(p(0, 0), p(0, 1), &map));
        assert!(is_movement_blocked(p(0, 1), p(0, 0), &map));
        assert!(!is_movement_blocked(p(1, 2), p(2, 2), &map));
        assert!(!is_movement_blocked(p(0, 0), p(1, 0), &map));
        assert!(is_movement_blocked(p(0, 0), p(1, 1), &map));
        assert!(is_movement_blocked(p(0, 0), p(0, -1), &map));
        for a in map.bounds() {
            for b in a.neighbors_4() {
                assert_eq!(is_movement_blocked(a, b, &map), cost(a, b, &map).is_none());
            }
        }
    }

    #[test]
    fn route_cost_sums_steps() {
        let map = TestMap::open(3, 3)
            .south_wall(p(0, 1), 2.0)
            .vent_pair(p(0, 1), p(2, 2), 0.5);
        let steps = [p(0, 1), p(2, 2), p(2, 1)];
        assert_eq!(route_cost(p(0, 0), &steps, &map), Some(3.5));
        assert_eq!(route_cost(p(0, 0), &[], &map), Some(0.0));
        assert_eq!(route_cost(p(0, 0), &[p(1, 1)], &map), None);
    }
}
