use ventmaze_core::Point;

/// Manhattan (L1) distance between two points.
///
/// On a maze without walls or vents and with unit crossing costs this is
/// the length of every shortest route.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
