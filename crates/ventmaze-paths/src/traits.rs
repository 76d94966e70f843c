use ventmaze_core::{Point, Range};

/// Wall cost marking an impassable boundary.
pub const BLOCKED: f64 = f64::INFINITY;

/// Read-only view of a maze, implemented by whatever owns the map data.
///
/// Wall records are indexed by cell. The horizontal record stored at a cell
/// describes the boundary on its south side, the vertical record the
/// boundary on its west side. The cost model reads them with a fixed
/// convention: north and east moves look at the target cell, south and west
/// moves look at the source cell.
pub trait MapQuery {
    /// Number of columns.
    fn width(&self) -> i32;

    /// Number of rows.
    fn height(&self) -> i32;

    /// Cost of the horizontal boundary at `p` (crossed by north/south moves).
    /// [`BLOCKED`] if impassable.
    fn horizontal_wall_cost(&self, p: Point) -> f64;

    /// Cost of the vertical boundary at `p` (crossed by east/west moves).
    /// [`BLOCKED`] if impassable.
    fn vertical_wall_cost(&self, p: Point) -> f64;

    /// Whether the horizontal boundary at `p` is impassable.
    fn has_horizontal_wall(&self, p: Point) -> bool {
        self.horizontal_wall_cost(p) == BLOCKED
    }

    /// Whether the vertical boundary at `p` is impassable.
    fn has_vertical_wall(&self, p: Point) -> bool {
        self.vertical_wall_cost(p) == BLOCKED
    }

    fn has_vent(&self, p: Point) -> bool;

    /// Append the vents linked to `p` into `buf`, in the map's own order.
    /// The caller clears `buf` before calling.
    fn other_vent_positions(&self, p: Point, buf: &mut Vec<Point>);

    /// Usage cost of any transition out of the vent at `p`.
    fn vent_cost(&self, p: Point) -> f64;

    /// The grid rectangle `[0, width) × [0, height)`.
    fn bounds(&self) -> Range {
        Range::new(0, 0, self.width(), self.height())
    }
}
