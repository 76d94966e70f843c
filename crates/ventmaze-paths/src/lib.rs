//! Shortest routes through grid mazes.
//!
//! Cells are connected to their four orthogonal neighbours through
//! boundaries that are free, weighted (a climb) or blocked (a wall). Vent
//! cells add direct links to distant vents at a fixed usage cost.
//!
//! - **Cost model** ([`cost`], [`is_movement_blocked`], [`route_cost`])
//! - **Successors** of a cell ([`Neighbors`])
//! - **Dijkstra** single-source distance maps ([`dijkstra_map`])
//! - **Routes** between two cells ([`find_shortest_path`])
//!
//! All map access goes through the read-only [`MapQuery`] trait, so the
//! same map can serve any number of independent searches. Every search
//! allocates its own state and keeps nothing once it returns.

mod cost;
mod dijkstra;
mod distance;
mod error;
mod neighbors;
mod reconstruct;
mod route;
mod traits;

#[cfg(test)]
mod testmap;

pub use cost::{Boundary, cost, is_movement_blocked, route_cost};
pub use dijkstra::{DistanceMap, dijkstra_map};
pub use distance::manhattan;
pub use error::PathError;
pub use neighbors::Neighbors;
pub use route::{Route, find_shortest_path};
pub use traits::{BLOCKED, MapQuery};
