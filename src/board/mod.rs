//! Board topology and stone occupancy.
//!
//! - `topology`: the fixed adjacency graph and the 16 mill lines
//! - `model`: `Board`, the occupancy of the 24 positions
//!
//! Nothing here knows about turns or phases.

pub mod model;
pub mod topology;

pub use model::{Board, Neighbors};
pub use topology::{ADJACENCY, LINES_THROUGH, MILL_LINES};
