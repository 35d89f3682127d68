//! Cubic hex coordinate math for the skill grid
//!
//! Pure functions over the cube lattice (x + y + z = 0). No state, no
//! dependency on the catalog or codec.

pub mod coord;
pub mod rings;

pub use coord::{is_valid_position, GridPosition};
pub use rings::{generate_grid, generate_ring};
