//! Cubic hex coordinates for the skill grid
//!
//! The grid uses the cube coordinate system (x, y, z with x + y + z = 0).
//! Exported loadouts carry these coordinates verbatim, so the field names
//! are part of the wire format.

use serde::{Deserialize, Serialize};

/// The six unit steps on the cube lattice, in ring-walk order.
pub(crate) const CUBE_DIRECTIONS: [(i32, i32, i32); 6] = [
    (1, 0, -1),
    (1, -1, 0),
    (0, -1, 1),
    (-1, 0, 1),
    (-1, 1, 0),
    (0, 1, -1),
];

/// Cubic hex coordinate addressing one cell of the skill grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridPosition {
    /// The center cell of the grid
    pub const ORIGIN: GridPosition = GridPosition { x: 0, y: 0, z: 0 };

    /// Construct without checking the cube invariant.
    ///
    /// For trusted call sites (static data, ring generation). Decoded
    /// input goes through [`GridPosition::try_new`] instead.
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Construct from untrusted components, rejecting off-lattice triples.
    pub fn try_new(x: i32, y: i32, z: i32) -> Option<Self> {
        if is_valid_position(x, y, z) {
            Some(Self { x, y, z })
        } else {
            None
        }
    }

    /// True iff this coordinate satisfies the cube invariant x + y + z = 0
    pub fn is_on_lattice(&self) -> bool {
        is_valid_position(self.x, self.y, self.z)
    }

    /// Chebyshev cube distance in hex steps
    pub fn distance(&self, other: &GridPosition) -> i32 {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        let dz = (self.z - other.z).abs();
        dx.max(dy).max(dz)
    }

    /// Get all 6 adjacent cells
    pub fn neighbors(&self) -> [GridPosition; 6] {
        CUBE_DIRECTIONS
            .map(|(dx, dy, dz)| GridPosition::new(self.x + dx, self.y + dy, self.z + dz))
    }

    /// Project to pixel coordinates for rendering.
    ///
    /// Flat-top layout: the y axis of the cube coordinate does not appear
    /// in the projection (it is redundant on the lattice).
    pub fn to_pixel(&self, cell_size: f32) -> (f32, f32) {
        let sqrt3 = 3.0_f32.sqrt();
        let px = cell_size * 1.5 * self.x as f32;
        let py = cell_size * (sqrt3 / 2.0 * self.x as f32 + sqrt3 * self.z as f32);
        (px, py)
    }
}

/// True iff (x, y, z) lies on the cube lattice
pub fn is_valid_position(x: i32, y: i32, z: i32) -> bool {
    x + y + z == 0
}
