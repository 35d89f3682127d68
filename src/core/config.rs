//! Grid configuration with documented constants
//!
//! The codec itself is configuration-free; these values shape the grid
//! the placement layer and the UI operate over.

/// Configuration for the skill grid
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Number of rings around the center cell.
    ///
    /// The game client renders 4 rings (61 cells total). This bounds
    /// where placeable skills may go; it does not affect the codec,
    /// which round-trips whatever coordinates the wire carries.
    pub ring_radius: u32,

    /// Pixel size of one hex cell, used by the pixel projection.
    ///
    /// Purely presentational. 40 matches the site's grid rendering.
    pub cell_size: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            ring_radius: 4,
            cell_size: 40.0,
        }
    }
}

impl GridConfig {
    /// Total number of cells in the grid: 1 + 6 + 12 + ... = 3r(r+1) + 1
    pub fn cell_count(&self) -> usize {
        let r = self.ring_radius as usize;
        3 * r * (r + 1) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_is_61_cells() {
        assert_eq!(GridConfig::default().cell_count(), 61);
    }

    #[test]
    fn test_cell_count_matches_generated_grid() {
        for radius in 0..=5 {
            let config = GridConfig {
                ring_radius: radius,
                ..GridConfig::default()
            };
            assert_eq!(
                config.cell_count(),
                crate::hex::generate_grid(radius).len()
            );
        }
    }
}
