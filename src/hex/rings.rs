//! Ring and grid generation around the center cell

use crate::hex::coord::{GridPosition, CUBE_DIRECTIONS};

/// Generate every cell at exactly `ring_index` steps from the origin.
///
/// Ring 0 is the origin alone; ring n has 6n cells. The ring is walked
/// edge by edge on the integer lattice, so each cell appears exactly once
/// and no floating-point rounding is involved.
pub fn generate_ring(ring_index: u32) -> Vec<GridPosition> {
    if ring_index == 0 {
        return vec![GridPosition::ORIGIN];
    }

    let r = ring_index as i32;
    let mut cells = Vec::with_capacity(6 * ring_index as usize);

    // Start at a corner of the ring, then walk r steps along each edge.
    let (dx, dy, dz) = CUBE_DIRECTIONS[4];
    let mut current = GridPosition::new(dx * r, dy * r, dz * r);
    for (dx, dy, dz) in CUBE_DIRECTIONS {
        for _ in 0..r {
            cells.push(current);
            current = GridPosition::new(current.x + dx, current.y + dy, current.z + dz);
        }
    }

    cells
}

/// Generate the full grid out to `radius`: the union of rings 0..=radius.
///
/// The observed grid uses radius 4 (61 cells), but the radius is
/// configuration, not a property of the coordinate system.
pub fn generate_grid(radius: u32) -> Vec<GridPosition> {
    (0..=radius).flat_map(generate_ring).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ring_zero_is_origin() {
        assert_eq!(generate_ring(0), vec![GridPosition::ORIGIN]);
    }

    #[test]
    fn test_ring_one_has_six_distinct_cells() {
        let ring = generate_ring(1);
        assert_eq!(ring.len(), 6);

        let unique: HashSet<_> = ring.iter().copied().collect();
        assert_eq!(unique.len(), 6);

        for cell in &ring {
            assert!(cell.is_on_lattice());
            assert_eq!(cell.distance(&GridPosition::ORIGIN), 1);
        }
    }

    #[test]
    fn test_rings_have_no_duplicates() {
        for ring_index in 0..=6 {
            let ring = generate_ring(ring_index);
            let unique: HashSet<_> = ring.iter().copied().collect();
            assert_eq!(ring.len(), unique.len());
            if ring_index > 0 {
                assert_eq!(ring.len(), 6 * ring_index as usize);
            }
            for cell in &ring {
                assert_eq!(cell.distance(&GridPosition::ORIGIN), ring_index as i32);
            }
        }
    }

    #[test]
    fn test_radius_four_grid_has_61_cells() {
        let grid = generate_grid(4);
        assert_eq!(grid.len(), 61);

        let unique: HashSet<_> = grid.iter().copied().collect();
        assert_eq!(unique.len(), 61);
    }
}
