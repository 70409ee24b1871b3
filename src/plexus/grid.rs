use std::collections::HashMap;

use glam::{IVec3, Vec3};

pub(super) struct UniformGrid {
    cell_size: f32,
    cells: HashMap<IVec3, Vec<usize>>,
}

impl UniformGrid {
    pub(super) fn build(positions: &[Vec3], cell_size: f32) -> Self {
        let mut cells: HashMap<IVec3, Vec<usize>> = HashMap::new();
        for (index, &position) in positions.iter().enumerate() {
            if !position.is_finite() {
                continue;
            }
            cells
                .entry(cell_of(position, cell_size))
                .or_default()
                .push(index);
        }

        Self { cell_size, cells }
    }

    pub(super) fn neighbors_into(&self, position: Vec3, out: &mut Vec<usize>) {
        if !position.is_finite() {
            return;
        }

        let center = cell_of(position, self.cell_size);
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let cell = center.saturating_add(IVec3::new(dx, dy, dz));
                    if let Some(indices) = self.cells.get(&cell) {
                        out.extend_from_slice(indices);
                    }
                }
            }
        }
    }
}

fn cell_of(position: Vec3, cell_size: f32) -> IVec3 {
    (position / cell_size).floor().as_ivec3()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighborhood_spans_adjacent_cells() {
        let positions = [
            Vec3::new(5.0, 5.0, 5.0),
            Vec3::new(-5.0, 5.0, 5.0),
            Vec3::new(25.0, 5.0, 5.0),
        ];
        let grid = UniformGrid::build(&positions, 10.0);

        let mut found = Vec::new();
        grid.neighbors_into(positions[0], &mut found);
        found.sort_unstable();
        assert_eq!(found, vec![0, 1]);
    }

    #[test]
    fn extreme_cells_saturate_instead_of_overflowing() {
        let positions = [Vec3::new(4.0e9, 0.0, 0.0), Vec3::new(-4.0e9, 0.0, 0.0)];
        let grid = UniformGrid::build(&positions, 1.0);

        let mut found = Vec::new();
        grid.neighbors_into(positions[0], &mut found);
        found.sort_unstable();
        found.dedup();
        assert_eq!(found, vec![0]);
    }
}
