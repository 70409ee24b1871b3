use glam::Vec3;
use serde::Deserialize;

use super::grid::UniformGrid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PairScan {
    #[default]
    AllPairs,
    Grid,
}

impl PairScan {
    pub fn label(self) -> &'static str {
        match self {
            Self::AllPairs => "all pairs",
            Self::Grid => "uniform grid",
        }
    }

    pub fn near_pairs(self, positions: &[Vec3], threshold: f32) -> Vec<(usize, usize)> {
        match self {
            Self::AllPairs => near_pairs_all(positions, threshold),
            Self::Grid => near_pairs_grid(positions, threshold),
        }
    }
}

pub fn is_near(a: Vec3, b: Vec3, threshold: f32) -> bool {
    let distance = a.distance(b);
    distance.is_finite() && distance < threshold
}

pub fn near_pairs_all(positions: &[Vec3], threshold: f32) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            if is_near(positions[i], positions[j], threshold) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

pub fn near_pairs_grid(positions: &[Vec3], threshold: f32) -> Vec<(usize, usize)> {
    if !(threshold.is_finite() && threshold > 0.0) {
        return Vec::new();
    }
    if !cells_fit_in_grid(positions, threshold) {
        return near_pairs_all(positions, threshold);
    }

    let grid = UniformGrid::build(positions, threshold);
    let mut pairs = Vec::new();
    let mut candidates = Vec::new();
    for (i, &position) in positions.iter().enumerate() {
        candidates.clear();
        grid.neighbors_into(position, &mut candidates);
        candidates.retain(|&j| j > i);
        candidates.sort_unstable();
        candidates.dedup();
        for &j in &candidates {
            if is_near(position, positions[j], threshold) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

// Cell coordinates must stay well inside i32 once divided by the threshold.
fn cells_fit_in_grid(positions: &[Vec3], threshold: f32) -> bool {
    const MAX_CELL: f32 = (1u32 << 30) as f32;

    let extent = positions
        .iter()
        .filter(|position| position.is_finite())
        .map(|position| position.abs().max_element())
        .fold(0.0, f32::max);
    extent / threshold < MAX_CELL
}
